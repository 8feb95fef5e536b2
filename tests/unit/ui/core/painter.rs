use super::*;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::Style;

#[test]
fn commands_accumulate_in_order() {
    let mut p = Painter::new();
    p.fill_rect(Rect::new(0, 0, 4, 4), Style::default());
    p.text(Pos::new(1, 1), "hi", Style::default());

    assert_eq!(p.cmds().len(), 2);
    assert!(matches!(p.cmds()[0], PaintCmd::FillRect { .. }));
    assert!(matches!(p.cmds()[1], PaintCmd::Text { ref text, .. } if text == "hi"));
}

#[test]
fn clear_drops_commands() {
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "x", Style::default());
    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn clipped_text_records_clip() {
    let mut p = Painter::new();
    let clip = Rect::new(2, 2, 3, 1);
    p.text_clipped(Pos::new(0, 2), "clipped", Style::default(), clip);
    assert!(matches!(p.cmds()[0], PaintCmd::Text { clip: Some(c), .. } if c == clip));
}
