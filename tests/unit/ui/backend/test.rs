use super::*;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Color, Style};

fn styled() -> Style {
    Style::default().fg(Color::Indexed(4))
}

#[test]
fn text_lands_in_cells() {
    let mut backend = TestBackend::new(10, 3);
    let mut p = Painter::new();
    p.text(Pos::new(2, 1), "ab", styled());
    backend.draw(Rect::new(0, 0, 10, 3), p.cmds());

    let buf = backend.buffer();
    assert_eq!(buf.cell(2, 1).unwrap().symbol, "a");
    assert_eq!(buf.cell(3, 1).unwrap().symbol, "b");
    assert_eq!(buf.cell(2, 1).unwrap().style, styled());
}

#[test]
fn text_clips_at_right_edge() {
    let mut backend = TestBackend::new(4, 1);
    let mut p = Painter::new();
    p.text(Pos::new(2, 0), "long", styled());
    backend.draw(Rect::new(0, 0, 4, 1), p.cmds());

    let buf = backend.buffer();
    assert_eq!(buf.row_text(0), "  lo");
}

#[test]
fn out_of_bounds_text_is_discarded() {
    let mut backend = TestBackend::new(4, 2);
    let mut p = Painter::new();
    p.text(Pos::new(0, 5), "below", styled());
    p.text(Pos::new(9, 0), "right", styled());
    backend.draw(Rect::new(0, 0, 4, 2), p.cmds());

    let buf = backend.buffer();
    assert_eq!(buf.row_text(0), "    ");
    assert_eq!(buf.row_text(1), "    ");
}

#[test]
fn fill_rect_sets_region_and_clips() {
    let mut backend = TestBackend::new(4, 4);
    let mut p = Painter::new();
    p.fill_rect(Rect::new(2, 2, 10, 10), styled());
    backend.draw(Rect::new(0, 0, 4, 4), p.cmds());

    let buf = backend.buffer();
    assert_eq!(buf.cell(1, 1).unwrap().style, Style::default());
    assert_eq!(buf.cell(2, 2).unwrap().style, styled());
    assert_eq!(buf.cell(3, 3).unwrap().style, styled());
}

#[test]
fn wide_glyph_not_split_at_edge() {
    let mut backend = TestBackend::new(3, 1);
    let mut p = Painter::new();
    // '世' is two cells wide; starting at x=2 it would straddle the edge.
    p.text(Pos::new(2, 0), "世", styled());
    backend.draw(Rect::new(0, 0, 3, 1), p.cmds());

    assert_eq!(backend.buffer().row_text(0), "   ");
}

#[test]
fn wide_glyph_occupies_two_cells() {
    let mut backend = TestBackend::new(4, 1);
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "世x", styled());
    backend.draw(Rect::new(0, 0, 4, 1), p.cmds());

    let buf = backend.buffer();
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "世");
    assert_eq!(buf.cell(1, 0).unwrap().symbol, " ");
    assert_eq!(buf.cell(2, 0).unwrap().symbol, "x");
}
