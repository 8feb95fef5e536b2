use super::*;
use crate::ui::core::style::{Color, Mod};

#[test]
fn element_style_defaults() {
    let style = ElementStyle::default();
    assert_eq!(style.color, None);
    assert_eq!(style.align, Align::Left);
    assert!(style.weight.is_empty());
    assert_eq!(style.indent, 0);
    assert!(style.visible);
    assert_eq!(style.height, None);
    assert_eq!(style.display_index, 0);
}

#[test]
fn element_style_builders() {
    let style = ElementStyle::default()
        .color(Color::Indexed(2))
        .align(Align::Right)
        .weight(Mod::BOLD)
        .indent(3)
        .height(4)
        .hidden();
    assert_eq!(style.color, Some(Color::Indexed(2)));
    assert_eq!(style.align, Align::Right);
    assert_eq!(style.weight, Mod::BOLD);
    assert_eq!(style.indent, 3);
    assert_eq!(style.height, Some(4));
    assert!(!style.visible);
}

#[test]
fn page_style_defaults_to_full_chrome() {
    let style = PageStyle::default();
    assert!(style.border);
    assert!(style.shadow);
    assert_eq!(style.margin, (1, 1));
}

#[test]
fn page_style_builders() {
    let style = PageStyle::default().border(false).shadow(false).margin(0, 2);
    assert!(!style.border);
    assert!(!style.shadow);
    assert_eq!(style.margin, (0, 2));
}
