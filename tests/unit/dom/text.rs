use super::*;

#[test]
fn fits_unchanged() {
    assert_eq!(ellipsize("hello", 5), "hello");
    assert_eq!(ellipsize("hello", 10), "hello");
    assert_eq!(ellipsize("", 3), "");
}

#[test]
fn zero_width_is_empty() {
    assert_eq!(ellipsize("hello", 0), "");
}

#[test]
fn truncates_with_marker() {
    assert_eq!(ellipsize("hello", 4), "hel…");
    assert_eq!(ellipsize("hello", 1), "…");
}

#[test]
fn output_never_exceeds_width() {
    let text = "The quick brown fox";
    for w in 0..25 {
        assert!(width(&ellipsize(text, w)) <= w, "width {}", w);
    }
}

#[test]
fn wide_glyphs_measured_in_cells() {
    assert_eq!(width("世界"), 4);
    // Truncating "世界" to 3 cells: one wide glyph (2) + marker (1).
    assert_eq!(ellipsize("世界", 3), "世…");
}
