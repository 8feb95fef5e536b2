use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Truncation marker substituted when content exceeds available space.
pub const ELLIPSIS: char = '…';

/// Display width of a string in terminal cells.
pub fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Fit `text` into `max_width` cells. Text that already fits is returned
/// unchanged; otherwise the tail is replaced with the ellipsis marker. A zero
/// width yields the empty string.
pub fn ellipsize(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let gw = UnicodeWidthStr::width(g);
        if used + gw > max_width - 1 {
            break;
        }
        out.push_str(g);
        used += gw;
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/dom/text.rs"]
mod tests;
