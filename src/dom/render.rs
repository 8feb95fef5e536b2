//! Layout and paint of the active page.
//!
//! The algorithm works in signed cell coordinates; `put` drops any write that
//! starts left of or above the screen, and the backend clips the rest, so a
//! frame is always fully attempted regardless of terminal size.

use super::document::Document;
use super::page::Extent;
use super::style::Align;
use super::text::{self, ELLIPSIS};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Mod, Style};

const PRE_TITLE: char = '╡';
const POST_TITLE: char = '╞';
const TOP_LEFT: char = '╔';
const TOP_RIGHT: char = '╗';
const BOTTOM_LEFT: char = '╚';
const BOTTOM_RIGHT: char = '╝';
const VERTICAL: char = '║';
const HORIZONTAL: char = '═';
const CROSS: char = '╬';

const SHADOW_BOTTOM: char = '▀';
const SHADOW_RIGHT: char = '▌';
const SHADOW_BOTTOM_LEFT: char = '▝';
const SHADOW_TOP_RIGHT: char = '▖';
const SHADOW_BOTTOM_RIGHT: char = '▘';

/// Half the width of the full title dressing, `╔╡ title ╞╗`.
const MIN_TITLE_PADDING: i32 = 3;

impl<C> Document<C> {
    /// Repaint the active page against a `(height, width)` viewport.
    pub fn render(&mut self, ctx: &mut C, viewport: (u16, u16), painter: &mut Painter) {
        let height = viewport.0 as i32;
        let width = viewport.1 as i32;
        if height == 0 || width == 0 {
            return;
        }

        let theme = self.theme;
        painter.fill_rect(Rect::new(0, 0, viewport.1, viewport.0), theme.background);

        let Some(page) = self.active.as_mut() else {
            put(painter, 0, 0, self.status.clone(), theme.shadow);
            return;
        };

        let visible: Vec<usize> = page
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.style.visible)
            .map(|(i, _)| i)
            .collect();

        if page.focused().is_none() {
            page.focus_next();
        }

        // Pre-render: variant behavior first (separators size themselves to
        // the previous frame's page box), then custom hooks, then the page's.
        let interior_width = page.display_size.1;
        for &i in &visible {
            let Some(elem) = page.elements.get_mut(i) else {
                continue;
            };
            elem.default_refresh(interior_width);
            if let Some(hook) = elem.on_refresh {
                hook(page, i, ctx);
            }
        }
        if let Some(hook) = page.on_refresh {
            hook(page, ctx);
        }

        let margin_v = page.style.margin.0 as i32;
        let margin_h = page.style.margin.1 as i32;
        let title_width = text::width(&page.title) as i32;

        let page_height = match page.size.0 {
            Extent::Auto => {
                visible
                    .iter()
                    .filter_map(|&i| page.elements.get(i))
                    .map(|e| e.display_height() as i32)
                    .sum::<i32>()
                    + margin_v * 2
            }
            Extent::Fixed(n) => n as i32,
            Extent::Inset(v) => height - 2 * v as i32,
        };

        let page_width = match page.size.1 {
            Extent::Auto => {
                let mut w = match visible
                    .iter()
                    .filter_map(|&i| page.elements.get(i))
                    .map(|e| e.display_width() as i32)
                    .max()
                {
                    Some(widest) => widest + margin_h * 2,
                    None => 0,
                };
                if page.style.border && title_width > w {
                    w = title_width + MIN_TITLE_PADDING * 2;
                }
                w
            }
            Extent::Fixed(n) => n as i32,
            Extent::Inset(v) => width - 2 * v as i32,
        };

        let usable_w = width.min(page_width).max(0);
        let usable_h = height.min(page_height).max(0);
        let textspace = (usable_w - margin_h * 2).max(0);
        let linespace = (usable_h - margin_v * 2).max(0);
        let top = ((height - page_height) / 2).max(0);
        let left = ((width - page_width) / 2).max(0);

        page.display_size = (usable_h as u16, usable_w as u16);

        if page.style.shadow {
            let b = page.style.border as i32;
            let nb = 1 - b;
            // The bottom run loses a cell when the border is squeezed against
            // the right viewport edge.
            let squeezed = (page.style.border && width <= page_width) as i32;
            let run = (usable_w - 1 + 2 * b - squeezed).max(0) as usize;
            put(
                painter,
                top + usable_h + b,
                left + nb,
                SHADOW_BOTTOM.to_string().repeat(run),
                theme.shadow,
            );

            put(
                painter,
                top - b,
                left + page_width + b,
                SHADOW_TOP_RIGHT.to_string(),
                theme.shadow,
            );
            for line in 0..(usable_h - 1 + 2 * b).max(0) {
                put(
                    painter,
                    top + line + nb,
                    left + page_width + b,
                    SHADOW_RIGHT.to_string(),
                    theme.shadow,
                );
            }

            put(
                painter,
                top + usable_h + b,
                left - b,
                SHADOW_BOTTOM_LEFT.to_string(),
                theme.shadow,
            );
            put(
                painter,
                top + usable_h + b,
                left + usable_w + b,
                SHADOW_BOTTOM_RIGHT.to_string(),
                theme.shadow,
            );
        }

        if page.style.border {
            // Title connectors degrade as the viewport narrows below
            // `title + 6` columns, down to a single glyph.
            let (pre, post) = if width <= 6 + title_width {
                let pre = match width.min(6) {
                    i32::MIN..=0 => String::new(),
                    1 => CROSS.to_string(),
                    2 | 3 => format!("{HORIZONTAL}{CROSS}"),
                    4 => format!("{HORIZONTAL}{PRE_TITLE}"),
                    _ => format!("{HORIZONTAL}{PRE_TITLE} "),
                };
                let post = match width.min(6) / 2 {
                    i32::MIN..=0 => String::new(),
                    1 => HORIZONTAL.to_string(),
                    2 => format!("{POST_TITLE}{HORIZONTAL}"),
                    _ => format!(" {POST_TITLE}{HORIZONTAL}"),
                };
                (pre, post)
            } else {
                let pre_run = ((usable_w + 2 - title_width) / 2 - 3).max(0) as usize;
                let post_run = (ceil_half(usable_w + 2 - title_width) - 3).max(0) as usize;
                (
                    format!("{}{} ", HORIZONTAL.to_string().repeat(pre_run), PRE_TITLE),
                    format!(" {}{}", POST_TITLE, HORIZONTAL.to_string().repeat(post_run)),
                )
            };

            let title = text::ellipsize(
                &page.title,
                (usable_w - MIN_TITLE_PADDING * 2).max(0) as usize,
            );

            // Side walls only where the viewport leaves room beyond the page
            // box; never drawn over the page itself.
            for line in top..top + usable_h {
                if width > page_width + 1 {
                    put(painter, line, left - 1, VERTICAL.to_string(), theme.wall);
                }
                if width > page_width {
                    put(painter, line, left + usable_w, VERTICAL.to_string(), theme.wall);
                }
            }

            if height > page_height + 1 {
                let pre_w = text::width(&pre) as i32;
                let title_w = text::width(&title) as i32;
                put(painter, top - 1, left, pre.clone(), theme.wall);
                put(
                    painter,
                    top - 1,
                    left + pre_w,
                    title,
                    theme.title.add_mod(Mod::BOLD),
                );
                put(painter, top - 1, left + pre_w + title_w, post, theme.wall);
            }

            if height > page_height {
                put(
                    painter,
                    top + usable_h,
                    left,
                    HORIZONTAL.to_string().repeat(usable_w.max(0) as usize),
                    theme.wall,
                );
            }

            // Corners are attempted unconditionally; out-of-screen ones drop.
            put(painter, top - 1, left - 1, TOP_LEFT.to_string(), theme.wall);
            put(painter, top - 1, left + usable_w, TOP_RIGHT.to_string(), theme.wall);
            put(painter, top + usable_h, left - 1, BOTTOM_LEFT.to_string(), theme.wall);
            put(
                painter,
                top + usable_h,
                left + usable_w,
                BOTTOM_RIGHT.to_string(),
                theme.wall,
            );
        }

        painter.fill_rect(
            Rect::new(left as u16, top as u16, usable_w as u16, usable_h as u16),
            theme.text,
        );

        if visible.is_empty() {
            return;
        }

        let total: i32 = visible
            .iter()
            .filter_map(|&i| page.elements.get(i))
            .map(|e| e.display_height() as i32)
            .sum();

        // Follow the focused element: keep its first content line one row off
        // the bottom and two rows off the top of the window.
        let mut display_line = self.display_line as i32;
        if let Some(focused) = page.focused() {
            let mut focus_line = 1i32;
            for &i in &visible {
                if i == focused {
                    break;
                }
                focus_line += page.elements.get(i).map_or(0, |e| e.display_height()) as i32;
            }
            if focus_line - display_line >= linespace - 1 {
                display_line = (focus_line + 1 - linespace).min(total - linespace);
            } else if focus_line < display_line + 2 {
                display_line = (focus_line - 2).max(0);
            }
        }
        display_line = display_line.clamp(0, (total - linespace).max(0));
        self.display_line = display_line as usize;

        let mut current = 0i32;
        for &ei in &visible {
            let Some(elem) = page.elements.get(ei) else {
                continue;
            };
            let is_focused = page.focused() == Some(ei);
            for line in elem.lines() {
                if current < display_line {
                    current += 1;
                    continue;
                }

                let mut style = theme.text;
                let mut x = margin_h;
                let mut string = String::new();

                if current < linespace + display_line {
                    let cut_below = current - display_line == linespace - 1 && current != total - 1;
                    let cut_above = current == display_line && display_line != 0;
                    if cut_below || cut_above {
                        string.push(ELLIPSIS);
                    } else {
                        string.push_str(line);
                        let line_width = text::width(&string) as i32;
                        x += match elem.style.align {
                            Align::Left => elem.style.indent as i32,
                            Align::Center => (textspace - line_width) / 2,
                            Align::Right => textspace - line_width - elem.style.indent as i32,
                        };
                        if let Some(color) = elem.style.color {
                            style = style.fg(color);
                        }
                        style = style.add_mod(elem.style.weight);
                    }
                }

                let string = text::ellipsize(
                    &string,
                    (textspace - elem.style.indent as i32).max(0) as usize,
                );
                let row = top + current + margin_v - display_line;
                if is_focused {
                    put(
                        painter,
                        row,
                        left + x,
                        string,
                        theme
                            .highlight
                            .add_mod(elem.style.weight)
                            .add_mod(Mod::BOLD),
                    );
                } else {
                    put(painter, row, left + x, string, style);
                }

                current += 1;
            }
        }

        put(painter, 0, 0, self.status.clone(), theme.shadow);
    }
}

/// Ceiling of `a / 2` for the signed values the title math produces.
fn ceil_half(a: i32) -> i32 {
    if a >= 0 {
        (a + 1) / 2
    } else {
        a / 2
    }
}

/// Write `text` at `(row, col)`, silently discarding writes that start
/// off-screen; the backend clips the rest cell by cell.
fn put(painter: &mut Painter, row: i32, col: i32, text: String, style: Style) {
    if text.is_empty() {
        return;
    }
    if row < 0 || col < 0 || row > u16::MAX as i32 || col > u16::MAX as i32 {
        return;
    }
    painter.text(Pos::new(col as u16, row as u16), text, style);
}

#[cfg(test)]
#[path = "../../tests/unit/dom/render.rs"]
mod tests;
