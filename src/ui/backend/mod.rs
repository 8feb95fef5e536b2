//! Rendering backends.
//!
//! The trait keeps the rest of the crate independent of `ratatui` types; the
//! headless backend in `test.rs` backs the unit tests.

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
