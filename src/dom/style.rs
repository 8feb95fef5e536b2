use crate::ui::core::style::{Color, Mod, Style};

/// Horizontal alignment of an element's lines inside the page interior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Per-element visual attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementStyle {
    /// Foreground override; `None` uses the theme's text color.
    pub color: Option<Color>,
    pub align: Align,
    pub weight: Mod,
    /// Padding applied on the aligned side, in cells.
    pub indent: u16,
    /// Hidden elements take no space and are never focus targets.
    pub visible: bool,
    /// Fixed display height; content is truncated or padded to match.
    pub height: Option<u16>,
    /// Number of leading lines dropped before display (scroll-within-element).
    pub display_index: usize,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            color: None,
            align: Align::Left,
            weight: Mod::NONE,
            indent: 0,
            visible: true,
            height: None,
            display_index: 0,
        }
    }
}

impl ElementStyle {
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn weight(mut self, weight: Mod) -> Self {
        self.weight = weight;
        self
    }

    pub fn indent(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }
}

/// Page chrome attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageStyle {
    pub border: bool,
    /// (vertical, horizontal) interior margin in cells.
    pub margin: (u16, u16),
    pub shadow: bool,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            border: true,
            margin: (1, 1),
            shadow: true,
        }
    }
}

impl PageStyle {
    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn margin(mut self, vertical: u16, horizontal: u16) -> Self {
        self.margin = (vertical, horizontal);
        self
    }

    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }
}

/// The six attribute roles the renderer paints with. Consumers treat these as
/// opaque handles; the terminal backend maps them to real attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Style,
    pub wall: Style,
    pub title: Style,
    pub text: Style,
    pub shadow: Style,
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        const BLACK: Color = Color::Indexed(0);
        const RED: Color = Color::Indexed(1);
        const YELLOW: Color = Color::Indexed(3);
        const MAGENTA: Color = Color::Indexed(5);
        const CYAN: Color = Color::Indexed(6);
        const WHITE: Color = Color::Indexed(7);

        Self {
            background: Style::default().fg(CYAN).bg(CYAN),
            wall: Style::default().fg(BLACK).bg(MAGENTA),
            title: Style::default().fg(RED).bg(MAGENTA),
            text: Style::default().fg(BLACK).bg(WHITE),
            shadow: Style::default().fg(BLACK).bg(CYAN),
            highlight: Style::default().fg(WHITE).bg(YELLOW),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/style.rs"]
mod tests;
