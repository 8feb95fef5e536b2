use std::collections::HashMap;

use crate::core::event::{KeyCode, KeyModifiers};
use crate::ui::core::style::Mod;

use super::event::KeyEvent;
use super::page::Page;
use super::style::{Align, ElementStyle};
use super::text;

/// Hook invoked with the owning page, the element's index within it, and the
/// application context. Elements reach their page through this pair instead of
/// a stored back-reference.
pub type ElementHook<C> = fn(&mut Page<C>, usize, &mut C);

/// Key hook; runs instead of the variant's built-in key handling.
pub type KeyHook<C> = fn(&mut Page<C>, usize, &mut KeyEvent, &mut C);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputState {
    pub label: String,
    pub value: String,
    /// Render the value bracketed, `label: [value]`.
    pub boxed: bool,
    /// Edit mode: printable keys append to the value.
    pub editing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownState {
    pub label: String,
    pub choices: Vec<String>,
    pub value: String,
    pub editing: bool,
}

impl DropdownState {
    fn position(&self) -> usize {
        self.choices
            .iter()
            .position(|c| *c == self.value)
            .unwrap_or(0)
    }

    pub fn select_next(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        let next = (self.position() + 1) % self.choices.len();
        self.value = self.choices[next].clone();
    }

    pub fn select_previous(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        let len = self.choices.len();
        let prev = (self.position() + len - 1) % len;
        self.value = self.choices[prev].clone();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxState {
    pub label: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkState {
    pub label: String,
    /// URL navigated to when the link is activated.
    pub target: String,
}

/// Element capabilities, resolved once at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    /// Horizontal separator refilled to the page interior width at pre-render.
    Rule { fill: char },
    Selectable,
    Input(InputState),
    Dropdown(DropdownState),
    Checkbox(CheckboxState),
    Link(LinkState),
}

pub struct Element<C> {
    pub text: String,
    pub style: ElementStyle,
    pub id: String,
    pub tags: Vec<String>,
    pub data: HashMap<String, String>,
    pub kind: ElementKind,
    pub on_mount: Option<ElementHook<C>>,
    pub on_unmount: Option<ElementHook<C>>,
    pub on_refresh: Option<ElementHook<C>>,
    pub on_key: Option<KeyHook<C>>,
    pub on_activate: Option<ElementHook<C>>,
}

// Hand-written so the context type needs no `Clone` bound; hooks are `Copy`
// function pointers.
impl<C> Clone for Element<C> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            style: self.style.clone(),
            id: self.id.clone(),
            tags: self.tags.clone(),
            data: self.data.clone(),
            kind: self.kind.clone(),
            on_mount: self.on_mount,
            on_unmount: self.on_unmount,
            on_refresh: self.on_refresh,
            on_key: self.on_key,
            on_activate: self.on_activate,
        }
    }
}

impl<C> Element<C> {
    fn with_kind(kind: ElementKind, text: String) -> Self {
        Self {
            text,
            style: ElementStyle::default(),
            id: String::new(),
            tags: Vec::new(),
            data: HashMap::new(),
            kind,
            on_mount: None,
            on_unmount: None,
            on_refresh: None,
            on_key: None,
            on_activate: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Text, text.into())
    }

    /// A single blank line.
    pub fn blank() -> Self {
        Self::with_kind(ElementKind::Text, String::new())
    }

    pub fn rule(fill: char) -> Self {
        Self::with_kind(ElementKind::Rule { fill }, String::new())
    }

    pub fn selectable(text: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Selectable, text.into())
    }

    pub fn input(label: impl Into<String>, value: impl Into<String>, boxed: bool) -> Self {
        Self::with_kind(
            ElementKind::Input(InputState {
                label: label.into(),
                value: value.into(),
                boxed,
                editing: false,
            }),
            String::new(),
        )
    }

    /// Dropdown over `choices`; an empty `value` selects the first choice.
    pub fn dropdown(
        label: impl Into<String>,
        choices: Vec<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut value = value.into();
        if value.is_empty() {
            if let Some(first) = choices.first() {
                value = first.clone();
            }
        }
        Self::with_kind(
            ElementKind::Dropdown(DropdownState {
                label: label.into(),
                choices,
                value,
                editing: false,
            }),
            String::new(),
        )
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        let mut elem = Self::with_kind(
            ElementKind::Checkbox(CheckboxState {
                label: label.into(),
                checked,
            }),
            String::new(),
        );
        elem.update_text();
        elem
    }

    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::with_kind(
            ElementKind::Link(LinkState {
                label: label.into(),
                target: target.into(),
            }),
            String::new(),
        )
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn on_mount(mut self, hook: ElementHook<C>) -> Self {
        self.on_mount = Some(hook);
        self
    }

    pub fn on_unmount(mut self, hook: ElementHook<C>) -> Self {
        self.on_unmount = Some(hook);
        self
    }

    pub fn on_refresh(mut self, hook: ElementHook<C>) -> Self {
        self.on_refresh = Some(hook);
        self
    }

    pub fn on_key(mut self, hook: KeyHook<C>) -> Self {
        self.on_key = Some(hook);
        self
    }

    pub fn on_activate(mut self, hook: ElementHook<C>) -> Self {
        self.on_activate = Some(hook);
        self
    }

    /// Whether this element can take keyboard focus. Resolved from the
    /// capability tag, never from the element's current text or style.
    pub fn is_focusable(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Selectable
                | ElementKind::Input(_)
                | ElementKind::Dropdown(_)
                | ElementKind::Checkbox(_)
                | ElementKind::Link(_)
        )
    }

    /// The lines this element displays: text split on line breaks, the first
    /// `display_index` lines dropped, then truncated or padded to the fixed
    /// height when one is set.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self
            .text
            .split('\n')
            .skip(self.style.display_index)
            .collect();
        if let Some(h) = self.style.height {
            let h = h as usize;
            lines.truncate(h);
            while lines.len() < h {
                lines.push("");
            }
        }
        lines
    }

    pub fn display_height(&self) -> usize {
        match self.style.height {
            Some(h) => h as usize,
            None => self.lines().len(),
        }
    }

    /// Widest display line plus the indent on the aligned side. Centered
    /// elements have no indent side.
    pub fn display_width(&self) -> usize {
        let widest = self.text.split('\n').map(text::width).max().unwrap_or(0);
        let indent = match self.style.align {
            Align::Center => 0,
            Align::Left | Align::Right => self.style.indent as usize,
        };
        widest + indent
    }

    pub fn as_input(&self) -> Option<&InputState> {
        match &self.kind {
            ElementKind::Input(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_input_mut(&mut self) -> Option<&mut InputState> {
        match &mut self.kind {
            ElementKind::Input(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_dropdown(&self) -> Option<&DropdownState> {
        match &self.kind {
            ElementKind::Dropdown(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_dropdown_mut(&mut self) -> Option<&mut DropdownState> {
        match &mut self.kind {
            ElementKind::Dropdown(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_checkbox(&self) -> Option<&CheckboxState> {
        match &self.kind {
            ElementKind::Checkbox(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_checkbox_mut(&mut self) -> Option<&mut CheckboxState> {
        match &mut self.kind {
            ElementKind::Checkbox(state) => Some(state),
            _ => None,
        }
    }

    pub fn link_target(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Link(state) => Some(&state.target),
            _ => None,
        }
    }

    /// Re-derive the display text from the variant state. Variants without
    /// derived text keep their text untouched.
    pub fn update_text(&mut self) {
        self.text = match &self.kind {
            ElementKind::Input(state) => field_text(&state.label, &state.value, state.boxed),
            ElementKind::Dropdown(state) => field_text(&state.label, &state.value, true),
            ElementKind::Checkbox(state) => {
                format!(
                    "{}: [{}]",
                    state.label,
                    if state.checked { "✓" } else { " " }
                )
            }
            ElementKind::Link(state) => format!("{} →", state.label),
            ElementKind::Text | ElementKind::Rule { .. } | ElementKind::Selectable => return,
        };
    }

    /// Variant behavior at mount time: links derive their display text.
    pub(crate) fn default_mount(&mut self) {
        if matches!(self.kind, ElementKind::Link(_)) {
            self.update_text();
        }
    }

    /// Variant behavior at pre-render time: rules refill to the interior
    /// width, editable fields re-derive text and underline while editing.
    pub(crate) fn default_refresh(&mut self, page_display_width: u16) {
        match &self.kind {
            ElementKind::Rule { fill } => {
                let width = (page_display_width as usize).saturating_sub(2);
                self.text = fill.to_string().repeat(width);
            }
            ElementKind::Input(state) => {
                self.style.weight = if state.editing {
                    Mod::UNDERLINE
                } else {
                    Mod::NONE
                };
                self.update_text();
            }
            ElementKind::Dropdown(state) => {
                self.style.weight = if state.editing {
                    Mod::UNDERLINE
                } else {
                    Mod::NONE
                };
                self.update_text();
            }
            _ => {}
        }
    }

    /// Variant key handling, used when no custom key hook is set. While an
    /// editable field is in edit mode every key suppresses the default
    /// navigation for that keystroke.
    pub(crate) fn default_key(&mut self, event: &mut KeyEvent) {
        match &mut self.kind {
            ElementKind::Input(state) => {
                let key = event.key();
                if state.editing {
                    event.prevent_default();
                    match key.code {
                        KeyCode::Char(ch) if is_typing(key.modifiers) => state.value.push(ch),
                        KeyCode::Backspace => {
                            state.value.pop();
                        }
                        KeyCode::Esc => state.editing = false,
                        _ => {}
                    }
                }
                if key.code == KeyCode::Enter {
                    state.editing = !state.editing;
                }
            }
            ElementKind::Dropdown(state) => {
                let key = event.key();
                if state.editing {
                    event.prevent_default();
                    match key.code {
                        KeyCode::Down => state.select_next(),
                        KeyCode::Up => state.select_previous(),
                        KeyCode::Esc => state.editing = false,
                        _ => {}
                    }
                }
                if key.code == KeyCode::Enter {
                    state.editing = !state.editing;
                }
            }
            _ => return,
        }
        self.update_text();
    }

    /// Variant activation, used when no custom activate hook is set.
    pub(crate) fn default_activate(&mut self) {
        if let ElementKind::Checkbox(state) = &mut self.kind {
            state.checked = !state.checked;
            self.update_text();
        }
    }
}

fn field_text(label: &str, value: &str, boxed: bool) -> String {
    let mut out = String::new();
    out.push_str(label);
    if !label.is_empty() {
        out.push_str(": ");
    }
    if boxed {
        out.push('[');
    }
    out.push_str(value);
    if boxed {
        out.push(']');
    }
    out
}

/// Plain typing: no modifiers beyond SHIFT.
fn is_typing(modifiers: KeyModifiers) -> bool {
    KeyModifiers::SHIFT.contains(modifiers)
}

#[cfg(test)]
#[path = "../../tests/unit/dom/element.rs"]
mod tests;
