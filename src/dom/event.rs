use crate::core::event::KeyEvent as InputKey;

/// A key delivered to the focused element. Handlers may suppress the default
/// navigation/activation behavior for this keystroke; the flag is set once
/// and never cleared.
#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    key: InputKey,
    canceled: bool,
}

impl KeyEvent {
    pub fn new(key: InputKey) -> Self {
        Self {
            key,
            canceled: false,
        }
    }

    pub fn key(&self) -> InputKey {
        self.key
    }

    pub fn prevent_default(&mut self) {
        self.canceled = true;
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/event.rs"]
mod tests;
