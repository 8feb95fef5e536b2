//! Input primitives shared by the engine and the terminal edge.

pub mod event;

pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
