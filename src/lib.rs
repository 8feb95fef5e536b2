//! zport — a serial-port console for the terminal.
//!
//! Module structure:
//! - core: input primitives (key codes, input events)
//! - dom: retained page/element model, focus, layout and rendering
//! - ui: paint-command layer and cell-buffer backends
//! - tui: terminal setup and crossterm event conversion
//! - serial: port enumeration, connection and byte decoding
//! - services: settings persistence
//! - app: pages, session state and the main loop

#[cfg(feature = "serial")]
pub mod app;
pub mod core;
pub mod dom;
pub mod serial;
pub mod services;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
