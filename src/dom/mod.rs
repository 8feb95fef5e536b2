//! Retained page/element model over a character-cell display.
//!
//! A `Document` owns a set of `Page`s addressed by URL and keeps a history
//! stack; a page owns an ordered list of `Element`s and a focus cursor; the
//! renderer lays the active page out against the viewport and paints it
//! through the `ui` painter. All hooks receive an application-defined context
//! value instead of touching globals.

pub mod document;
pub mod element;
pub mod event;
pub mod page;
pub mod render;
pub mod style;
pub mod text;

pub use document::{Document, NavError};
pub use element::{Element, ElementKind};
pub use event::KeyEvent;
pub use page::{Extent, Page};
pub use style::{Align, ElementStyle, PageStyle, Theme};
