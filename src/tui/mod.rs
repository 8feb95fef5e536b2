//! Terminal setup/teardown and conversion from crossterm events.

pub mod crossterm;
pub mod terminal_guard;
