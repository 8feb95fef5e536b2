use std::fmt;

use tracing::{debug, info};

use crate::core::event::{KeyCode, KeyEvent as InputKey};

use super::event::KeyEvent;
use super::page::Page;
use super::style::Theme;

/// URL of the page `navigate_home` prefers.
pub const HOME_URL: &str = "home";

#[derive(Debug, PartialEq, Eq)]
pub enum NavError {
    UnknownUrl(String),
    NoPages,
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownUrl(url) => write!(f, "no page registered for url: {}", url),
            NavError::NoPages => write!(f, "no pages registered"),
        }
    }
}

impl std::error::Error for NavError {}

/// Top-level registry and navigator: owns the pages, the active instance, the
/// history stack, the scroll offset and the status line.
pub struct Document<C> {
    pages: Vec<Page<C>>,
    pub(crate) active: Option<Page<C>>,
    active_index: Option<usize>,
    history: Vec<String>,
    pub(crate) status: String,
    pub(crate) theme: Theme,
    /// Vertical scroll offset of the active page's content viewport.
    pub(crate) display_line: usize,
}

impl<C> Document<C> {
    pub fn new(theme: Theme) -> Self {
        Self {
            pages: Vec::new(),
            active: None,
            active_index: None,
            history: Vec::new(),
            status: String::new(),
            theme,
            display_line: 0,
        }
    }

    /// Register pages. URLs are expected to be unique; a later page with a
    /// duplicate URL is never reached by lookup.
    pub fn register(&mut self, pages: Vec<Page<C>>) {
        self.pages.extend(pages);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_page(&self) -> Option<&Page<C>> {
        self.active.as_ref()
    }

    pub fn active_page_mut(&mut self) -> Option<&mut Page<C>> {
        self.active.as_mut()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn display_line(&self) -> usize {
        self.display_line
    }

    /// Free-text status line, overlaid at the top-left of every frame.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Instantiate the page registered under `url` and run its mount hooks
    /// (elements in list order, then the page). The registry itself is not
    /// changed; on failure no state is touched.
    fn load(&mut self, url: &str, ctx: &mut C) -> Result<(usize, Page<C>), NavError> {
        let index = self
            .pages
            .iter()
            .position(|p| p.url == url)
            .ok_or_else(|| NavError::UnknownUrl(url.to_string()))?;

        let template = &self.pages[index];
        let mut page = if template.stateless {
            template.instantiate()
        } else {
            template.clone()
        };
        page.run_mount(ctx);
        Ok((index, page))
    }

    pub fn navigate(&mut self, url: &str, ctx: &mut C) -> Result<(), NavError> {
        self.navigate_inner(url, false, ctx)
    }

    fn navigate_inner(&mut self, url: &str, from_history: bool, ctx: &mut C) -> Result<(), NavError> {
        let (index, page) = self.load(url, ctx)?;

        if let Some(mut current) = self.active.take() {
            if !from_history {
                self.history.push(current.url.clone());
            }
            current.run_unmount(ctx);
            // Stateful pages keep their live instance across visits.
            if !current.stateless {
                if let Some(i) = self.active_index {
                    self.pages[i] = current;
                }
            }
        }

        info!(url, from_history, "navigate");
        self.active = Some(page);
        self.active_index = Some(index);
        Ok(())
    }

    /// Navigate to the canonical home page, falling back to the first
    /// registered page when no page claims the home URL.
    pub fn navigate_home(&mut self, ctx: &mut C) -> Result<(), NavError> {
        if self.navigate(HOME_URL, ctx).is_ok() {
            return Ok(());
        }
        let first = self.pages.first().map(|p| p.url.clone()).ok_or(NavError::NoPages)?;
        self.navigate(&first, ctx)
    }

    /// Pop the most recent history entry and navigate to it without pushing
    /// the page being left. Returns whether a navigation happened.
    pub fn go_back(&mut self, ctx: &mut C) -> bool {
        let Some(url) = self.history.pop() else {
            return false;
        };
        self.navigate_inner(&url, true, ctx).is_ok()
    }

    /// Dispatch one keystroke: Back/Left pops history independent of focus;
    /// otherwise the focused element's handler (custom hook, or the variant
    /// default) runs first and may suppress the default behavior, then the
    /// defaults: Up/Down move focus, Enter activates, Right follows links.
    pub fn handle_key(&mut self, input: InputKey, ctx: &mut C) {
        if input.code == KeyCode::Left {
            self.go_back(ctx);
            return;
        }

        let Some(page) = self.active.as_mut() else {
            return;
        };
        let Some(index) = page.focused() else {
            return;
        };

        let mut event = KeyEvent::new(input);
        if let Some(hook) = page.elements[index].on_key {
            hook(page, index, &mut event, ctx);
        } else {
            page.elements[index].default_key(&mut event);
        }
        if event.is_canceled() {
            debug!(code = ?input.code, "default suppressed");
            return;
        }

        match input.code {
            KeyCode::Up => {
                if let Some(page) = self.active.as_mut() {
                    page.focus_previous();
                }
            }
            KeyCode::Down => {
                if let Some(page) = self.active.as_mut() {
                    page.focus_next();
                }
            }
            KeyCode::Enter => self.activate_focused(ctx),
            KeyCode::Right => {
                let is_link = self
                    .active
                    .as_ref()
                    .and_then(|p| p.focused_element())
                    .is_some_and(|e| e.link_target().is_some());
                if is_link {
                    self.activate_focused(ctx);
                }
            }
            _ => {}
        }
    }

    /// Run the focused element's activation (custom hook, or the variant
    /// default), then follow it if it is a link.
    fn activate_focused(&mut self, ctx: &mut C) {
        let Some(page) = self.active.as_mut() else {
            return;
        };
        let Some(index) = page.focused() else {
            return;
        };

        if let Some(hook) = page.elements[index].on_activate {
            hook(page, index, ctx);
        } else {
            page.elements[index].default_activate();
        }

        // The hook may have rearranged the page; only follow a link that is
        // still there.
        let target = self
            .active
            .as_ref()
            .and_then(|p| p.elements.get(index))
            .and_then(|e| e.link_target())
            .map(str::to_string);
        if let Some(target) = target {
            let _ = self.navigate(&target, ctx);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/document.rs"]
mod tests;
