use std::collections::HashMap;

use super::element::Element;
use super::style::PageStyle;

/// One axis of a page's geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extent {
    /// Derived from content (plus margins).
    Auto,
    /// Exactly this many cells.
    Fixed(u16),
    /// Viewport minus this many cells on each side.
    Inset(u16),
}

/// Page lifecycle hook.
pub type PageHook<C> = fn(&mut Page<C>, &mut C);

/// A navigable screen: geometry, style, element list and a focus cursor.
///
/// The focus cursor, when set, always points at an element that is focusable
/// and visible; it is `None` only when no such element exists.
pub struct Page<C> {
    pub url: String,
    pub title: String,
    /// (height, width) extents.
    pub size: (Extent, Extent),
    pub style: PageStyle,
    pub elements: Vec<Element<C>>,
    pub data: HashMap<String, String>,
    /// Stateless pages are re-instantiated from the registered template on
    /// every visit; stateful pages persist across visits.
    pub stateless: bool,
    pub on_mount: Option<PageHook<C>>,
    pub on_unmount: Option<PageHook<C>>,
    pub on_refresh: Option<PageHook<C>>,
    focused: Option<usize>,
    /// (height, width) of the page box at the last render; separators size
    /// themselves against this.
    pub(crate) display_size: (u16, u16),
}

impl<C> Clone for Page<C> {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            title: self.title.clone(),
            size: self.size,
            style: self.style.clone(),
            elements: self.elements.clone(),
            data: self.data.clone(),
            stateless: self.stateless,
            on_mount: self.on_mount,
            on_unmount: self.on_unmount,
            on_refresh: self.on_refresh,
            focused: self.focused,
            display_size: self.display_size,
        }
    }
}

impl<C> Page<C> {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        size: (Extent, Extent),
        elements: Vec<Element<C>>,
    ) -> Self {
        let mut page = Self {
            url: url.into(),
            title: title.into(),
            size,
            style: PageStyle::default(),
            elements,
            data: HashMap::new(),
            stateless: true,
            on_mount: None,
            on_unmount: None,
            on_refresh: None,
            focused: None,
            display_size: (0, 0),
        };
        page.focus_next();
        page
    }

    pub fn style(mut self, style: PageStyle) -> Self {
        self.style = style;
        self
    }

    pub fn stateful(mut self) -> Self {
        self.stateless = false;
        self
    }

    pub fn on_mount(mut self, hook: PageHook<C>) -> Self {
        self.on_mount = Some(hook);
        self
    }

    pub fn on_unmount(mut self, hook: PageHook<C>) -> Self {
        self.on_unmount = Some(hook);
        self
    }

    pub fn on_refresh(mut self, hook: PageHook<C>) -> Self {
        self.on_refresh = Some(hook);
        self
    }

    /// A fresh instance of this page for a new visit: owned state is deep-
    /// copied, per-visit render state is reset and focus re-homed to the
    /// first eligible element.
    pub fn instantiate(&self) -> Self {
        let mut page = self.clone();
        page.display_size = (0, 0);
        page.focused = None;
        page.focus_next();
        page
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_element(&self) -> Option<&Element<C>> {
        self.elements.get(self.focused?)
    }

    fn is_candidate(&self, index: usize) -> bool {
        let elem = &self.elements[index];
        elem.is_focusable() && elem.style.visible
    }

    /// Move focus to the next focusable, visible element, scanning forward
    /// from just after the current focus and wrapping once. With no eligible
    /// element the focus becomes `None`.
    pub fn focus_next(&mut self) {
        let len = self.elements.len();
        if len == 0 {
            self.focused = None;
            return;
        }
        let start = match self.focused {
            None => 0,
            Some(i) => (i + 1) % len,
        };
        for offset in 0..len {
            let i = (start + offset) % len;
            if self.is_candidate(i) {
                self.focused = Some(i);
                return;
            }
        }
        self.focused = None;
    }

    /// Move focus to the previous focusable, visible element, scanning
    /// backward and wrapping once.
    pub fn focus_previous(&mut self) {
        let len = self.elements.len();
        if len == 0 {
            self.focused = None;
            return;
        }
        let start = match self.focused {
            None => 0,
            Some(i) => (i + len - 1) % len,
        };
        for offset in 0..len {
            let i = (start + len - offset) % len;
            if self.is_candidate(i) {
                self.focused = Some(i);
                return;
            }
        }
        self.focused = None;
    }

    /// Insert elements at `index` (append when `None`), running each new
    /// element's mount behavior and hook in order.
    pub fn add_elements(&mut self, elements: Vec<Element<C>>, index: Option<usize>, ctx: &mut C) {
        let mut at = index.unwrap_or(self.elements.len()).min(self.elements.len());
        let count = elements.len();
        for elem in elements {
            self.elements.insert(at, elem);
            at += 1;
        }
        let first = at - count;
        if let Some(focused) = self.focused {
            if first <= focused {
                self.focused = Some(focused + count);
            }
        }
        for i in first..at {
            self.mount_element(i, ctx);
        }
    }

    pub fn add_element(&mut self, element: Element<C>, ctx: &mut C) {
        self.add_elements(vec![element], None, ctx);
    }

    /// Remove the element at `index`. When it holds focus, the focus is
    /// re-homed first and cleared if no other element qualifies, so the page
    /// never keeps a dangling cursor.
    pub fn remove_element(&mut self, index: usize) {
        if index >= self.elements.len() {
            return;
        }
        if self.focused == Some(index) {
            self.focus_previous();
            if self.focused == Some(index) {
                self.focused = None;
            }
        }
        self.elements.remove(index);
        if let Some(focused) = self.focused {
            if focused > index {
                self.focused = Some(focused - 1);
            }
        }
    }

    pub fn position_by_id(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element<C>> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element<C>> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<&Element<C>> {
        self.elements
            .iter()
            .filter(|e| e.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// (height, width) of the page box at the last render.
    pub fn display_size(&self) -> (u16, u16) {
        self.display_size
    }

    pub(crate) fn mount_element(&mut self, index: usize, ctx: &mut C) {
        self.elements[index].default_mount();
        if let Some(hook) = self.elements[index].on_mount {
            hook(self, index, ctx);
        }
    }

    pub(crate) fn run_mount(&mut self, ctx: &mut C) {
        let mut i = 0;
        while i < self.elements.len() {
            self.mount_element(i, ctx);
            i += 1;
        }
        if let Some(hook) = self.on_mount {
            hook(self, ctx);
        }
    }

    pub(crate) fn run_unmount(&mut self, ctx: &mut C) {
        let mut i = 0;
        while i < self.elements.len() {
            if let Some(hook) = self.elements[i].on_unmount {
                hook(self, i, ctx);
            }
            i += 1;
        }
        if let Some(hook) = self.on_unmount {
            hook(self, ctx);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/page.rs"]
mod tests;
