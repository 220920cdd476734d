//! In-memory element tree with hit-testing, focus and event dispatch.

use super::{Element, ElementHandle, ElementKind, Rect, SyntheticEvent};

/// The simulated desktop surface.
///
/// Elements are stacked in insertion order: later elements are drawn on top
/// and win hit-tests. The first element is the desktop root, which acts as
/// the document body when nothing else has focus.
#[derive(Debug, Clone)]
pub struct Desktop {
    elements: Vec<Element>,
    focused: Option<ElementHandle>,
    events: Vec<SyntheticEvent>,
}

impl Desktop {
    /// An empty desktop with only the root element
    pub fn new(width: u32, height: u32) -> Self {
        let root = Element::new(
            ElementKind::Div,
            Rect::new(0, 0, i64::from(width), i64::from(height)),
        )
        .with_id("desktop")
        .with_aria_label("Desktop");

        Self {
            elements: vec![root],
            focused: None,
            events: Vec::new(),
        }
    }

    pub fn root(&self) -> ElementHandle {
        ElementHandle(0)
    }

    /// Add an element on top of everything added before
    pub fn add(&mut self, element: Element) -> ElementHandle {
        self.elements.push(element);
        ElementHandle(self.elements.len() - 1)
    }

    pub fn element(&self, handle: ElementHandle) -> Option<&Element> {
        self.elements.get(handle.0)
    }

    pub fn element_mut(&mut self, handle: ElementHandle) -> Option<&mut Element> {
        self.elements.get_mut(handle.0)
    }

    pub fn elements(&self) -> impl DoubleEndedIterator<Item = (ElementHandle, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (ElementHandle(i), e))
    }

    /// Look up an element by its HTML id
    pub fn find_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.elements()
            .find(|(_, e)| e.id.as_deref() == Some(id))
            .map(|(h, _)| h)
    }

    /// The `<label for="id">` pointing at an element id
    pub fn label_for(&self, id: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.kind == ElementKind::Label && e.label_for.as_deref() == Some(id))
    }

    /// All elements containing the point, topmost first
    pub fn elements_from_point(&self, x: i64, y: i64) -> Vec<ElementHandle> {
        self.elements()
            .rev()
            .filter(|(_, e)| e.bounds.contains(x, y))
            .map(|(h, _)| h)
            .collect()
    }

    /// Focus an element. Non-focusable elements are left alone, like
    /// `HTMLElement.focus()` on an element without a tab index.
    pub fn focus(&mut self, handle: ElementHandle) -> bool {
        match self.element(handle) {
            Some(e) if e.focusable => {
                self.focused = Some(handle);
                true
            }
            _ => false,
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// The focused element, or the root when nothing has focus
    pub fn active_element(&self) -> ElementHandle {
        self.focused.unwrap_or_else(|| self.root())
    }

    /// Deliver an event to its target (recorded in the event log)
    pub fn dispatch(&mut self, event: SyntheticEvent) {
        tracing::trace!("[soundgo:desktop] dispatch {} -> #{}", event, event.target.0);
        self.events.push(event);
    }

    /// Events dispatched so far, oldest first
    pub fn events(&self) -> &[SyntheticEvent] {
        &self.events
    }

    /// Drain the event log
    pub fn take_events(&mut self) -> Vec<SyntheticEvent> {
        std::mem::take(&mut self.events)
    }
}
