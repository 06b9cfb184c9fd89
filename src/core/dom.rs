//! # In-Memory Document
//!
//! A small element tree implementing [`Page`]. It models exactly what the
//! navigation needs: tags, text, attributes, classes, parent/child links,
//! focus, scroll position and a pixel box per element. There is no CSS
//! engine; hosts read classes and decide how to present them.
//!
//! ```text
//! Document
//! ├── slots: Vec<Slot>      // arena, ElementId indexes into it
//! ├── free: Vec<usize>      // released slots, reused first
//! ├── root (<html>)
//! │   └── body (<body>)
//! ├── active: Option<ElementId>
//! ├── scroll_y / scroll_locked
//! └── viewport_width
//! ```
//!
//! Removing an element frees its slot (and its subtree's) for the next
//! append. Each slot carries a generation that is bumped on release, so a
//! stale handle never aliases the element that reuses its slot; it simply
//! resolves to nothing.

use std::collections::BTreeMap;

use log::debug;

use crate::core::page::{ElementId, Page};

/// Description of an element to insert, built fluently.
///
/// ```rust,ignore
/// let toggle = doc.append(nav, Element::new("button").class("navbar-toggle").text("Menu"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    text: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    offset_top: u32,
    offset_height: u32,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Pixel box: distance from the top of the page and height.
    pub fn layout(mut self, offset_top: u32, offset_height: u32) -> Self {
        self.offset_top = offset_top;
        self.offset_height = offset_height;
        self
    }
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// Arena slot. `node` is `None` while the slot sits on the free list.
#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: ElementId,
    body: ElementId,
    active: Option<ElementId>,
    scroll_y: u32,
    scroll_locked: bool,
    viewport_width: u32,
}

/// Handle returned when appending under an element that no longer exists.
const DANGLING: ElementId = ElementId::new(usize::MAX, 0);

impl Document {
    pub fn new(viewport_width: u32) -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: DANGLING,
            body: DANGLING,
            active: None,
            scroll_y: 0,
            scroll_locked: false,
            viewport_width,
        };
        doc.root = doc.alloc(Element::new("html"), None);
        doc.body = doc.alloc(Element::new("body"), Some(doc.root));
        doc
    }

    /// Append a new element under `parent` and return its handle.
    ///
    /// Appending under a removed element creates nothing and returns a
    /// handle that resolves to no element.
    pub fn append(&mut self, parent: ElementId, element: Element) -> ElementId {
        if self.node(parent).is_none() {
            debug!("Append under removed element {parent:?} ignored");
            return DANGLING;
        }
        self.alloc(element, Some(parent))
    }

    fn alloc(&mut self, element: Element, parent: Option<ElementId>) -> ElementId {
        let node = Node {
            element,
            parent,
            children: Vec::new(),
        };
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                ElementId::new(index, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                ElementId::new(self.slots.len() - 1, 0)
            }
        };
        if let Some(p) = parent.and_then(|p| self.node_mut(p)) {
            p.children.push(id);
        }
        id
    }

    /// Return a slot to the free list. Bumping the generation makes every
    /// outstanding handle to it stale.
    fn release(&mut self, el: ElementId) {
        if let Some(slot) = self.slots.get_mut(el.index)
            && slot.generation == el.generation
            && slot.node.take().is_some()
        {
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(el.index);
        }
    }

    fn node(&self, el: ElementId) -> Option<&Node> {
        self.slots
            .get(el.index)
            .filter(|slot| slot.generation == el.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, el: ElementId) -> Option<&mut Node> {
        self.slots
            .get_mut(el.index)
            .filter(|slot| slot.generation == el.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn element(&self, el: ElementId) -> Option<&Element> {
        self.node(el).map(|node| &node.element)
    }

    pub fn tag(&self, el: ElementId) -> &str {
        self.element(el).map_or("", |e| e.tag.as_str())
    }

    pub fn text(&self, el: ElementId) -> &str {
        self.element(el).map_or("", |e| e.text.as_str())
    }

    pub fn children(&self, el: ElementId) -> &[ElementId] {
        self.node(el)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.node(el).and_then(|node| node.parent)
    }

    /// Whether `el` is still part of the page.
    pub fn is_attached(&self, el: ElementId) -> bool {
        self.node(el).is_some()
    }

    /// Slots in the arena, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_focusable(&self, el: ElementId) -> bool {
        let Some(element) = self.element(el) else {
            return false;
        };
        let natively = match element.tag.as_str() {
            "a" => element.attributes.contains_key("href"),
            "button" | "input" | "textarea" | "select" | "details" => true,
            _ => false,
        };
        natively
            || element
                .attributes
                .get("tabindex")
                .is_some_and(|v| v != "-1")
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Bottom edge of the lowest element, i.e. the scrollable page height.
    pub fn document_height(&self) -> u32 {
        self.descendants(self.root)
            .into_iter()
            .filter_map(|el| self.element(el))
            .map(|e| e.offset_top + e.offset_height)
            .max()
            .unwrap_or(0)
    }

    /// Live regions (`role="status"`) in the page, oldest first.
    pub fn live_regions(&self) -> Vec<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&el| self.attribute(el, "role").as_deref() == Some("status"))
            .collect()
    }

    /// Every focusable element in document order.
    pub fn focusable_elements(&self) -> Vec<ElementId> {
        self.focusable_within(self.root)
    }

    /// Pre-order walk of the subtree below `el` (excluding `el`).
    fn descendants(&self, el: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(el).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }
}

impl Page for Document {
    fn body(&self) -> ElementId {
        self.body
    }

    fn query_class(&self, class: &str) -> Option<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&el| self.has_class(el, class))
    }

    fn query_all_class(&self, class: &str) -> Vec<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&el| self.has_class(el, class))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&el| self.attribute(el, "id").as_deref() == Some(id))
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        self.element(el)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(el) {
            node.element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.element(el)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(node) = self.node_mut(el) {
            let classes = &mut node.element.classes;
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(node) = self.node_mut(el) {
            node.element.classes.retain(|c| c != class);
        }
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        if !self.is_attached(node) {
            return false;
        }
        let mut current = Some(node);
        while let Some(el) = current {
            if el == ancestor {
                return true;
            }
            current = self.parent(el);
        }
        false
    }

    fn focusable_within(&self, container: ElementId) -> Vec<ElementId> {
        self.descendants(container)
            .into_iter()
            .filter(|&el| self.is_focusable(el))
            .collect()
    }

    fn focus(&mut self, el: ElementId) {
        if self.is_attached(el) {
            self.active = Some(el);
        }
    }

    fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    fn append_element(&mut self, parent: ElementId, tag: &str, text: &str) -> ElementId {
        self.append(parent, Element::new(tag).text(text))
    }

    /// Remove `el` and its subtree, freeing their slots for reuse.
    fn remove_element(&mut self, el: ElementId) {
        if el == self.root || el == self.body {
            return;
        }
        let Some(parent) = self.parent(el) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|&c| c != el);
        }
        let mut stack = vec![el];
        while let Some(next) = stack.pop() {
            stack.extend_from_slice(self.children(next));
            self.release(next);
        }
        // Focus falls back to nothing when its element leaves the page.
        if self.active.is_some_and(|a| !self.is_attached(a)) {
            self.active = None;
        }
    }

    fn offset_top(&self, el: ElementId) -> u32 {
        self.element(el).map_or(0, |e| e.offset_top)
    }

    fn offset_height(&self, el: ElementId) -> u32 {
        self.element(el).map_or(0, |e| e.offset_height)
    }

    fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: u32) {
        self.scroll_y = y;
    }
}
