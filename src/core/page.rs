//! # Page Seam
//!
//! The handful of DOM operations the navigation controller needs, expressed
//! as a trait so any host can back it. The crate ships one implementation,
//! [`Document`](crate::core::dom::Document), an in-memory element tree used
//! by the terminal host and the tests.
//!
//! All geometry is in CSS pixels. Hosts that don't think in pixels (a
//! terminal) convert at the boundary.

/// Opaque handle to an element owned by a [`Page`].
///
/// The generation tells a reused slot apart from the element that used to
/// live there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl ElementId {
    pub(crate) const fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }
}

pub trait Page {
    /// The `<body>` element. Live regions are appended here.
    fn body(&self) -> ElementId;

    /// First attached element carrying `class`, in document order.
    fn query_class(&self, class: &str) -> Option<ElementId>;

    /// All attached elements carrying `class`, in document order.
    fn query_all_class(&self, class: &str) -> Vec<ElementId>;

    /// Attached element whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str);

    fn has_class(&self, el: ElementId, class: &str) -> bool;
    fn add_class(&mut self, el: ElementId, class: &str);
    fn remove_class(&mut self, el: ElementId, class: &str);

    /// True when `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool;

    /// Focusable descendants of `container`, in document order.
    fn focusable_within(&self, container: ElementId) -> Vec<ElementId>;

    fn focus(&mut self, el: ElementId);
    fn active_element(&self) -> Option<ElementId>;

    /// Lock or unlock scrolling of the page behind an overlay.
    fn set_scroll_locked(&mut self, locked: bool);

    fn viewport_width(&self) -> u32;

    /// Create an element and append it as the last child of `parent`.
    fn append_element(&mut self, parent: ElementId, tag: &str, text: &str) -> ElementId;

    /// Detach an element (and its subtree) from the page.
    fn remove_element(&mut self, el: ElementId);

    fn offset_top(&self, el: ElementId) -> u32;
    fn offset_height(&self, el: ElementId) -> u32;

    fn scroll_y(&self) -> u32;
    fn scroll_to(&mut self, y: u32);
}
