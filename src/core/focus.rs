//! Focus trap for the open menu.

use crate::core::page::ElementId;

/// Ordered focusable elements of the menu, captured when it opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusSet {
    elements: Vec<ElementId>,
}

impl FocusSet {
    pub fn new(elements: Vec<ElementId>) -> Self {
        Self { elements }
    }

    pub fn first(&self) -> Option<ElementId> {
        self.elements.first().copied()
    }

    pub fn last(&self) -> Option<ElementId> {
        self.elements.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Where Tab (or Shift+Tab when `backwards`) must wrap to, if anywhere.
    ///
    /// Only the edges wrap: Tab on the last element goes to the first and
    /// Shift+Tab on the first goes to the last. Everything else returns
    /// `None` and keeps native order.
    pub fn wrap_target(&self, active: Option<ElementId>, backwards: bool) -> Option<ElementId> {
        let (first, last) = (self.first()?, self.last()?);
        let active = active?;
        if backwards && active == first {
            Some(last)
        } else if !backwards && active == last {
            Some(first)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> FocusSet {
        FocusSet::new(vec![ElementId::new(3, 0), ElementId::new(5, 0), ElementId::new(7, 0)])
    }

    #[test]
    fn test_tab_on_last_wraps_to_first() {
        assert_eq!(set().wrap_target(Some(ElementId::new(7, 0)), false), Some(ElementId::new(3, 0)));
    }

    #[test]
    fn test_shift_tab_on_first_wraps_to_last() {
        assert_eq!(set().wrap_target(Some(ElementId::new(3, 0)), true), Some(ElementId::new(7, 0)));
    }

    #[test]
    fn test_middle_elements_keep_native_order() {
        assert_eq!(set().wrap_target(Some(ElementId::new(5, 0)), false), None);
        assert_eq!(set().wrap_target(Some(ElementId::new(5, 0)), true), None);
        assert_eq!(set().wrap_target(Some(ElementId::new(3, 0)), false), None);
        assert_eq!(set().wrap_target(None, false), None);
    }

    #[test]
    fn test_empty_set_is_noop() {
        let empty = FocusSet::default();
        assert!(empty.is_empty());
        assert_eq!(empty.wrap_target(Some(ElementId::new(1, 0)), false), None);
    }

    #[test]
    fn test_single_element_wraps_onto_itself() {
        let single = FocusSet::new(vec![ElementId::new(4, 0)]);
        assert_eq!(single.wrap_target(Some(ElementId::new(4, 0)), false), Some(ElementId::new(4, 0)));
        assert_eq!(single.wrap_target(Some(ElementId::new(4, 0)), true), Some(ElementId::new(4, 0)));
    }
}
