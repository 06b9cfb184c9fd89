//! Screen regions → elements, rebuilt every frame.
//!
//! Components register the cells they draw an element into. Later
//! registrations sit on top, so overlays drawn last win the hit test.

use ratatui::layout::{Position, Rect};

use crate::core::page::ElementId;

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, ElementId)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, area: Rect, el: ElementId) {
        if !area.is_empty() {
            self.regions.push((area, el));
        }
    }

    /// Topmost element drawn at the cell, if any.
    pub fn element_at(&self, column: u16, row: u16) -> Option<ElementId> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|&(_, el)| el)
    }
}
