//! Swipe-to-close gesture.
//!
//! Measures the displacement between touch-start and touch-end. Only a
//! mostly horizontal swipe to the right counts.

/// Touch coordinates in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Rightward travel must exceed this.
    pub min_dx: f32,
    /// Vertical drift must stay under this (either direction).
    pub max_dy: f32,
}

impl SwipeThresholds {
    pub fn is_close_swipe(&self, dx: f32, dy: f32) -> bool {
        dx > self.min_dx && dy.abs() < self.max_dy
    }
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    thresholds: SwipeThresholds,
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            start: None,
        }
    }

    pub fn start(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Finish the gesture. True when it qualifies as a close swipe.
    pub fn end(&mut self, at: Point) -> bool {
        match self.start.take() {
            Some(start) => self.thresholds.is_close_swipe(at.x - start.x, at.y - start.y),
            None => false,
        }
    }
}
