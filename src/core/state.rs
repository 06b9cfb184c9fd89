//! # Navigation State
//!
//! ```text
//! NavState
//! ├── is_open: bool      // mobile menu expanded
//! ├── is_mobile: bool    // viewport narrower than breakpoint
//! └── breakpoint: u32    // px, fixed at construction
//! ```
//!
//! `is_open` implies `is_mobile`. The controller keeps that true by
//! refusing to open on wide viewports and forcing a close when the
//! viewport widens.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    is_open: bool,
    is_mobile: bool,
    breakpoint: u32,
}

impl NavState {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            is_open: false,
            is_mobile: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Reclassify for a viewport width. Returns the new `is_mobile`.
    pub(crate) fn classify(&mut self, viewport_width: u32) -> bool {
        self.is_mobile = viewport_width < self.breakpoint;
        self.is_mobile
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }
}
