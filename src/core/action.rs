//! # Navigation Events
//!
//! Everything the page can tell the navigation becomes a `NavEvent`.
//! The host translates its own input (DOM events, terminal keys) into these
//! and hands them to [`NavigationController::handle`].
//!
//! ```text
//! host input  →  NavEvent  →  handle()  →  Propagation
//! ```
//!
//! The returned [`Propagation`] tells the host whether to run its default
//! action (native tab move, anchor jump) or to skip it.
//!
//! [`NavigationController::handle`]: crate::core::controller::NavigationController::handle

use crate::core::gesture::Point;
use crate::core::page::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// A click that reached the document. Covers the toggle, nav links and
    /// outside-click detection.
    Click { target: ElementId },
    KeyDown { key: Key, shift: bool },
    TouchStart { target: ElementId, at: Point },
    TouchEnd { target: ElementId, at: Point },
    /// The viewport changed size. Reclassification is debounced.
    Resize,
    /// The page scroll position changed.
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Let the host run its default action.
    Continue,
    /// The controller handled it; skip the default action.
    PreventDefault,
}
