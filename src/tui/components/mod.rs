//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component is a transient wrapper created each frame with borrowed
//! props: the [`Document`] to read from and the [`HitMap`] to register
//! clickable regions into. None of them mutate the document. What they
//! draw is derived from it (classes, attributes, focus, scroll position),
//! which is how the stylesheet would treat a real page.
//!
//! - `Navbar`: brand, inline links on wide viewports, toggle on narrow ones
//! - `Landing`: the page sections, offset by the scroll position
//! - `MenuPanel`: the slide-in menu, drawn only while it carries `is-open`
//! - `StatusBar`: live-region text (the terminal's screen reader) and hints
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── navbar.rs
//! ├── landing.rs
//! ├── menu_panel.rs
//! └── status_bar.rs
//! ```
//!
//! [`Document`]: crate::core::dom::Document
//! [`HitMap`]: crate::tui::hit::HitMap

use ratatui::style::{Modifier, Style};

use crate::core::dom::Document;
use crate::core::page::{ElementId, Page};

pub mod landing;
pub mod menu_panel;
pub mod navbar;
pub mod status_bar;

pub use landing::Landing;
pub use menu_panel::MenuPanel;
pub use navbar::Navbar;
pub use status_bar::StatusBar;

/// `base`, reversed when `el` holds focus.
fn focus_style(doc: &Document, el: ElementId, base: Style) -> Style {
    if doc.active_element() == Some(el) {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}
