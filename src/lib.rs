//! Rausku landing page navigation: a collapsible, accessible mobile menu
//! driven through a small DOM seam, plus a terminal host that renders it.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::controller::{NavError, NavigationController};
pub use crate::core::dom::{Document, Element};
pub use crate::core::page::{ElementId, Page};
