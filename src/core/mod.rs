//! # Core Navigation Logic
//!
//! This module contains the navigation's behaviour.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavState (flags)     │
//!                    │  • NavEvent (input)     │
//!                    │  • Controller           │
//!                    │  • Page (DOM seam)      │
//!                    │                         │
//!                    │  No I/O. No rendering.  │
//!                    └───────────┬─────────────┘
//!                                │ Page trait
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Tests    │      │  Browser   │
//!     │  Adapter   │      │ (Document) │      │  (future)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`controller`]: `NavigationController`, the open/close state machine
//! - [`page`]: the `Page` trait every host implements
//! - [`dom`]: `Document`, an in-memory `Page`
//! - [`action`]: `NavEvent`, everything the page can report
//! - [`state`]: `NavState`
//! - [`focus`], [`gesture`], [`announce`], [`debounce`], [`clock`]: the
//!   pieces the controller is assembled from
//! - [`config`]: settings and their override chain

pub mod action;
pub mod announce;
pub mod clock;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod dom;
pub mod focus;
pub mod gesture;
pub mod page;
pub mod state;
