//! # Page Host
//!
//! Plays the browser for the landing page: owns the [`Document`], turns
//! terminal input into page events for the [`NavigationController`], and
//! runs the default actions the controller doesn't suppress (native tab
//! order, anchor jumps, following links).
//!
//! Kept free of terminal I/O so it can be driven directly in tests.
//!
//! ```text
//! TuiEvent ─▶ Host::handle_event ─▶ NavEvent ─▶ controller
//!                    │                              │
//!                    └──── default action ◀─ Continue
//! ```

use std::time::Instant;

use log::{debug, info, warn};

use crate::core::action::{Key, NavEvent, Propagation};
use crate::core::clock::Clock;
use crate::core::config::ResolvedConfig;
use crate::core::controller::{MENU_CLASS, NavigationController, OPEN_CLASS, TOGGLE_CLASS};
use crate::core::dom::Document;
use crate::core::gesture::Point;
use crate::core::page::{ElementId, Page};
use crate::tui::TuiState;
use crate::tui::event::TuiEvent;
use crate::tui::markup::{NAVBAR_ROWS, landing_document};

const SCROLL_STEP_ROWS: i64 = 3;

/// Where the left button went down; the release decides click vs swipe.
#[derive(Debug, Clone, Copy)]
pub struct Press {
    column: u16,
    row: u16,
    target: ElementId,
}

pub struct Host {
    pub doc: Document,
    pub nav: Option<NavigationController>,
    pub tui: TuiState,
}

impl Host {
    /// Build the landing page for a terminal `columns` wide and wire the
    /// navigation into it.
    pub fn new(config: &ResolvedConfig, columns: u16, clock: Box<dyn Clock>) -> Self {
        let doc = landing_document(columns as u32 * config.px_per_column, config.px_per_row);
        Self::with_document(doc, config, clock)
    }

    pub fn with_document(mut doc: Document, config: &ResolvedConfig, clock: Box<dyn Clock>) -> Self {
        let nav = match NavigationController::init(&mut doc, config.nav.clone(), clock) {
            Ok(nav) => Some(nav),
            Err(e) => {
                warn!("Running without navigation: {e}");
                None
            }
        };
        Self {
            doc,
            nav,
            tui: TuiState::new(config),
        }
    }

    /// Apply one input event. Returns `true` when the user asked to quit.
    pub fn handle_event(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::Quit => return true,
            TuiEvent::Tab | TuiEvent::BackTab => {
                let shift = matches!(event, TuiEvent::BackTab);
                let key = NavEvent::KeyDown {
                    key: Key::Tab,
                    shift,
                };
                if self.dispatch(&key) == Propagation::Continue {
                    self.native_tab(shift);
                }
            }
            TuiEvent::Escape => {
                self.dispatch(&NavEvent::KeyDown {
                    key: Key::Escape,
                    shift: false,
                });
            }
            TuiEvent::Activate => {
                let target = self.doc.active_element().unwrap_or(self.doc.body());
                self.click(target);
            }
            TuiEvent::ScrollUp => self.scroll_by(-SCROLL_STEP_ROWS),
            TuiEvent::ScrollDown => self.scroll_by(SCROLL_STEP_ROWS),
            TuiEvent::PointerDown(column, row) => {
                let target = self.target_at(column, row);
                if self.doc.is_focusable(target) {
                    self.doc.focus(target);
                }
                self.tui.press = Some(Press {
                    column,
                    row,
                    target,
                });
                let at = self.point(column, row);
                self.dispatch(&NavEvent::TouchStart { target, at });
            }
            TuiEvent::PointerUp(column, row) => {
                if let Some(press) = self.tui.press.take() {
                    // Touch events stay targeted at where the touch began.
                    let at = self.point(column, row);
                    self.dispatch(&NavEvent::TouchEnd {
                        target: press.target,
                        at,
                    });
                    if (press.column, press.row) == (column, row) {
                        let target = self.target_at(column, row);
                        self.click(target);
                    }
                }
            }
            TuiEvent::Resize(columns, _rows) => {
                let width = columns as u32 * self.tui.px_per_column;
                debug!("Viewport resized to {width}px");
                self.doc.set_viewport_width(width);
                self.dispatch(&NavEvent::Resize);
            }
        }
        false
    }

    pub fn tick(&mut self) {
        if let Some(nav) = self.nav.as_mut() {
            nav.tick(&mut self.doc);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.nav.as_ref().and_then(NavigationController::next_deadline)
    }

    /// Tear the navigation down and hand back the page it leaves behind.
    pub fn shutdown(self) -> Document {
        let Host { mut doc, nav, .. } = self;
        if let Some(nav) = nav {
            nav.teardown(&mut doc);
        }
        doc
    }

    fn dispatch(&mut self, event: &NavEvent) -> Propagation {
        match self.nav.as_mut() {
            Some(nav) => nav.handle(&mut self.doc, event),
            None => Propagation::Continue,
        }
    }

    fn click(&mut self, target: ElementId) {
        self.tui.notice = None;
        if self.dispatch(&NavEvent::Click { target }) == Propagation::Continue {
            self.default_action(target);
        }
        self.clamp_scroll();
    }

    /// Follow the link the target sits in, if any.
    fn default_action(&mut self, target: ElementId) {
        let Some(anchor) = std::iter::successors(Some(target), |&el| self.doc.parent(el))
            .find(|&el| self.doc.tag(el) == "a")
        else {
            return;
        };
        let Some(href) = self.doc.attribute(anchor, "href") else {
            return;
        };

        match href.strip_prefix('#') {
            Some("") => self.jump_to(0),
            Some(fragment) => match self.doc.element_by_id(fragment) {
                Some(el) => {
                    let navbar_px = NAVBAR_ROWS * self.tui.px_per_row;
                    self.jump_to(self.doc.offset_top(el).saturating_sub(navbar_px));
                }
                None => debug!("No element with id {fragment}"),
            },
            None => {
                info!("Following external link {href}");
                self.tui.notice = Some(format!("External link: {href}"));
            }
        }
    }

    fn jump_to(&mut self, y: u32) {
        self.doc.scroll_to(y);
        self.dispatch(&NavEvent::Scroll);
    }

    fn native_tab(&mut self, backwards: bool) {
        let order = self.tab_order();
        if order.is_empty() {
            return;
        }
        let len = order.len();
        let current = self
            .doc
            .active_element()
            .and_then(|active| order.iter().position(|&el| el == active));
        let next = match (current, backwards) {
            (Some(i), false) => (i + 1) % len,
            (Some(i), true) => (i + len - 1) % len,
            (None, false) => 0,
            (None, true) => len - 1,
        };
        self.doc.focus(order[next]);
    }

    /// Focusable elements that are actually on screen.
    ///
    /// On narrow viewports the menu's links are hidden until it opens; on
    /// wide ones the toggle is hidden.
    fn tab_order(&self) -> Vec<ElementId> {
        let doc = &self.doc;
        let mobile = self.tui.is_mobile(doc);
        let toggle = doc.query_class(TOGGLE_CLASS);
        let menu = doc.query_class(MENU_CLASS);
        let menu_open = menu.is_some_and(|m| doc.has_class(m, OPEN_CLASS));

        doc.focusable_elements()
            .into_iter()
            .filter(|&el| {
                if mobile {
                    menu_open || !menu.is_some_and(|m| doc.contains(m, el))
                } else {
                    toggle != Some(el)
                }
            })
            .collect()
    }

    fn scroll_by(&mut self, rows: i64) {
        if self.doc.is_scroll_locked() {
            debug!("Scroll ignored while the menu holds the page");
            return;
        }
        let delta = rows * self.tui.px_per_row as i64;
        let y = (self.doc.scroll_y() as i64 + delta).max(0) as u32;
        self.doc.scroll_to(y);
        self.clamp_scroll();
        self.dispatch(&NavEvent::Scroll);
    }

    fn clamp_scroll(&mut self) {
        let visible_px = (NAVBAR_ROWS + self.tui.main_rows as u32) * self.tui.px_per_row;
        let max = self.doc.document_height().saturating_sub(visible_px);
        if self.doc.scroll_y() > max {
            self.doc.scroll_to(max);
            self.dispatch(&NavEvent::Scroll);
        }
    }

    fn target_at(&self, column: u16, row: u16) -> ElementId {
        self.tui
            .hits
            .element_at(column, row)
            .unwrap_or(self.doc.body())
    }

    /// Centre of a terminal cell in CSS pixels.
    fn point(&self, column: u16, row: u16) -> Point {
        let (w, h) = (self.tui.px_per_column as f32, self.tui.px_per_row as f32);
        Point::new(column as f32 * w + w / 2.0, row as f32 * h + h / 2.0)
    }
}
