//! # Navigation Controller
//!
//! Owns the mobile menu's open/closed state and keeps the page in step
//! with it.
//!
//! ```text
//!            toggle (mobile only)
//!   Closed ─────────────────────────▶ Open
//!     ▲                                │
//!     │  toggle · Escape · outside     │
//!     │  click · nav link · swipe ·    │
//!     └──────── viewport widened ◀─────┘
//! ```
//!
//! Every path into `Closed` goes through [`NavigationController::close`],
//! which is guarded by the state flag, so two close triggers in the same
//! tick produce one focus move and one announcement. `aria-expanded` and
//! the `is-open` class are always written from the flag, never read back.
//!
//! The controller does not own the page. Each call borrows it, which lets
//! the host keep using the page for rendering between events.

use std::fmt;
use std::time::Instant;

use log::{debug, info, warn};

use crate::core::action::{Key, NavEvent, Propagation};
use crate::core::announce::Announcer;
use crate::core::clock::Clock;
use crate::core::config::NavSettings;
use crate::core::debounce::Debouncer;
use crate::core::focus::FocusSet;
use crate::core::gesture::SwipeTracker;
use crate::core::page::{ElementId, Page};
use crate::core::state::NavState;

pub const NAVBAR_CLASS: &str = "navbar";
pub const TOGGLE_CLASS: &str = "navbar-toggle";
pub const MENU_CLASS: &str = "navbar-menu";
pub const LINK_CLASS: &str = "nav-link";
pub const MENU_ID: &str = "navbar-menu";
pub const OPEN_CLASS: &str = "is-open";
pub const SCROLLED_CLASS: &str = "scrolled";

pub const OPENED_MESSAGE: &str = "Navigation menu opened";
pub const CLOSED_MESSAGE: &str = "Navigation menu closed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A required element is not in the page. Holds its class selector.
    MissingElement(&'static str),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::MissingElement(class) => {
                write!(f, "navigation element not found: .{class}")
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Element handles resolved once at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavElements {
    pub navbar: Option<ElementId>,
    pub toggle: ElementId,
    pub menu: ElementId,
    pub links: Vec<ElementId>,
}

impl NavElements {
    pub fn query<P: Page>(page: &P) -> Result<Self, NavError> {
        let toggle = page
            .query_class(TOGGLE_CLASS)
            .ok_or(NavError::MissingElement(TOGGLE_CLASS))?;
        let menu = page
            .query_class(MENU_CLASS)
            .ok_or(NavError::MissingElement(MENU_CLASS))?;
        Ok(Self {
            navbar: page.query_class(NAVBAR_CLASS),
            toggle,
            menu,
            links: page.query_all_class(LINK_CLASS),
        })
    }
}

pub struct NavigationController {
    state: NavState,
    elements: NavElements,
    settings: NavSettings,
    clock: Box<dyn Clock>,
    focus_set: FocusSet,
    swipe: SwipeTracker,
    resize: Debouncer,
    announcer: Announcer,
}

impl NavigationController {
    /// Wire the navigation into `page`.
    ///
    /// Fails without touching the page when the toggle or the menu is
    /// missing; the rest of the page keeps working without it.
    pub fn init<P: Page>(
        page: &mut P,
        settings: NavSettings,
        clock: Box<dyn Clock>,
    ) -> Result<Self, NavError> {
        let elements = NavElements::query(page).inspect_err(|e| warn!("{e}"))?;

        page.set_attribute(elements.toggle, "aria-controls", MENU_ID);
        page.set_attribute(elements.toggle, "aria-expanded", "false");
        page.set_attribute(elements.menu, "id", MENU_ID);

        let mut controller = Self {
            state: NavState::new(settings.breakpoint),
            elements,
            focus_set: FocusSet::default(),
            swipe: SwipeTracker::new(settings.swipe),
            resize: Debouncer::new(settings.resize_debounce),
            announcer: Announcer::new(settings.announce_delay),
            settings,
            clock,
        };
        controller.check_mobile(page);
        controller.update_scrolled(page);

        info!(
            "Navigation ready ({} links, breakpoint {}px, mobile: {})",
            controller.elements.links.len(),
            controller.state.breakpoint(),
            controller.state.is_mobile()
        );
        Ok(controller)
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn elements(&self) -> &NavElements {
        &self.elements
    }

    pub fn open<P: Page>(&mut self, page: &mut P) {
        if !self.state.is_mobile() {
            debug!("Ignoring open: viewport is not mobile");
            return;
        }
        if self.state.is_open() {
            return;
        }

        self.state.set_open(true);
        self.sync_visuals(page);
        page.set_scroll_locked(true);

        self.focus_set = FocusSet::new(page.focusable_within(self.elements.menu));
        match self.focus_set.first() {
            Some(first) => page.focus(first),
            None => debug!("Menu has no focusable elements"),
        }

        let now = self.clock.now();
        self.announcer.announce(page, OPENED_MESSAGE, now);
        debug!("Menu opened");
    }

    pub fn close<P: Page>(&mut self, page: &mut P) {
        if !self.state.is_open() {
            return;
        }

        self.state.set_open(false);
        self.sync_visuals(page);
        page.set_scroll_locked(false);
        page.focus(self.elements.toggle);

        let now = self.clock.now();
        self.announcer.announce(page, CLOSED_MESSAGE, now);
        debug!("Menu closed");
    }

    pub fn toggle<P: Page>(&mut self, page: &mut P) {
        if self.state.is_open() {
            self.close(page);
        } else {
            self.open(page);
        }
    }

    /// Route a page event through the navigation.
    pub fn handle<P: Page>(&mut self, page: &mut P, event: &NavEvent) -> Propagation {
        match *event {
            NavEvent::Click { target } => self.on_click(page, target),
            NavEvent::KeyDown { key, shift } => self.on_key(page, key, shift),
            NavEvent::TouchStart { target, at } => {
                if page.contains(self.elements.menu, target) {
                    self.swipe.start(at);
                }
                Propagation::Continue
            }
            NavEvent::TouchEnd { target, at } => {
                if page.contains(self.elements.menu, target) {
                    let is_swipe = self.swipe.end(at);
                    if is_swipe && self.state.is_open() {
                        debug!("Swipe gesture closes menu");
                        self.close(page);
                    }
                }
                Propagation::Continue
            }
            NavEvent::Resize => {
                self.resize.trigger(self.clock.now());
                Propagation::Continue
            }
            NavEvent::Scroll => {
                self.update_scrolled(page);
                Propagation::Continue
            }
        }
    }

    /// Run whatever timers are due: the debounced resize check and the
    /// removal of expired announcements.
    pub fn tick<P: Page>(&mut self, page: &mut P) {
        let now = self.clock.now();
        if self.resize.poll(now) {
            self.check_mobile(page);
        }
        self.announcer.sweep(page, now);
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.resize.deadline(), self.announcer.next_expiry()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel pending timers and remove outstanding announcements.
    pub fn teardown<P: Page>(mut self, page: &mut P) {
        if self.resize.is_pending() {
            debug!("Dropping pending resize check");
            self.resize.cancel();
        }
        self.announcer.flush(page);
        info!("Navigation torn down");
    }

    fn on_click<P: Page>(&mut self, page: &mut P, target: ElementId) -> Propagation {
        let NavElements { toggle, menu, .. } = self.elements;

        // The toggle's own handler; the document-level check below ignores it.
        if page.contains(toggle, target) {
            self.toggle(page);
            return Propagation::Continue;
        }

        let mut propagation = Propagation::Continue;
        if let Some(link) = self
            .elements
            .links
            .iter()
            .copied()
            .find(|&link| page.contains(link, target))
        {
            propagation = self.activate_link(page, link);
        }

        if self.state.is_open() && !page.contains(menu, target) {
            debug!("Outside click closes menu");
            self.close(page);
        }
        propagation
    }

    fn activate_link<P: Page>(&mut self, page: &mut P, link: ElementId) -> Propagation {
        self.close(page);

        let Some(href) = page.attribute(link, "href") else {
            return Propagation::Continue;
        };
        let Some(fragment) = href.strip_prefix('#').filter(|f| !f.is_empty()) else {
            return Propagation::Continue;
        };
        let Some(target) = page.element_by_id(fragment) else {
            debug!("Anchor target #{fragment} not found");
            return Propagation::Continue;
        };

        let navbar_height = self
            .elements
            .navbar
            .map(|navbar| page.offset_height(navbar))
            .unwrap_or(0);
        let y = page
            .offset_top(target)
            .saturating_sub(navbar_height + self.settings.anchor_margin);
        debug!("Scrolling to #{fragment} at {y}px");
        page.scroll_to(y);
        self.update_scrolled(page);
        Propagation::PreventDefault
    }

    fn on_key<P: Page>(&mut self, page: &mut P, key: Key, shift: bool) -> Propagation {
        if !self.state.is_open() {
            return Propagation::Continue;
        }
        match key {
            Key::Escape => {
                self.close(page);
                Propagation::PreventDefault
            }
            Key::Tab if self.focus_set.is_empty() => Propagation::Continue,
            Key::Tab => match self.focus_set.wrap_target(page.active_element(), shift) {
                Some(target) => {
                    page.focus(target);
                    Propagation::PreventDefault
                }
                None => Propagation::Continue,
            },
            Key::Other => Propagation::Continue,
        }
    }

    fn check_mobile<P: Page>(&mut self, page: &mut P) {
        let width = page.viewport_width();
        let is_mobile = self.state.classify(width);
        debug!("Viewport {width}px classified mobile: {is_mobile}");
        if !is_mobile && self.state.is_open() {
            self.close(page);
        }
    }

    fn update_scrolled<P: Page>(&self, page: &mut P) {
        let Some(navbar) = self.elements.navbar else {
            return;
        };
        if page.scroll_y() > self.settings.scrolled_threshold {
            page.add_class(navbar, SCROLLED_CLASS);
        } else {
            page.remove_class(navbar, SCROLLED_CLASS);
        }
    }

    fn sync_visuals<P: Page>(&self, page: &mut P) {
        let open = self.state.is_open();
        page.set_attribute(
            self.elements.toggle,
            "aria-expanded",
            if open { "true" } else { "false" },
        );
        if open {
            page.add_class(self.elements.menu, OPEN_CLASS);
        } else {
            page.remove_class(self.elements.menu, OPEN_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::dom::{Document, Element};
    use crate::core::gesture::Point;
    use crate::test_support::{CountingPage, Fixture, landing_fixture};
    use std::time::Duration;

    const MOBILE: u32 = 375;
    const DESKTOP: u32 = 1280;

    fn mount(width: u32) -> (Fixture, NavigationController, ManualClock) {
        let mut fx = landing_fixture(width);
        let clock = ManualClock::new();
        let nav = NavigationController::init(
            &mut fx.page,
            NavSettings::default(),
            Box::new(clock.clone()),
        )
        .unwrap();
        (fx, nav, clock)
    }

    fn expanded(fx: &Fixture) -> Option<String> {
        fx.page.attribute(fx.toggle, "aria-expanded")
    }

    #[test]
    fn test_init_wires_aria() {
        let (fx, nav, _) = mount(MOBILE);
        assert_eq!(fx.page.attribute(fx.toggle, "aria-controls").as_deref(), Some(MENU_ID));
        assert_eq!(expanded(&fx).as_deref(), Some("false"));
        assert_eq!(fx.page.attribute(fx.menu, "id").as_deref(), Some(MENU_ID));
        assert!(nav.state().is_mobile());
        assert!(!nav.is_open());
        assert_eq!(nav.elements().links, fx.links);
    }

    #[test]
    fn test_init_without_menu_fails_cleanly() {
        let mut doc = Document::new(MOBILE);
        let body = doc.body();
        let toggle = doc.append(body, Element::new("button").class(TOGGLE_CLASS));
        let mut page = CountingPage::new(doc);

        let result =
            NavigationController::init(&mut page, NavSettings::default(), Box::new(ManualClock::new()));
        assert_eq!(result.err(), Some(NavError::MissingElement(MENU_CLASS)));
        assert_eq!(page.attribute(toggle, "aria-expanded"), None);
    }

    #[test]
    fn test_init_without_toggle_fails() {
        let mut doc = Document::new(MOBILE);
        let body = doc.body();
        doc.append(body, Element::new("ul").class(MENU_CLASS));
        let result =
            NavigationController::init(&mut doc, NavSettings::default(), Box::new(ManualClock::new()));
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "navigation element not found: .navbar-toggle");
    }

    #[test]
    fn test_toggle_parity() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        for n in 1..=7 {
            nav.toggle(&mut fx.page);
            assert_eq!(nav.is_open(), n % 2 == 1, "after {n} toggles");
            assert_eq!(fx.page.has_class(fx.menu, OPEN_CLASS), nav.is_open());
        }
    }

    #[test]
    fn test_open_on_desktop_is_noop() {
        let (mut fx, mut nav, _) = mount(DESKTOP);
        nav.open(&mut fx.page);
        nav.toggle(&mut fx.page);
        assert!(!nav.is_open());
        assert_eq!(fx.page.focus_calls, 0);
        assert!(fx.page.announcements().is_empty());
        assert_eq!(expanded(&fx).as_deref(), Some("false"));
    }

    #[test]
    fn test_open_side_effects() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        nav.open(&mut fx.page);

        assert_eq!(expanded(&fx).as_deref(), Some("true"));
        assert!(fx.page.has_class(fx.menu, OPEN_CLASS));
        assert!(fx.page.doc.is_scroll_locked());
        assert_eq!(fx.page.active_element(), Some(fx.links[0]));
        assert_eq!(fx.page.focus_calls, 1);
        assert_eq!(fx.page.announcements(), vec![OPENED_MESSAGE.to_string()]);

        // Opening again changes nothing
        nav.open(&mut fx.page);
        assert_eq!(fx.page.focus_calls, 1);
        assert_eq!(fx.page.appended, 1);
    }

    #[test]
    fn test_close_side_effects_and_idempotence() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        nav.open(&mut fx.page);
        nav.close(&mut fx.page);

        assert_eq!(expanded(&fx).as_deref(), Some("false"));
        assert!(!fx.page.has_class(fx.menu, OPEN_CLASS));
        assert!(!fx.page.doc.is_scroll_locked());
        assert_eq!(fx.page.active_element(), Some(fx.toggle));

        nav.close(&mut fx.page);
        assert!(!nav.is_open());
        assert_eq!(fx.page.focus_calls, 2);
        assert_eq!(
            fx.page.announcements(),
            vec![OPENED_MESSAGE.to_string(), CLOSED_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_close_when_never_opened_has_no_side_effects() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        nav.close(&mut fx.page);
        assert_eq!(fx.page.focus_calls, 0);
        assert_eq!(fx.page.appended, 0);
    }

    #[test]
    fn test_announcements_expire() {
        let (mut fx, mut nav, clock) = mount(MOBILE);
        nav.open(&mut fx.page);
        assert!(nav.next_deadline().is_some());

        clock.advance(Duration::from_millis(999));
        nav.tick(&mut fx.page);
        assert_eq!(fx.page.announcements().len(), 1);

        clock.advance(Duration::from_millis(1));
        nav.tick(&mut fx.page);
        assert!(fx.page.announcements().is_empty());
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn test_repeated_toggling_reuses_announcement_slots() {
        let (mut fx, mut nav, clock) = mount(MOBILE);
        let before = fx.page.doc.capacity();

        for _ in 0..1_000 {
            nav.toggle(&mut fx.page);
            clock.advance(Duration::from_secs(2));
            nav.tick(&mut fx.page);
        }

        assert!(fx.page.announcements().is_empty());
        assert!(fx.page.doc.capacity() <= before + 1);
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        let escape = NavEvent::KeyDown {
            key: Key::Escape,
            shift: false,
        };
        assert_eq!(nav.handle(&mut fx.page, &escape), Propagation::Continue);

        nav.open(&mut fx.page);
        assert_eq!(nav.handle(&mut fx.page, &escape), Propagation::PreventDefault);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_focus_trap_wraps_at_edges() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        nav.open(&mut fx.page);
        let tab = NavEvent::KeyDown {
            key: Key::Tab,
            shift: false,
        };
        let shift_tab = NavEvent::KeyDown {
            key: Key::Tab,
            shift: true,
        };

        // First element: Tab is native, Shift+Tab wraps to last
        assert_eq!(nav.handle(&mut fx.page, &tab), Propagation::Continue);
        assert_eq!(nav.handle(&mut fx.page, &shift_tab), Propagation::PreventDefault);
        assert_eq!(fx.page.active_element(), Some(fx.links[2]));

        // Last element: Tab wraps to first
        assert_eq!(nav.handle(&mut fx.page, &tab), Propagation::PreventDefault);
        assert_eq!(fx.page.active_element(), Some(fx.links[0]));

        // Middle element keeps native order in both directions
        fx.page.focus(fx.links[1]);
        assert_eq!(nav.handle(&mut fx.page, &tab), Propagation::Continue);
        assert_eq!(nav.handle(&mut fx.page, &shift_tab), Propagation::Continue);
    }

    #[test]
    fn test_focus_trap_inactive_when_closed() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        fx.page.focus(fx.links[2]);
        let tab = NavEvent::KeyDown {
            key: Key::Tab,
            shift: false,
        };
        assert_eq!(nav.handle(&mut fx.page, &tab), Propagation::Continue);
        assert_eq!(fx.page.active_element(), Some(fx.links[2]));
    }

    #[test]
    fn test_empty_menu_opens_without_focus_move() {
        let mut doc = Document::new(MOBILE);
        let body = doc.body();
        let toggle = doc.append(body, Element::new("button").class(TOGGLE_CLASS));
        doc.append(body, Element::new("ul").class(MENU_CLASS));
        let mut page = CountingPage::new(doc);
        let mut nav =
            NavigationController::init(&mut page, NavSettings::default(), Box::new(ManualClock::new()))
                .unwrap();

        nav.open(&mut page);
        assert!(nav.is_open());
        assert_eq!(page.focus_calls, 0);
        assert!(nav.focus_set.is_empty());

        page.focus(toggle);
        let tab = NavEvent::KeyDown {
            key: Key::Tab,
            shift: false,
        };
        assert_eq!(nav.handle(&mut page, &tab), Propagation::Continue);
    }

    #[test]
    fn test_outside_click_closes_inside_click_does_not() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        nav.open(&mut fx.page);

        let inside = fx.page.doc.parent(fx.links[0]).unwrap();
        nav.handle(&mut fx.page, &NavEvent::Click { target: inside });
        assert!(nav.is_open());

        nav.handle(&mut fx.page, &NavEvent::Click { target: fx.hero });
        assert!(!nav.is_open());
    }

    #[test]
    fn test_toggle_click_toggles() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        let click = NavEvent::Click { target: fx.toggle };
        nav.handle(&mut fx.page, &click);
        assert!(nav.is_open());
        nav.handle(&mut fx.page, &click);
        assert!(!nav.is_open());
        assert_eq!(fx.page.announcements().len(), 2);
    }

    #[test]
    fn test_swipe_thresholds() {
        let cases = [((60.0, 10.0), true), ((60.0, 150.0), false), ((40.0, 10.0), false)];
        for ((dx, dy), closes) in cases {
            let (mut fx, mut nav, _) = mount(MOBILE);
            nav.open(&mut fx.page);
            let target = fx.links[0];
            nav.handle(
                &mut fx.page,
                &NavEvent::TouchStart {
                    target,
                    at: Point::new(100.0, 100.0),
                },
            );
            nav.handle(
                &mut fx.page,
                &NavEvent::TouchEnd {
                    target,
                    at: Point::new(100.0 + dx, 100.0 + dy),
                },
            );
            assert_eq!(!nav.is_open(), closes, "dx={dx} dy={dy}");
        }
    }

    #[test]
    fn test_touch_outside_menu_is_ignored() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        nav.open(&mut fx.page);
        let target = fx.hero;
        nav.handle(&mut fx.page, &NavEvent::TouchStart { target, at: Point::new(0.0, 0.0) });
        nav.handle(&mut fx.page, &NavEvent::TouchEnd { target, at: Point::new(90.0, 0.0) });
        assert!(nav.is_open());
    }

    #[test]
    fn test_swipe_and_outside_click_in_same_tick_announce_once() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        nav.open(&mut fx.page);
        let target = fx.links[0];
        nav.handle(&mut fx.page, &NavEvent::TouchStart { target, at: Point::new(0.0, 0.0) });
        nav.handle(&mut fx.page, &NavEvent::TouchEnd { target, at: Point::new(80.0, 0.0) });
        nav.handle(&mut fx.page, &NavEvent::Click { target: fx.hero });

        assert!(!nav.is_open());
        assert_eq!(
            fx.page.announcements(),
            vec![OPENED_MESSAGE.to_string(), CLOSED_MESSAGE.to_string()]
        );
        assert_eq!(fx.page.focus_calls, 2);
    }

    #[test]
    fn test_resize_to_desktop_closes_after_debounce() {
        let (mut fx, mut nav, clock) = mount(MOBILE);
        nav.open(&mut fx.page);

        fx.page.doc.set_viewport_width(DESKTOP);
        nav.handle(&mut fx.page, &NavEvent::Resize);
        clock.advance(Duration::from_millis(100));
        nav.tick(&mut fx.page);
        assert!(nav.is_open(), "debounce window not yet elapsed");

        clock.advance(Duration::from_millis(50));
        nav.tick(&mut fx.page);
        assert!(!nav.is_open());
        assert!(!nav.state().is_mobile());
        assert_eq!(expanded(&fx).as_deref(), Some("false"));
    }

    #[test]
    fn test_resize_burst_reclassifies_once_with_final_width() {
        let (mut fx, mut nav, clock) = mount(DESKTOP);
        for width in [700, 1000, 500] {
            fx.page.doc.set_viewport_width(width);
            nav.handle(&mut fx.page, &NavEvent::Resize);
            clock.advance(Duration::from_millis(100));
            nav.tick(&mut fx.page);
            assert!(!nav.state().is_mobile());
        }
        clock.advance(Duration::from_millis(50));
        nav.tick(&mut fx.page);
        assert!(nav.state().is_mobile());
    }

    #[test]
    fn test_same_page_anchor_scrolls_below_navbar() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        nav.open(&mut fx.page);
        let propagation = nav.handle(&mut fx.page, &NavEvent::Click { target: fx.links[0] });

        assert_eq!(propagation, Propagation::PreventDefault);
        assert!(!nav.is_open());
        // about at 664, navbar 64 tall, 20px margin
        assert_eq!(fx.page.scroll_y(), 580);
        assert!(fx.page.has_class(fx.navbar, SCROLLED_CLASS));
        assert_eq!(fx.page.doc.offset_top(fx.about), 664);
    }

    #[test]
    fn test_bare_hash_and_external_links_close_without_scrolling() {
        for index in [1, 2] {
            let (mut fx, mut nav, _) = mount(MOBILE);
            nav.open(&mut fx.page);
            let propagation =
                nav.handle(&mut fx.page, &NavEvent::Click { target: fx.links[index] });
            assert_eq!(propagation, Propagation::Continue);
            assert!(!nav.is_open());
            assert_eq!(fx.page.scroll_y(), 0);
        }
    }

    #[test]
    fn test_anchor_on_desktop_scrolls_without_announcing() {
        let (mut fx, mut nav, _) = mount(DESKTOP);
        let propagation = nav.handle(&mut fx.page, &NavEvent::Click { target: fx.links[0] });
        assert_eq!(propagation, Propagation::PreventDefault);
        assert_eq!(fx.page.scroll_y(), 580);
        assert!(fx.page.announcements().is_empty());
    }

    #[test]
    fn test_scrolled_class_tracks_threshold() {
        let (mut fx, mut nav, _) = mount(DESKTOP);
        fx.page.scroll_to(50);
        nav.handle(&mut fx.page, &NavEvent::Scroll);
        assert!(!fx.page.has_class(fx.navbar, SCROLLED_CLASS));

        fx.page.scroll_to(51);
        nav.handle(&mut fx.page, &NavEvent::Scroll);
        assert!(fx.page.has_class(fx.navbar, SCROLLED_CLASS));

        fx.page.scroll_to(0);
        nav.handle(&mut fx.page, &NavEvent::Scroll);
        assert!(!fx.page.has_class(fx.navbar, SCROLLED_CLASS));
    }

    #[test]
    fn test_teardown_flushes_timers_and_regions() {
        let (mut fx, mut nav, _) = mount(MOBILE);
        nav.open(&mut fx.page);
        nav.handle(&mut fx.page, &NavEvent::Resize);
        assert!(nav.resize.is_pending());

        nav.teardown(&mut fx.page);
        assert!(fx.page.announcements().is_empty());
    }
}
