//! # Screen-Reader Announcements
//!
//! Each announcement is a throwaway live region appended to the body and
//! removed once its delay has passed. Nothing reads them back; assistive
//! technology picks them up when they appear.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::debug;

use crate::core::page::{ElementId, Page};

pub struct Announcer {
    delay: Duration,
    pending: VecDeque<(ElementId, Instant)>,
}

impl Announcer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: VecDeque::new(),
        }
    }

    pub fn announce<P: Page>(&mut self, page: &mut P, message: &str, now: Instant) {
        let body = page.body();
        let region = page.append_element(body, "div", message);
        page.set_attribute(region, "role", "status");
        page.set_attribute(region, "aria-live", "polite");
        page.set_attribute(region, "aria-atomic", "true");
        page.add_class(region, "sr-only");
        debug!("Announced: {message}");
        self.pending.push_back((region, now + self.delay));
    }

    /// Remove every region whose delay has elapsed.
    pub fn sweep<P: Page>(&mut self, page: &mut P, now: Instant) {
        // Delays are uniform, so expiry order is insertion order.
        while let Some(&(region, expires)) = self.pending.front() {
            if expires > now {
                break;
            }
            page.remove_element(region);
            self.pending.pop_front();
        }
    }

    /// Remove every outstanding region immediately.
    pub fn flush<P: Page>(&mut self, page: &mut P) {
        for (region, _) in self.pending.drain(..) {
            page.remove_element(region);
        }
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.pending.front().map(|&(_, expires)| expires)
    }
}
