//! # Debouncer
//!
//! Trailing-edge debounce as a deadline: every `trigger` pushes the
//! deadline out to `now + wait`, and `poll` reports `true` exactly once
//! when the deadline has passed. The owner runs the handler itself, which
//! keeps the handler free to borrow whatever it needs.
//!
//! ```text
//! trigger  trigger  trigger                 poll → fire
//!    │        │        │◄──────── wait ──────►│
//! ───┴────────┴────────┴─────────────────────┴────▶ time
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Restart the timer.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns `true` once the burst has settled, then disarms.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop a pending fire without running it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
