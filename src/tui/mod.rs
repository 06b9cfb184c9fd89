//! # TUI Adapter
//!
//! The ratatui-specific layer. Renders the landing page [`Document`] into the
//! terminal and feeds terminal input back to it through the [`host::Host`].
//!
//! This is the only module that knows about ratatui and crossterm. The
//! navigation core only sees the [`Page`](crate::core::page::Page) trait.
//!
//! ## Units
//!
//! The page is laid out in CSS pixels. One terminal column is
//! `px_per_column` pixels wide (default 8, so 96 columns is the 768px
//! breakpoint) and one row is `px_per_row` pixels tall (default 16).
//!
//! ## Redraw Strategy
//!
//! The loop sleeps until the next input event or the navigation's next
//! timer deadline, capped at 500ms. It only redraws after an event or when
//! a timer actually fired.

mod component;
mod components;
pub mod event;
pub mod hit;
pub mod host;
pub mod markup;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::clock::SystemClock;
use crate::core::config::ResolvedConfig;
use crate::core::dom::Document;
use crate::core::page::Page;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::hit::HitMap;
use crate::tui::host::{Host, Press};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific state that doesn't belong in the page.
pub struct TuiState {
    /// Rebuilt on every frame.
    pub hits: HitMap,
    pub px_per_column: u32,
    pub px_per_row: u32,
    pub breakpoint: u32,
    /// Height of the scrollable page area from the last frame.
    pub main_rows: u16,
    /// Host message for the status bar (e.g. an external link was followed).
    pub notice: Option<String>,
    pub press: Option<Press>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            hits: HitMap::default(),
            px_per_column: config.px_per_column,
            px_per_row: config.px_per_row,
            breakpoint: config.nav.breakpoint,
            main_rows: 0,
            notice: None,
            press: None,
        }
    }

    /// The media query: which layout the page should be drawn in.
    pub fn is_mobile(&self, doc: &Document) -> bool {
        doc.viewport_width() < self.breakpoint
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture gives us clicks and drags for the touch gestures
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let size = terminal.size()?;
    let mut host = Host::new(&config, size.width, Box::new(SystemClock));
    info!(
        "Landing page mounted at {}px ({} columns)",
        host.doc.viewport_width(),
        size.width
    );

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &host.doc, &mut host.tui))?;
            needs_redraw = false;
        }

        let timeout = host
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(IDLE_POLL, |until| until.min(IDLE_POLL));

        // Drain everything that is queued before redrawing
        let mut pending = poll_event_timeout(timeout)?;
        let mut should_quit = false;
        while let Some(event) = pending {
            needs_redraw = true;
            if host.handle_event(event) {
                should_quit = true;
                break;
            }
            pending = poll_event_immediate()?;
        }
        if should_quit {
            debug!("Quit requested");
            break;
        }

        if host.next_deadline().is_some_and(|d| d <= Instant::now()) {
            host.tick();
            needs_redraw = true;
        }
    }

    host.shutdown();
    ratatui::restore();
    Ok(())
}
