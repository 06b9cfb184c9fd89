//! # StatusBar Component
//!
//! Bottom line of the screen. It doubles as the terminal's screen reader:
//! whatever live regions are currently in the page are spoken here.
//!
//! ## Conditional Formatting
//!
//! The text changes based on state, most important first:
//!
//! 1. **Announcements**: `"🔊 Navigation menu opened"`
//! 2. **Notice**: `"External link: https://github.com/rausku"`
//! 3. **Default**: `"Rausku | mobile 640px | Tab focus · Enter activate · q quit"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Bottom status line.
///
/// # Props
///
/// - `announcements`: text of the live regions currently in the page
/// - `notice`: last host message (e.g. an external link that was followed)
/// - `mobile`: whether the viewport is below the breakpoint
/// - `viewport_px`: viewport width in CSS pixels
pub struct StatusBar {
    pub announcements: Vec<String>,
    pub notice: Option<String>,
    pub mobile: bool,
    pub viewport_px: u32,
}

impl StatusBar {
    pub fn new(
        announcements: Vec<String>,
        notice: Option<String>,
        mobile: bool,
        viewport_px: u32,
    ) -> Self {
        Self {
            announcements,
            notice,
            mobile,
            viewport_px,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = if !self.announcements.is_empty() {
            Span::styled(
                format!("🔊 {}", self.announcements.join(" · ")),
                Style::default().fg(Color::Yellow),
            )
        } else if let Some(notice) = &self.notice {
            Span::raw(notice.clone())
        } else {
            let mode = if self.mobile { "mobile" } else { "desktop" };
            Span::styled(
                format!(
                    "Rausku | {mode} {}px | Tab focus · Enter activate · q quit",
                    self.viewport_px
                ),
                Style::default().fg(Color::DarkGray),
            )
        };

        frame.render_widget(span, area);
    }
}
