//! # Navbar Component
//!
//! Top bar of the page. Two presentations, picked by viewport width the
//! way a media query would:
//!
//! - **Wide**: brand on the left, every nav link inline on the right.
//! - **Narrow**: brand on the left, the hamburger toggle on the right. The
//!   links live in the [`MenuPanel`](super::MenuPanel) instead.
//!
//! The border brightens once the navbar carries the `scrolled` class.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

use crate::core::controller::{LINK_CLASS, MENU_CLASS, NAVBAR_CLASS, SCROLLED_CLASS, TOGGLE_CLASS};
use crate::core::dom::Document;
use crate::core::page::Page;
use crate::tui::component::Component;
use crate::tui::components::focus_style;
use crate::tui::hit::HitMap;
use crate::tui::markup::BRAND_CLASS;

const LINK_GAP: u16 = 2;

pub struct Navbar<'a> {
    doc: &'a Document,
    hits: &'a mut HitMap,
    mobile: bool,
}

impl<'a> Navbar<'a> {
    pub fn new(doc: &'a Document, hits: &'a mut HitMap, mobile: bool) -> Self {
        Self { doc, hits, mobile }
    }

    fn render_toggle(&mut self, frame: &mut Frame, inner: Rect) {
        let Some(toggle) = self.doc.query_class(TOGGLE_CLASS) else {
            return;
        };
        let expanded = self.doc.attribute(toggle, "aria-expanded").as_deref() == Some("true");
        let label = if expanded { "✕ Close" } else { "☰ Menu" };
        let width = (label.width() as u16).min(inner.width);
        let rect = Rect::new(inner.right().saturating_sub(width), inner.y, width, 1);

        let style = focus_style(self.doc, toggle, Style::default().fg(Color::Cyan));
        frame.render_widget(Span::styled(label, style), rect);
        self.hits.register(rect, toggle);
    }

    fn render_inline_links(&mut self, frame: &mut Frame, inner: Rect) {
        let links = self.doc.query_all_class(LINK_CLASS);
        let labels: Vec<&str> = links.iter().map(|&l| self.doc.text(l)).collect();
        let total: u16 = labels.iter().map(|l| l.width() as u16).sum::<u16>()
            + LINK_GAP * (labels.len().saturating_sub(1) as u16);

        let start = inner.right().saturating_sub(total).max(inner.x);
        if let Some(menu) = self.doc.query_class(MENU_CLASS) {
            self.hits
                .register(Rect::new(start, inner.y, inner.right() - start, 1), menu);
        }

        let mut x = start;
        for (&link, label) in links.iter().zip(labels) {
            let width = (label.width() as u16).min(inner.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            let rect = Rect::new(x, inner.y, width, 1);
            let style = focus_style(self.doc, link, Style::default().fg(Color::Gray));
            frame.render_widget(Span::styled(label, style), rect);
            self.hits.register(rect, link);
            x += width + LINK_GAP;
        }
    }
}

impl Component for Navbar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(navbar) = self.doc.query_class(NAVBAR_CLASS) else {
            return;
        };
        self.hits.register(area, navbar);

        let border = if self.doc.has_class(navbar, SCROLLED_CLASS) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.is_empty() {
            return;
        }

        if let Some(brand) = self.doc.query_class(BRAND_CLASS) {
            let label = self.doc.text(brand);
            let rect = Rect::new(inner.x, inner.y, (label.width() as u16).min(inner.width), 1);
            let style = focus_style(
                self.doc,
                brand,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            );
            frame.render_widget(Span::styled(label, style), rect);
            self.hits.register(rect, brand);
        }

        if self.mobile {
            self.render_toggle(frame, inner);
        } else {
            self.render_inline_links(frame, inner);
        }
    }
}
