//! # Landing Page Component
//!
//! Draws the page sections below the fixed navbar, shifted by the
//! document's scroll position. Sections cut by the top edge are drawn
//! partially by scrolling the paragraph inside its clipped box.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::dom::Document;
use crate::core::page::{ElementId, Page};
use crate::tui::component::Component;
use crate::tui::components::focus_style;
use crate::tui::hit::HitMap;
use crate::tui::markup::BUTTON_CLASS;

pub struct Landing<'a> {
    doc: &'a Document,
    hits: &'a mut HitMap,
    px_per_row: u32,
    /// Rows taken by the fixed navbar at the top of the page.
    navbar_rows: u32,
}

impl<'a> Landing<'a> {
    pub fn new(doc: &'a Document, hits: &'a mut HitMap, px_per_row: u32, navbar_rows: u32) -> Self {
        Self {
            doc,
            hits,
            px_per_row,
            navbar_rows,
        }
    }

    fn sections(&self) -> Vec<ElementId> {
        self.doc
            .children(self.doc.body())
            .iter()
            .copied()
            .filter(|&el| matches!(self.doc.tag(el), "section" | "footer"))
            .collect()
    }

    /// Lines for a section, plus the button and its index among the lines.
    fn section_lines(&self, section: ElementId) -> (Vec<Line<'a>>, Option<(ElementId, usize)>) {
        let doc = self.doc;
        let mut lines = Vec::new();
        let mut button = None;
        for &child in doc.children(section) {
            match doc.tag(child) {
                "h1" | "h2" => {
                    lines.push(Line::from(Span::styled(
                        doc.text(child),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::default());
                }
                "p" => lines.push(Line::from(doc.text(child))),
                "a" if doc.has_class(child, BUTTON_CLASS) => {
                    lines.push(Line::default());
                    button = Some((child, lines.len()));
                    let style = focus_style(doc, child, Style::default().fg(Color::Black).bg(Color::Cyan));
                    lines.push(Line::from(Span::styled(format!("[ {} ]", doc.text(child)), style)));
                }
                _ => {}
            }
        }
        (lines, button)
    }
}

impl Component for Landing<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let scroll_rows = self.doc.scroll_y() / self.px_per_row;

        for section in self.sections() {
            let top_rows = self.doc.offset_top(section) / self.px_per_row;
            let height = self.doc.offset_height(section) / self.px_per_row;

            // Position relative to the top of `area`, may be negative.
            let rel_top = top_rows as i64 - self.navbar_rows as i64 - scroll_rows as i64;
            let rel_bottom = rel_top + height as i64;
            if rel_bottom <= 0 || rel_top >= area.height as i64 {
                continue;
            }
            let clipped_top = rel_top.max(0);
            let clipped_bottom = rel_bottom.min(area.height as i64);
            let visible = Rect::new(
                area.x,
                area.y + clipped_top as u16,
                area.width,
                (clipped_bottom - clipped_top) as u16,
            );
            let hidden_rows = (clipped_top - rel_top) as u16;
            self.hits.register(visible, section);

            let (lines, button) = self.section_lines(section);
            // Row of the button after wrapping everything above it.
            let button = button.map(|(el, index)| {
                let above = Paragraph::new(lines[..index].to_vec()).wrap(Wrap { trim: true });
                (el, above.line_count(visible.width.saturating_sub(1)) as u16)
            });
            let paragraph = Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::LEFT)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .wrap(Wrap { trim: true })
                .scroll((hidden_rows, 0));
            frame.render_widget(paragraph, visible);

            // Buttons are a single line; register it when it is on screen.
            if let Some((el, line)) = button
                && line >= hidden_rows
            {
                let y = visible.y + (line - hidden_rows);
                if y < visible.bottom() {
                    self.hits
                        .register(Rect::new(visible.x + 1, y, visible.width.saturating_sub(1), 1), el);
                }
            }
        }
    }
}
