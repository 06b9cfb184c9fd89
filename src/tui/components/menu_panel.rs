//! # Menu Panel Component
//!
//! The slide-in navigation menu for narrow viewports: a panel on the right
//! edge of the page area listing every nav link. The caller only draws it
//! while the menu element carries `is-open`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding};

use crate::core::controller::{LINK_CLASS, MENU_CLASS};
use crate::core::dom::Document;
use crate::core::page::Page;
use crate::tui::component::Component;
use crate::tui::components::focus_style;
use crate::tui::hit::HitMap;

const MIN_WIDTH: u16 = 24;

pub struct MenuPanel<'a> {
    doc: &'a Document,
    hits: &'a mut HitMap,
}

impl<'a> MenuPanel<'a> {
    pub fn new(doc: &'a Document, hits: &'a mut HitMap) -> Self {
        Self { doc, hits }
    }
}

impl Component for MenuPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(menu) = self.doc.query_class(MENU_CLASS) else {
            return;
        };
        let width = (area.width * 3 / 5).max(MIN_WIDTH).min(area.width);
        let panel = Rect::new(area.right() - width, area.y, width, area.height);

        frame.render_widget(Clear, panel);
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Menu ")
            .title_bottom(Line::from(" Esc close · drag → to swipe ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        self.hits.register(panel, menu);

        for (row, link) in self.doc.query_all_class(LINK_CLASS).into_iter().enumerate() {
            // One blank row between links, as on a touch screen.
            let y = inner.y + (row as u16) * 2;
            if y >= inner.bottom() {
                break;
            }
            let rect = Rect::new(inner.x, y, inner.width, 1);
            let style = focus_style(self.doc, link, Style::default().fg(Color::White));
            frame.render_widget(Span::styled(self.doc.text(link), style), rect);
            self.hits.register(rect, link);
        }
    }
}
