use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::controller::{MENU_CLASS, OPEN_CLASS};
use crate::core::dom::Document;
use crate::core::page::Page;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Landing, MenuPanel, Navbar, StatusBar};
use crate::tui::markup::NAVBAR_ROWS;

pub fn draw_ui(frame: &mut Frame, doc: &Document, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(NAVBAR_ROWS as u16), Min(0), Length(1)]);
    let [navbar_area, main_area, status_area] = layout.areas(frame.area());

    tui.hits.clear();
    tui.main_rows = main_area.height;
    let mobile = tui.is_mobile(doc);

    Landing::new(doc, &mut tui.hits, tui.px_per_row, NAVBAR_ROWS).render(frame, main_area);
    Navbar::new(doc, &mut tui.hits, mobile).render(frame, navbar_area);

    // The menu only slides in on narrow viewports.
    let menu_open = doc
        .query_class(MENU_CLASS)
        .is_some_and(|menu| doc.has_class(menu, OPEN_CLASS));
    if mobile && menu_open {
        MenuPanel::new(doc, &mut tui.hits).render(frame, main_area);
    }

    let announcements = doc
        .live_regions()
        .into_iter()
        .map(|region| doc.text(region).to_string())
        .collect();
    StatusBar::new(
        announcements,
        tui.notice.clone(),
        mobile,
        doc.viewport_width(),
    )
    .render(frame, status_area);
}
