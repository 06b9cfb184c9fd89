//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::dom::{Document, Element};
use crate::core::page::{ElementId, Page};

/// Handles into the fixture page built by [`landing_fixture`].
pub struct Fixture {
    pub page: CountingPage,
    pub navbar: ElementId,
    pub toggle: ElementId,
    pub menu: ElementId,
    pub links: Vec<ElementId>,
    pub hero: ElementId,
    pub about: ElementId,
}

/// A navbar with a toggle and a three-link menu, followed by two sections.
///
/// ```text
/// nav.navbar (0..64)
/// ├── button.navbar-toggle
/// └── ul.navbar-menu
///     ├── a.nav-link  href="#about"
///     ├── a.nav-link  href="#"
///     └── a.nav-link  href="https://github.com/rausku"
/// section#hero  (64..664)
/// section#about (664..1264)
/// ```
pub fn landing_fixture(viewport_width: u32) -> Fixture {
    let mut doc = Document::new(viewport_width);
    let body = doc.body();
    let navbar = doc.append(body, Element::new("nav").class("navbar").layout(0, 64));
    let toggle = doc.append(navbar, Element::new("button").class("navbar-toggle").text("Menu"));
    let menu = doc.append(navbar, Element::new("ul").class("navbar-menu"));
    let links = ["#about", "#", "https://github.com/rausku"]
        .iter()
        .map(|href| {
            let li = doc.append(menu, Element::new("li"));
            doc.append(li, Element::new("a").class("nav-link").attr("href", href))
        })
        .collect();
    let hero = doc.append(body, Element::new("section").id("hero").layout(64, 600));
    let about = doc.append(body, Element::new("section").id("about").layout(664, 600));

    Fixture {
        page: CountingPage::new(doc),
        navbar,
        toggle,
        menu,
        links,
        hero,
        about,
    }
}

/// A `Document` that counts the side effects tests care about.
pub struct CountingPage {
    pub doc: Document,
    pub focus_calls: usize,
    pub appended: usize,
}

impl CountingPage {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            focus_calls: 0,
            appended: 0,
        }
    }

    /// Text of the currently attached live regions.
    pub fn announcements(&self) -> Vec<String> {
        self.doc
            .live_regions()
            .into_iter()
            .map(|r| self.doc.text(r).to_string())
            .collect()
    }
}

impl Page for CountingPage {
    fn body(&self) -> ElementId {
        self.doc.body()
    }

    fn query_class(&self, class: &str) -> Option<ElementId> {
        self.doc.query_class(class)
    }

    fn query_all_class(&self, class: &str) -> Vec<ElementId> {
        self.doc.query_all_class(class)
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.doc.element_by_id(id)
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        self.doc.attribute(el, name)
    }

    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        self.doc.set_attribute(el, name, value)
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.doc.has_class(el, class)
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        self.doc.add_class(el, class)
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        self.doc.remove_class(el, class)
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        self.doc.contains(ancestor, node)
    }

    fn focusable_within(&self, container: ElementId) -> Vec<ElementId> {
        self.doc.focusable_within(container)
    }

    fn focus(&mut self, el: ElementId) {
        self.focus_calls += 1;
        self.doc.focus(el)
    }

    fn active_element(&self) -> Option<ElementId> {
        self.doc.active_element()
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.doc.set_scroll_locked(locked)
    }

    fn viewport_width(&self) -> u32 {
        self.doc.viewport_width()
    }

    fn append_element(&mut self, parent: ElementId, tag: &str, text: &str) -> ElementId {
        self.appended += 1;
        self.doc.append_element(parent, tag, text)
    }

    fn remove_element(&mut self, el: ElementId) {
        self.doc.remove_element(el)
    }

    fn offset_top(&self, el: ElementId) -> u32 {
        self.doc.offset_top(el)
    }

    fn offset_height(&self, el: ElementId) -> u32 {
        self.doc.offset_height(el)
    }

    fn scroll_y(&self) -> u32 {
        self.doc.scroll_y()
    }

    fn scroll_to(&mut self, y: u32) {
        self.doc.scroll_to(y)
    }
}
