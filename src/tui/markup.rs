//! # Landing Page Markup
//!
//! Builds the landing page as a [`Document`]. Vertical layout is authored in
//! terminal rows and stored in pixels so the core only ever sees pixels.
//!
//! ```text
//! nav.navbar                      rows 0..3   (fixed)
//! section#top.hero                rows 3..13
//! section#features                rows 13..25
//! section#about                   rows 25..35
//! section#contact                 rows 35..43
//! footer                          rows 43..46
//! ```

use crate::core::controller::{LINK_CLASS, MENU_CLASS, NAVBAR_CLASS, TOGGLE_CLASS};
use crate::core::dom::{Document, Element};
use crate::core::page::Page;

pub const NAVBAR_ROWS: u32 = 3;
pub const BRAND_CLASS: &str = "brand";
pub const BUTTON_CLASS: &str = "btn";

struct Section {
    tag: &'static str,
    id: &'static str,
    rows: u32,
    heading: &'static str,
    paragraphs: &'static [&'static str],
    button: Option<(&'static str, &'static str)>,
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#about", "About"),
    ("#contact", "Contact"),
    ("https://github.com/rausku", "GitHub"),
];

const SECTIONS: &[Section] = &[
    Section {
        tag: "section",
        id: "top",
        rows: 10,
        heading: "Sharp and calm.",
        paragraphs: &[
            "Rausku is a mecha fish AI assistant that keeps its cool while you keep shipping.",
        ],
        button: Some(("#features", "Explore features")),
    },
    Section {
        tag: "section",
        id: "features",
        rows: 12,
        heading: "Features",
        paragraphs: &[
            "Precise answers: short, sourced and to the point.",
            "Calm under load: no spinners you have to babysit.",
            "Keyboard first: every action is one key away.",
        ],
        button: None,
    },
    Section {
        tag: "section",
        id: "about",
        rows: 10,
        heading: "About",
        paragraphs: &[
            "Built by a small crew who like their tools quiet and their fish armoured.",
        ],
        button: None,
    },
    Section {
        tag: "section",
        id: "contact",
        rows: 8,
        heading: "Contact",
        paragraphs: &["Questions, ideas or fish puns are all welcome."],
        button: Some(("mailto:hello@rausku.dev", "Say hello")),
    },
    Section {
        tag: "footer",
        id: "footer",
        rows: 3,
        heading: "",
        paragraphs: &["Rausku · Sharp and calm"],
        button: None,
    },
];

/// Build the landing page for a viewport `viewport_width` px wide.
pub fn landing_document(viewport_width: u32, px_per_row: u32) -> Document {
    let mut doc = Document::new(viewport_width);
    let body = doc.body();

    let navbar = doc.append(
        body,
        Element::new("nav")
            .class(NAVBAR_CLASS)
            .layout(0, NAVBAR_ROWS * px_per_row),
    );
    doc.append(
        navbar,
        Element::new("a")
            .class(BRAND_CLASS)
            .attr("href", "#top")
            .text("Rausku"),
    );
    doc.append(
        navbar,
        Element::new("button")
            .class(TOGGLE_CLASS)
            .attr("aria-label", "Toggle navigation")
            .text("Menu"),
    );
    let menu = doc.append(navbar, Element::new("ul").class(MENU_CLASS));
    for (href, label) in NAV_LINKS {
        let item = doc.append(menu, Element::new("li"));
        doc.append(
            item,
            Element::new("a")
                .class(LINK_CLASS)
                .attr("href", href)
                .text(label),
        );
    }

    let mut top_rows = NAVBAR_ROWS;
    for section in SECTIONS {
        let el = doc.append(
            body,
            Element::new(section.tag)
                .id(section.id)
                .layout(top_rows * px_per_row, section.rows * px_per_row),
        );
        if !section.heading.is_empty() {
            doc.append(el, Element::new("h2").text(section.heading));
        }
        for paragraph in section.paragraphs {
            doc.append(el, Element::new("p").text(paragraph));
        }
        if let Some((href, label)) = section.button {
            doc.append(
                el,
                Element::new("a")
                    .class(BUTTON_CLASS)
                    .attr("href", href)
                    .text(label),
            );
        }
        top_rows += section.rows;
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_has_navigation_contract() {
        let doc = landing_document(1024, 16);
        assert!(doc.query_class(TOGGLE_CLASS).is_some());
        let menu = doc.query_class(MENU_CLASS).unwrap();
        let links = doc.query_all_class(LINK_CLASS);
        assert_eq!(links.len(), NAV_LINKS.len());
        assert!(links.iter().all(|&l| doc.contains(menu, l)));
    }

    #[test]
    fn test_sections_are_stacked_in_pixels() {
        let doc = landing_document(1024, 16);
        let top = doc.element_by_id("top").unwrap();
        let features = doc.element_by_id("features").unwrap();
        assert_eq!(doc.offset_top(top), 48);
        assert_eq!(doc.offset_top(features), 48 + 160);
        assert_eq!(doc.document_height(), 46 * 16);
    }
}
