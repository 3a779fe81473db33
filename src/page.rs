//! Element lookup for the landing page.
//!
//! All markup the behavior layer touches is found here, once, at attach
//! time. Every handle is optional: a page section that is missing from the
//! HTML simply loses its behavior, and a warning notes which selector came
//! up empty.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

// ── Single elements ──────────────────────────────────────────────────────

pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_MENU: &str = ".nav-menu";
pub const HEADER: &str = ".header";
pub const THEME_TOGGLE: &str = ".theme-toggle";
pub const ACTIVITY_SECTION: &str = ".activity";
pub const PROGRESS_BAR: &str = ".scroll-progress";

// ── Collections ──────────────────────────────────────────────────────────

pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const HOVER_CARDS: &str = ".use-case-card, .example-card";
pub const BUTTONS: &str = ".btn";
pub const ENTRANCE_TARGETS: &str =
    ".use-case-card, .stat-item, .example-card, .topic-card, .action-card";
pub const STAT_VALUES: &str = ".stat-value";

/// The fixed elements the behavior layer wires up.
pub struct PageElements {
    pub nav_toggle: Option<Element>,
    pub nav_menu: Option<Element>,
    pub header: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub activity: Option<Element>,
}

impl PageElements {
    #[must_use]
    pub fn query(document: &Document) -> Self {
        Self {
            nav_toggle: require(document, NAV_TOGGLE),
            nav_menu: require(document, NAV_MENU),
            header: require(document, HEADER),
            theme_toggle: require(document, THEME_TOGGLE),
            activity: require(document, ACTIVITY_SECTION),
        }
    }
}

fn require(document: &Document, selector: &str) -> Option<Element> {
    let found = document.query_selector(selector).unwrap_or(None);
    if found.is_none() {
        log::warn!("element not found: {selector}");
    }
    found
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    elements(&list)
}

/// All elements matching `selector` under `root`.
#[must_use]
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    elements(&list)
}

fn elements(list: &NodeList) -> Vec<Element> {
    let mut out = Vec::new();
    for i in 0..list.length() {
        if let Some(element) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(element);
        }
    }
    out
}

/// The fragment id an in-page link points at, if it has one.
///
/// A bare `"#"` names no element and yields `None`.
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
