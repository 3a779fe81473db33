//! Mobile navigation menu transitions.
//!
//! The menu is open exactly when both the toggle button and the menu element
//! carry the `active` class. Each transition is computed from the current
//! open state, re-read from the DOM per event, and returns the full set of
//! writes to apply: classes, ARIA attributes, and where focus should land.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Class carried by the toggle and the menu while open.
pub const OPEN_CLASS: &str = "active";

/// Where keyboard focus moves after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// Into the menu, onto its first link.
    FirstMenuItem,
    /// Back onto the toggle button.
    Toggle,
    /// Leave focus where it is.
    Unchanged,
}

/// DOM writes for one menu transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEffect {
    /// Whether the `active` class is present after the transition.
    pub open: bool,
    /// Value for the toggle's `aria-expanded` attribute.
    pub aria_expanded: &'static str,
    /// Value for the toggle's `aria-label` attribute.
    pub aria_label: &'static str,
    /// Focus target after the writes land.
    pub focus: Focus,
}

/// Transition for a click on the toggle button.
#[must_use]
pub fn toggle(open: bool) -> MenuEffect {
    if open {
        close(Focus::Unchanged)
    } else {
        open_menu()
    }
}

/// Transition for an Escape keypress, if the menu is open.
///
/// Escape with a closed menu is a no-op so the key stays available to
/// whatever else is on the page.
#[must_use]
pub fn escape(open: bool) -> Option<MenuEffect> {
    open.then(|| close(Focus::Toggle))
}

fn open_menu() -> MenuEffect {
    MenuEffect {
        open: true,
        aria_expanded: "true",
        aria_label: "Close menu",
        focus: Focus::FirstMenuItem,
    }
}

fn close(focus: Focus) -> MenuEffect {
    MenuEffect {
        open: false,
        aria_expanded: "false",
        aria_label: "Open menu",
        focus,
    }
}
