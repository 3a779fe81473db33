//! Entrance animation and stat trigger rules.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Visibility fraction that starts an entrance animation.
pub const ENTRANCE_THRESHOLD: f64 = 0.1;

/// Root margin that delays entrances until elements are well inside the
/// viewport.
pub const ENTRANCE_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Class added to an element when it enters.
pub const ENTRANCE_CLASS: &str = "animate-in";

/// Visibility fraction that starts the stat counters.
pub const STATS_THRESHOLD: f64 = 0.5;

/// Whether an intersection event should mark an element.
///
/// Marking is add-only: once an element carries the entrance class it keeps
/// it, and scrolling back past it never re-triggers.
#[must_use]
pub fn triggers(is_intersecting: bool, already_fired: bool) -> bool {
    is_intersecting && !already_fired
}

/// One-shot trigger for the stats section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    /// Feed one visibility reading; returns true exactly once, on the first
    /// visible reading.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}
