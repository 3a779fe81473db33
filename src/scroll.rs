//! Scroll position math for the header and the progress bar.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset past which the header condenses.
pub const HEADER_THRESHOLD_PX: f64 = 100.0;

/// Quiet window for the debounced header restyle.
pub const DEBOUNCE_QUIET_MS: u32 = 10;

/// Class carried by the header once past the threshold.
pub const HEADER_CLASS: &str = "scrolled";

/// Class on the progress bar element.
pub const PROGRESS_CLASS: &str = "scroll-progress";

/// Whether the header shows its condensed style at this offset.
#[must_use]
pub fn header_condensed(offset_y: f64) -> bool {
    offset_y > HEADER_THRESHOLD_PX
}

/// Percentage of the scrollable range covered, in `0.0..=100.0`.
///
/// Pages no taller than the viewport have no scrollable range and report 0
/// rather than dividing by zero or going negative.
#[must_use]
pub fn progress_percent(offset_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (offset_y / range * 100.0).clamp(0.0, 100.0)
}
