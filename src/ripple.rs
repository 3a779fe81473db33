//! Button ripple geometry and card hover transforms.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// How long a ripple lives before it is removed.
pub const DURATION_MS: u32 = 600;

/// Class on the injected ripple span.
pub const CLASS: &str = "ripple";

/// Transform applied to a card while hovered.
pub const CARD_LIFT: &str = "translateY(-8px) scale(1.02)";

/// Transform applied when the pointer leaves.
pub const CARD_REST: &str = "translateY(0) scale(1)";

/// Placement of one ripple inside its button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Diameter, covering the button's longer side.
    pub size: f64,
    /// Left offset within the button.
    pub left: f64,
    /// Top offset within the button.
    pub top: f64,
}

impl RippleGeometry {
    /// Center a ripple on a click at viewport coordinates
    /// (`click_x`, `click_y`) inside the button rect.
    #[must_use]
    pub fn for_click(
        click_x: f64,
        click_y: f64,
        rect_left: f64,
        rect_top: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: click_x - rect_left - size / 2.0,
            top: click_y - rect_top - size / 2.0,
        }
    }

    /// Inline style positioning the ripple span.
    #[must_use]
    pub fn inline_style(&self) -> String {
        let Self { size, left, top } = self;
        format!("width: {size}px; height: {size}px; left: {left}px; top: {top}px")
    }
}
