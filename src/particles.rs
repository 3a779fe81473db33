//! Falling particle decoration.
//!
//! A spawner drops one Ξ glyph from above the viewport every few seconds.
//! Each particle rides a CSS animation down the page and removes itself once
//! the fall completes, so the population stays bounded.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

/// Time between spawns.
pub const SPAWN_INTERVAL_MS: u32 = 5000;

/// Time a particle takes to fall off-screen, and when it is removed.
pub const FALL_DURATION_MS: u32 = 8000;

/// Glyph each particle shows.
pub const GLYPH: &str = "Ξ";

/// Horizontal spawn position for a random roll in `0.0..1.0`.
#[must_use]
pub fn spawn_x(random01: f64, viewport_width: f64) -> f64 {
    random01.clamp(0.0, 1.0) * viewport_width.max(0.0)
}

/// Inline style for a particle spawned at `x`.
#[must_use]
pub fn inline_style(x: f64) -> String {
    let fall = FALL_DURATION_MS / 1000;
    format!(
        "position: fixed; left: {x}px; top: -50px; color: #627eea; \
         font-size: 20px; pointer-events: none; z-index: 1000; opacity: 0.7; \
         animation: floatDown {fall}s linear forwards"
    )
}

/// Largest number of particles alive at once, given the spawn and fall
/// timing.
#[must_use]
pub fn max_concurrent() -> u32 {
    FALL_DURATION_MS.div_ceil(SPAWN_INTERVAL_MS)
}
