//! Browser behavior layer for the landing page, compiled to WebAssembly.
//!
//! The page ships as static HTML and CSS; this crate attaches everything
//! that moves: the mobile navigation menu, the persisted light/dark theme,
//! smooth-scrolling anchors, the scroll-reactive header and progress bar,
//! entrance animations, stat counters, falling particles, and the card and
//! button micro-interactions.
//!
//! Markup is addressed through fixed selectors. Sections missing from the
//! HTML are skipped with a console warning rather than failing the whole
//! attach, so the same bundle serves trimmed-down variants of the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Finds elements, registers listeners and observers, owns cleanup |
//! | [`page`] | Selectors and element lookup |
//! | [`menu`] | Navigation menu transitions |
//! | [`theme`] | Light/dark theme state and persistence rules |
//! | [`scroll`] | Header threshold and progress percentage math |
//! | [`debounce`] | Trailing-edge debounce bookkeeping |
//! | [`reveal`] | Entrance animation and stat trigger rules |
//! | [`counter`] | Stat counter extraction, ramp, and formatting |
//! | [`particles`] | Particle timing and placement |
//! | [`ripple`] | Ripple geometry and card hover transforms |
//! | [`styles`] | Injected style fragments |
//! | [`diag`] | Error, rejection, and load-timing reporting |
//!
//! The `boot` module is the `wasm_bindgen(start)` entry point and only
//! exists on the wasm32 target; everything else compiles natively so the
//! behavior rules can be tested with plain `cargo test`.

pub mod controller;
pub mod counter;
pub mod debounce;
pub mod diag;
pub mod menu;
pub mod page;
pub mod particles;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod styles;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod boot;
