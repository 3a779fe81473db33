//! Light/dark theme state.
//!
//! The markup default is light; dark mode is a `dark-theme` class on `<body>`
//! plus a glyph swap on the toggle control. The preference survives reloads
//! through a single `localStorage` key holding `"dark"` or `"light"`. The class
//! on `<body>` is the source of truth at runtime; storage only seeds it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key for the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Class carried by `<body>` while dark mode is on.
pub const BODY_CLASS: &str = "dark-theme";

/// Color theme for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The theme after one activation of the toggle.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The theme currently visible, given whether `<body>` carries the dark
    /// class.
    #[must_use]
    pub fn from_dark_class(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Glyph shown on the toggle while this theme is active.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Value written to `localStorage`.
    #[must_use]
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference; anything but `"dark"` reads as light.
    #[must_use]
    pub fn from_storage(value: Option<&str>) -> Self {
        if value == Some("dark") { Self::Dark } else { Self::Light }
    }

    /// Whether `<body>` carries the dark class under this theme.
    #[must_use]
    pub fn dark(self) -> bool {
        self == Self::Dark
    }
}
