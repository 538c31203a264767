//! Page chrome state: theme, mobile menu, scroll position.
//!
//! DESIGN
//! ======
//! Presentation flags live here, apart from the lead gate and download
//! counters, so navigation and effects can change without touching them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color scheme applied as `data-theme` on the document element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized is `Light`.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the toggle button (shows the theme you would switch to).
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// UI state shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub active_section: Option<String>,
}
