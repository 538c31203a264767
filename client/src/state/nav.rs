//! Navigation bar behavior derived from scroll position.
//!
//! Everything here is pure arithmetic over `scrollY` and section offsets;
//! the nav bar component feeds it values read from the window on scroll.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Nav gets the `scrolled` class past this many pixels.
pub const STICKY_NAV_THRESHOLD: f64 = 50.0;
/// Back-to-top button shows past this many pixels.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;
/// A section counts as current this many pixels before its top edge.
pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;
/// Height of the fixed nav; smooth scrolling stops this far above a section.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;

/// A page section's id and its `offsetTop`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

#[must_use]
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > STICKY_NAV_THRESHOLD
}

#[must_use]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// The last section (in document order) whose activation line has been
/// scrolled past.
#[must_use]
pub fn active_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - SECTION_ACTIVATION_OFFSET)
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` (e.g. `#about`) points at the active section.
#[must_use]
pub fn link_is_active(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

/// Scroll destination for a section at `offset_top`.
#[must_use]
pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - NAV_SCROLL_OFFSET).max(0.0)
}

/// Inline styles for the three hamburger bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HamburgerStyle {
    pub top_transform: &'static str,
    pub middle_opacity: &'static str,
    pub bottom_transform: &'static str,
}

#[must_use]
pub fn hamburger_style(menu_open: bool) -> HamburgerStyle {
    if menu_open {
        HamburgerStyle {
            top_transform: "rotate(45deg) translate(5px, 5px)",
            middle_opacity: "0",
            bottom_transform: "rotate(-45deg) translate(7px, -6px)",
        }
    } else {
        HamburgerStyle { top_transform: "none", middle_opacity: "1", bottom_transform: "none" }
    }
}
