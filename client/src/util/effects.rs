//! Decorative scroll and pointer effects.
//!
//! The formulas live here as pure functions; `components::reveal`,
//! `components::skill_bar` and `components::hero` wire them to browser
//! events.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

/// Fraction of a card that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;";
pub const REVEAL_SHOWN_STYLE: &str =
    "opacity: 1; transform: none; transition: opacity 0.6s ease, transform 0.6s ease;";

/// Fraction of a skill bar that must be visible before it fills.
pub const SKILL_THRESHOLD: f64 = 0.5;
/// Delay between resetting a skill bar to zero and growing it back.
pub const SKILL_FILL_DELAY_MS: u32 = 100;

const PARALLAX_FACTOR: f64 = 0.5;
const ORB_SPEED_STEP: f64 = 0.02;

/// Hero background transform, or `None` once the hero is scrolled out.
#[must_use]
pub fn parallax_transform(scroll_y: f64, viewport_height: f64) -> Option<String> {
    (scroll_y < viewport_height).then(|| format!("translateY({}px)", scroll_y * PARALLAX_FACTOR))
}

/// Transform for the `index`-th gradient orb following the cursor.
///
/// Later orbs move faster, which gives the layers depth.
#[must_use]
pub fn orb_transform(index: usize, client_x: f64, client_y: f64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let speed = (index + 1) as f64 * ORB_SPEED_STEP;
    format!("translate({}px, {}px)", client_x * speed, client_y * speed)
}

/// Inline width for a skill bar at `percent` (clamped to 0..=100).
#[must_use]
pub fn skill_width(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

/// Copyright line for the footer.
#[must_use]
pub fn footer_text(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}
