//! Theme initialization and toggle.
//!
//! Reads the saved theme from the store and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to the store and
//! updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op on the
//! DOM so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;
use crate::util::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

/// Saved theme, or `Light` when nothing usable is stored.
pub fn read_preference(store: &impl KeyValueStore) -> Theme {
    Theme::parse(store.get(THEME_KEY).as_deref())
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(store: &impl KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    store.set(THEME_KEY, next.as_str());
    next
}
