use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn read_preference_defaults_to_light() {
    assert_eq!(read_preference(&MemoryStore::new()), Theme::Light);
}

#[test]
fn read_preference_uses_saved_value() {
    let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
    assert_eq!(read_preference(&store), Theme::Dark);
}

#[test]
fn toggle_persists_next_theme() {
    let store = MemoryStore::new();
    let next = toggle(&store, Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

    let back = toggle(&store, next);
    assert_eq!(back, Theme::Light);
    assert_eq!(read_preference(&store), Theme::Light);
}

#[test]
fn apply_is_callable_off_browser() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
