use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_known_values() {
    assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
    assert_eq!(Theme::parse(Some("light")), Theme::Light);
    assert_eq!(Theme::parse(Some(" dark ")), Theme::Dark);
}

#[test]
fn theme_parse_missing_or_unknown_is_light() {
    assert_eq!(Theme::parse(None), Theme::Light);
    assert_eq!(Theme::parse(Some("sepia")), Theme::Light);
    assert_eq!(Theme::parse(Some("")), Theme::Light);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(Some(theme.as_str())), theme);
    }
}

#[test]
fn theme_toggle_icons_differ() {
    assert_ne!(Theme::Light.toggle_icon(), Theme::Dark.toggle_icon());
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_closed_and_at_top() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.menu_open);
    assert_eq!(state.scroll_y, 0.0);
    assert_eq!(state.active_section, None);
}
