use super::*;

fn sections() -> Vec<SectionOffset> {
    [("home", 0.0), ("about", 800.0), ("projects", 1600.0), ("contact", 2400.0)]
        .into_iter()
        .map(|(id, top)| SectionOffset { id: id.to_owned(), top })
        .collect()
}

#[test]
fn nav_scrolled_threshold_is_exclusive() {
    assert!(!nav_scrolled(0.0));
    assert!(!nav_scrolled(50.0));
    assert!(nav_scrolled(50.5));
}

#[test]
fn back_to_top_threshold_is_exclusive() {
    assert!(!back_to_top_visible(500.0));
    assert!(back_to_top_visible(501.0));
}

#[test]
fn active_section_at_top_is_first() {
    assert_eq!(active_section(&sections(), 0.0), Some("home"));
}

#[test]
fn active_section_switches_two_hundred_pixels_early() {
    let s = sections();
    assert_eq!(active_section(&s, 599.0), Some("home"));
    assert_eq!(active_section(&s, 600.0), Some("about"));
    assert_eq!(active_section(&s, 2300.0), Some("contact"));
}

#[test]
fn active_section_none_when_empty() {
    assert_eq!(active_section(&[], 1000.0), None);
}

#[test]
fn active_section_none_above_first_section() {
    let s = vec![SectionOffset { id: "late".to_owned(), top: 900.0 }];
    assert_eq!(active_section(&s, 100.0), None);
}

#[test]
fn link_is_active_matches_hash_href() {
    assert!(link_is_active("#about", Some("about")));
    assert!(!link_is_active("#about", Some("projects")));
    assert!(!link_is_active("#about", None));
    assert!(!link_is_active("/about", Some("about")));
}

#[test]
fn scroll_target_subtracts_nav_height() {
    assert_eq!(scroll_target(800.0), 720.0);
    assert_eq!(scroll_target(30.0), 0.0);
}

#[test]
fn hamburger_style_open_and_closed() {
    let open = hamburger_style(true);
    assert_eq!(open.top_transform, "rotate(45deg) translate(5px, 5px)");
    assert_eq!(open.middle_opacity, "0");
    assert_eq!(open.bottom_transform, "rotate(-45deg) translate(7px, -6px)");

    let closed = hamburger_style(false);
    assert_eq!(closed.top_transform, "none");
    assert_eq!(closed.middle_opacity, "1");
    assert_eq!(closed.bottom_transform, "none");
}
