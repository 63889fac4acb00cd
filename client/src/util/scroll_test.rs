use super::*;

#[test]
fn nav_scrolled_only_past_threshold() {
    assert!(!is_nav_scrolled(0.0));
    assert!(!is_nav_scrolled(10.0));
    assert!(is_nav_scrolled(10.5));
    assert!(is_nav_scrolled(800.0));
}

#[test]
fn scroll_to_top_only_past_threshold() {
    assert!(!shows_scroll_to_top(0.0));
    assert!(!shows_scroll_to_top(300.0));
    assert!(shows_scroll_to_top(301.0));
}

#[test]
fn section_id_lowercases_label() {
    assert_eq!(section_id("About"), "about");
    assert_eq!(section_id("Projects"), "projects");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_inert_off_browser() {
    assert!((scroll_y() - 0.0).abs() < f64::EPSILON);
    assert!(!scroll_to_section("about"));
    scroll_to_top();
}
