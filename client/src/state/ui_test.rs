use super::*;

#[test]
fn default_chrome_is_closed_and_unscrolled() {
    let ui = UiState::default();
    assert!(!ui.mobile_menu_open);
    assert!(!ui.scrolled);
    assert!(!ui.show_scroll_top);
    assert_eq!(ui.toast, None);
}

#[test]
fn scroll_flags_follow_thresholds() {
    let mut ui = UiState::default();
    assert!(!ui.on_scroll(10.0));
    assert!(!ui.scrolled);
    assert!(ui.on_scroll(11.0));
    assert!(ui.scrolled);
    assert!(!ui.show_scroll_top);
    assert!(!ui.on_scroll(200.0));
    assert!(ui.on_scroll(301.0));
    assert!(ui.show_scroll_top);
    assert!(ui.on_scroll(0.0));
    assert!(!ui.scrolled);
    assert!(!ui.show_scroll_top);
}

#[test]
fn menu_toggles_and_closes() {
    let mut ui = UiState::default();
    ui.toggle_menu();
    assert!(ui.mobile_menu_open);
    ui.close_menu();
    assert!(!ui.mobile_menu_open);
    ui.close_menu();
    assert!(!ui.mobile_menu_open);
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut ui = UiState::default();
    let first = ui.show_toast("Link copied");
    let second = ui.show_toast("Link copied again");
    ui.dismiss_toast(first);
    assert_eq!(ui.toast.as_ref().map(|t| t.message.as_str()), Some("Link copied again"));
    ui.dismiss_toast(second);
    assert_eq!(ui.toast, None);
}
