//! Page chrome state: navigation, scroll-derived flags, and the toast.
//!
//! Provided once by `App` as `RwSignal<UiState>` and read by the navigation
//! bar and the floating action buttons.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::scroll::{is_nav_scrolled, shows_scroll_to_top};

/// How long a toast stays on screen.
pub const TOAST_MS: u64 = 2000;

/// A transient notice. `seq` lets a later toast outlive an earlier timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub mobile_menu_open: bool,
    /// Navigation bar switches to its solid style.
    pub scrolled: bool,
    pub show_scroll_top: bool,
    pub toast: Option<Toast>,
    toast_seq: u64,
}

impl UiState {
    /// Recompute the scroll flags. Returns whether either flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = is_nav_scrolled(scroll_y);
        let show_scroll_top = shows_scroll_to_top(scroll_y);
        let changed = scrolled != self.scrolled || show_scroll_top != self.show_scroll_top;
        self.scrolled = scrolled;
        self.show_scroll_top = show_scroll_top;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Show `message`, returning the sequence number to pass to `dismiss_toast`.
    pub fn show_toast(&mut self, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast { message: message.into(), seq: self.toast_seq });
        self.toast_seq
    }

    /// Hide the toast only if it is still the one numbered `seq`.
    pub fn dismiss_toast(&mut self, seq: u64) {
        if self.toast.as_ref().is_some_and(|t| t.seq == seq) {
            self.toast = None;
        }
    }
}
