//! Window scroll helpers.
//!
//! Threshold checks are pure; the browser calls no-op on the server.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Navigation gets its solid background past this offset, in CSS pixels.
pub const NAV_SCROLLED_THRESHOLD: f64 = 10.0;
/// The scroll-to-top button appears past this offset.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[must_use]
pub fn is_nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}

#[must_use]
pub fn shows_scroll_to_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Element id for a navigation label ("About" -> "about").
#[must_use]
pub fn section_id(label: &str) -> String {
    label.to_lowercase()
}

/// Current vertical scroll offset, 0 outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smooth-scroll to the element with `id`. Returns whether it was found.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::debug!("scroll target #{id} not found");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
