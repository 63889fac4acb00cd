//! # client
//!
//! Leptos frontend for the portfolio site, rendered on the server and
//! hydrated in the browser.
//!
//! The project catalog and its filter live in `catalog`; contact form rules
//! live in `contact`. This crate owns presentation: section components,
//! their view state, static page content, and the few browser capabilities
//! (scroll, clipboard, visibility) the sections need.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
