//! # portfolio-client
//!
//! Leptos + WASM frontend for a single-page personal portfolio site.
//! Replaces the hand-written JavaScript behavior layer with a Rust-native
//! component tree.
//!
//! This crate contains the page, components, application state, and the
//! browser-side utilities (theme persistence, smooth scrolling, viewport
//! intersection observation). All interactive behavior is client-side; the
//! contact form's "submission" is a local simulation with no backend.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // Suppress transitions until the first full paint; the load guard in
    // `util::load_guard` removes the class again on the window load event.
    util::load_guard::begin_loading();

    leptos::mount::hydrate_body(app::App);
}
