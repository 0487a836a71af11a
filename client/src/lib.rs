//! # client
//!
//! Leptos frontend for the collection point registration app. Contains the
//! page routes (landing + registration form), the form/selection state, REST
//! helpers, and the Web Mercator math behind the location picker.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
