//! # portfolio
//!
//! Leptos + WASM frontend for a personal portfolio site.
//!
//! The widgets (lead-gated CV download, dataset counters, theme, navigation,
//! contact form) are plain state machines in `state`, rendered by
//! `components` and persisted through `util::storage::KeyValueStore`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod site;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("portfolio loaded");
    leptos::mount::hydrate_body(app::App);
}
