//! # client
//!
//! Leptos + WASM frontend for the price tracker.
//!
//! Pages collect a product URL or a free-text query, call the external
//! backend over HTTP, and render what comes back. All fetched data is
//! view-local: nothing is cached or shared between pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
