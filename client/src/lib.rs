//! # client
//!
//! Leptos + WASM storefront front end. The catalog page keeps the product
//! list in sync with the URL query string through the `catalog` crate's
//! reconciler, and the categories page renders the lazily loaded tree.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
