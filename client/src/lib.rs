//! # client
//!
//! Leptos + WASM front end for the VT DroneZone quote portal.
//!
//! Pages, components, and browser glue live here; session, claims, route
//! guarding, and the API contract come from the `portal` crate. Browser-only
//! code sits behind the `csr` feature so the crate still builds and tests
//! natively, where storage and HTTP degrade to inert stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
