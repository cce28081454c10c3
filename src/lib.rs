//! # analyzer-dashboard
//!
//! Leptos + WASM admin dashboard for the website analyzer service.
//!
//! Currently a single login screen backed by a thin HTTP client for the
//! analyzer backend's auth API. Pages own route-scoped orchestration,
//! `components` hold rendering details, `net` talks to the backend, and
//! `state` keeps natively testable UI models.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
