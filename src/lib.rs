//! # bugtracker-ui
//!
//! Leptos + WASM frontend for the bug tracker backend.
//!
//! This crate contains the session store, the auth gateway, the
//! authenticated request wrapper, route protection, the role router, and
//! the pages built on top of them. Browser bindings (localStorage, fetch,
//! `window.location`) are compiled in with the `csr` feature; native builds
//! use in-memory stand-ins so the core logic runs under `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Already installed on hot reload.
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
