//! # portal
//!
//! Leptos + WASM frontend for the role-based learning portal.
//!
//! This crate holds the credential store, the bearer-token HTTP client, the
//! session model, the role guard and the admin, mentor and learner route
//! trees. The `server` crate renders it with SSR and the browser hydrates it.

pub mod access;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated wasm-bindgen glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::info!("hydrating portal");
    leptos::mount::hydrate_body(app::App);
}
