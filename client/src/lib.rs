//! # client
//!
//! Leptos + WASM frontend for "A Small Statistical Experiment".
//!
//! The crate is compiled twice: with `hydrate` into the browser bundle and
//! with `ssr` into the host binary, which server-renders the same components.
//! Browser-only code sits behind `#[cfg(feature = "hydrate")]` and has a
//! no-op server twin.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
