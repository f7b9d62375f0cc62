//! # greenthicks-client
//!
//! Leptos + WASM frontend for the Green Thicks organic grocery store.
//!
//! This crate contains pages, components, the client session evaluator, the
//! route table and guard, shop state, and the auth API client. It is compiled
//! twice: with `hydrate` into the browser bundle and with `ssr` into the
//! server binary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
