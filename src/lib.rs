//! # chachat
//!
//! Leptos + WASM browser client for the chachat chat application.
//!
//! This crate contains pages, components, client-side state, and the HTTP
//! helpers for the `/save_chat` and `/upload` endpoints. Build with the `csr`
//! feature for the browser; host builds keep every browser call as a no-op so
//! state logic can be tested with `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
