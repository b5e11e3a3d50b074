//! # portfolio
//!
//! Leptos + WASM personal portfolio site. The server binary renders the page
//! shell (SSR) and the `hydrate` build attaches the interactive behavior:
//! theme switching, navigation chrome, reveal animations, scroll-spy, the
//! contact form `mailto:` handoff, and the certificate gallery.
//!
//! Browser-only glue is gated behind the `hydrate` feature. Everything else
//! is plain state that compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod server;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
