//! Server-side hosting: environment config and the axum router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server has no application logic of its own. It renders the Leptos
//! shell, serves the hydrate bundle from `/pkg`, and serves certificate images
//! from `/assets`.

pub mod config;
#[cfg(feature = "ssr")]
pub mod routes;
