//! Router assembly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};
use crate::server::config::ServerConfig;

/// Leptos SSR for the page, static certificate assets, and a health probe.
///
/// The hydrate bundle under `/pkg` is served by the file fallback from the
/// Leptos site root.
pub fn app(options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
