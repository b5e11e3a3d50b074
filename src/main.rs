#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use leptos::prelude::get_configuration;
    use portfolio::server::{config::ServerConfig, routes};

    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let mut options = get_configuration(None).expect("leptos configuration missing").leptos_options;
    let addr = config.site_addr(options.site_addr);
    options.site_addr = addr;

    let app = routes::app(options, &config);
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, assets_dir = %config.assets_dir.display(), "portfolio listening");
    axum::serve(listener, app.into_make_service()).await.expect("server failed");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The binary only exists with the `ssr` feature; the client builds as a
    // library via `hydrate`.
}
