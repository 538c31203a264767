mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    if config.mailer.is_none() {
        tracing::warn!("mail forwarding not configured; contact messages will only be logged");
    }
    for path in config.missing_assets() {
        tracing::warn!(path = %path.display(), "linked asset missing; downloads of it will 404");
    }

    let port = config.port;
    let state = state::AppState::new(config);
    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
