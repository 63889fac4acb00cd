#![recursion_limit = "256"]

mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let delivery = services::delivery::from_config(&config.delivery);
    tracing::info!(delivery = delivery.name(), "contact delivery configured");

    let state = state::AppState::new(delivery, config.rate_limit);

    let app = routes::app(state, config.site_dir.as_deref()).expect("failed to build router");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
