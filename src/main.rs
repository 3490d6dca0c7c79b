//! Shopdesk server binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopdesk::adapters::auth::JwtSessions;
use shopdesk::adapters::commerce::HttpCommerceApi;
use shopdesk::adapters::http::{app_router, AppState};
use shopdesk::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    // RUST_LOG wins over the configured default.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting shopdesk against {} ({:?})",
        config.api.base_url,
        config.server.environment
    );

    let api = Arc::new(HttpCommerceApi::new(&config.api));
    let sessions = Arc::new(JwtSessions::new(&config.session));
    let state = AppState::new(api, sessions, config.session.clone());

    let app = app_router(state);

    let addr = config.server.socket_addr();
    tracing::info!("Listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
