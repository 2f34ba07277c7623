//! # scorebox-api entry point
//!
//! Loads configuration from the environment, initializes logging, the
//! database, and the relay client, and serves the application.

use scorebox_api::state::StartupError;
use scorebox_api::{app, AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let port = config.port;

    if config.auth_token.is_none() {
        tracing::warn!("SCOREBOX_AUTH_TOKEN not set — score submission is unauthenticated");
    }

    let state = AppState::with_config(config).await?;
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|source| StartupError::Listener { port, source })?;

    tracing::info!(port, "scorebox listening");

    axum::serve(listener, router)
        .await
        .map_err(|source| StartupError::Listener { port, source })?;

    Ok(())
}
