//! # Application State & Configuration
//!
//! Everything a request handler can reach: the typed environment
//! configuration, the database pool, the optional raffle relay client, and
//! the claim form's requirement bindings.

use std::sync::Arc;

use scorebox_form::RequirementBindings;
use scorebox_relay::{RelayClient, RelayConfig, RelayError};
use sqlx::SqlitePool;

use crate::auth::SecretString;
use crate::db;

/// Typed service configuration, loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port (`SCOREBOX_PORT`, default 3000).
    pub port: u16,
    /// Token the game machine authenticates with (`SCOREBOX_AUTH_TOKEN`).
    /// When unset, the score submission API is open — acceptable for local
    /// development only, and warned about at startup.
    pub auth_token: Option<SecretString>,
    /// SQLite database URL (`SCOREBOX_DATABASE_URL`, default in-memory).
    pub database_url: String,
    /// Registration form URL for the raffle relay (`SCOREBOX_RELAY_URL`).
    /// When unset, raffle submissions are refused with 503.
    pub relay_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            auth_token: None,
            database_url: "sqlite::memory:".to_string(),
            relay_url: None,
        }
    }
}

impl AppConfig {
    /// Load the configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("SCOREBOX_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let auth_token = std::env::var("SCOREBOX_AUTH_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .map(SecretString::new);

        let database_url =
            std::env::var("SCOREBOX_DATABASE_URL").unwrap_or(defaults.database_url);

        let relay_url = std::env::var("SCOREBOX_RELAY_URL")
            .ok()
            .filter(|u| !u.is_empty());

        Self {
            port,
            auth_token,
            database_url,
            relay_url,
        }
    }
}

/// Errors that prevent the service from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database setup failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("relay client setup failed: {0}")]
    Relay(#[from] RelayError),
    #[error("could not serve on port {port}: {source}")]
    Listener {
        port: u16,
        source: std::io::Error,
    },
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// SQLite pool; for in-memory URLs it is pinned to a single connection
    /// (see [`db::init_pool`]).
    pub pool: SqlitePool,
    /// Raffle relay client, present only when a relay URL is configured.
    pub relay: Option<Arc<RelayClient>>,
    /// Conditional-requirement bindings for the claim form. Drives both the
    /// rendered client script and the server-side requirement checks.
    pub bindings: RequirementBindings,
}

impl AppState {
    /// Build state from the default configuration (in-memory database, no
    /// auth, no relay). Used by tests and local development.
    pub async fn new() -> Result<Self, StartupError> {
        Self::with_config(AppConfig::default()).await
    }

    /// Build state from an explicit configuration: initialize the database
    /// pool and, when configured, the relay client.
    pub async fn with_config(config: AppConfig) -> Result<Self, StartupError> {
        let pool = db::init_pool(&config.database_url).await?;

        let relay = match &config.relay_url {
            Some(url) => Some(Arc::new(RelayClient::new(RelayConfig::new(url.clone()))?)),
            None => {
                tracing::warn!(
                    "SCOREBOX_RELAY_URL not set — raffle submissions will be refused"
                );
                None
            }
        };

        Ok(Self {
            config: Arc::new(config),
            pool,
            relay,
            bindings: RequirementBindings::claim_form(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_local_and_open() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3000);
        assert!(config.auth_token.is_none());
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.relay_url.is_none());
    }

    #[tokio::test]
    async fn state_builds_without_relay() {
        let state = AppState::new().await.unwrap();
        assert!(state.relay.is_none());
        assert!(state.bindings.has_trigger("wants-leaderboard"));
        assert!(state.bindings.has_trigger("wants-hpi"));
    }

    #[tokio::test]
    async fn state_builds_with_relay_url() {
        let config = AppConfig {
            relay_url: Some("https://example.com/register/".to_string()),
            ..AppConfig::default()
        };
        let state = AppState::with_config(config).await.unwrap();
        assert!(state.relay.is_some());
    }
}
