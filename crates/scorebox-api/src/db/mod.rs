//! # Database Persistence Layer
//!
//! SQLite persistence via SQLx. Two tables:
//!
//! - `unclaimed_scores` — submitted by the game machine, waiting for a
//!   player to claim them at the kiosk.
//! - `scores` — claimed leaderboard entries (sanitized nickname + score).
//!
//! The database URL is configuration. The default is in-memory, which fits
//! the deployment (the leaderboard lives and dies with the event); a file
//! URL makes state survive restarts.
//!
//! In-memory SQLite has a sharp edge with pooling: every new connection
//! opens its own empty database. Pools over a memory URL are therefore
//! pinned to a single connection that is never recycled.

pub mod scores;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Initialize the connection pool and create the schema.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };

    let pool = pool_options.connect_with(options).await?;
    migrate(&pool).await?;

    tracing::info!(in_memory, "database ready");
    Ok(pool)
}

/// Create the schema if it does not exist yet.
async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS unclaimed_scores (
            id BLOB PRIMARY KEY,
            score INTEGER NOT NULL,
            color TEXT NOT NULL,
            submitted_at TEXT NOT NULL
        );",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS scores (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nickname TEXT NOT NULL,
            score INTEGER NOT NULL
        );",
    )
    .execute(pool)
    .await?;

    Ok(())
}
