//! # Leaderboard Page
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/` | `leaderboard` |

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::db;
use crate::error::AppError;
use crate::state::AppState;
use crate::templating::LeaderboardTemplate;

/// Build the leaderboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(leaderboard))
}

/// GET / — Render the public leaderboard.
async fn leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let scores = db::scores::list_scores(&state.pool).await?;
    let rows = scorebox_core::rank(scores);

    let page = LeaderboardTemplate { rows }.render()?;
    Ok(Html(page))
}
