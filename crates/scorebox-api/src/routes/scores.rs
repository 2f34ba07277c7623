// SPDX-License-Identifier: AGPL-3.0-or-later
//! # Score Submission API
//!
//! The JSON endpoint the game machine calls when a run ends. Authenticated
//! with the machine token (see `crate::auth`); players never touch this.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/backend/submit_score` | `submit_score` |

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use scorebox_core::UnclaimedScore;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A finished run, as reported by the game machine.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SubmitScoreRequest {
    /// Final score; non-negative.
    pub score: i32,
    /// The player's in-game color as `#RRGGBB`, shown on the claim kiosk so
    /// players can recognize their run.
    pub color: String,
}

/// Receipt for a submitted score.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitScoreResponse {
    /// Claim id for this score; the kiosk claim page lives at `/claim/{id}`.
    pub id: Uuid,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the game machine API router.
pub fn router() -> Router<AppState> {
    Router::new().route("/backend/submit_score", post(submit_score))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /backend/submit_score — Record a finished run as an unclaimed score.
#[utoipa::path(
    post,
    path = "/backend/submit_score",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = SubmitScoreResponse),
        (status = 401, description = "Missing or invalid machine token", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid score or color", body = crate::error::ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "scores"
)]
async fn submit_score(
    State(state): State<AppState>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    scorebox_core::validate_score(req.score)?;
    scorebox_core::validate_color(&req.color)?;

    let score = UnclaimedScore {
        id: Uuid::new_v4(),
        score: req.score,
        color: req.color,
        submitted_at: Utc::now(),
    };

    db::scores::insert_unclaimed(&state.pool, &score).await?;
    tracing::info!(id = %score.id, score = score.score, "score submitted");

    Ok((StatusCode::OK, Json(SubmitScoreResponse { id: score.id })))
}
