// SPDX-License-Identifier: AGPL-3.0-or-later
//! # Claim Kiosk Flow
//!
//! Players claim a submitted score at the kiosk: pick the run from the
//! unclaimed list, then decide what to do with it — publish it on the
//! leaderboard under a nickname, enter the raffle, both, or neither (which
//! just retires the score).
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/claim/list` | `claim_list` |
//! | `GET` | `/claim/:id` | `claim_form` |
//! | `POST` | `/claim/:id` | `claim_submit` |
//!
//! The claim form's conditional requirements are enforced twice from one
//! configuration (`AppState::bindings`): the rendered client script toggles
//! the `required` attributes in the browser, and `claim_submit` re-checks
//! the same rule here, since nothing obliges a client to run the script.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use scorebox_relay::{Occupation, RegistrationEntry};
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::state::AppState;
use crate::templating::{ClaimFormTemplate, ClaimListTemplate};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// The claim form's submitted fields. Checkboxes arrive as `"true"` when
/// ticked and are absent otherwise; text fields default to empty so a
/// partially filled form still deserializes and gets a proper validation
/// answer instead of a 422 from the extractor.
#[derive(Debug, Deserialize)]
pub struct ClaimSubmission {
    #[serde(default)]
    wants_leaderboard: Option<bool>,
    #[serde(default)]
    wants_raffle: Option<bool>,

    // leaderboard
    #[serde(default)]
    nickname: String,

    // raffle
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    occupation: String,
    #[serde(default)]
    newsletter: Option<bool>,
    #[serde(default)]
    data_protection: Option<bool>,
}

impl ClaimSubmission {
    fn wants_leaderboard(&self) -> bool {
        self.wants_leaderboard.unwrap_or(false)
    }

    fn wants_raffle(&self) -> bool {
        self.wants_raffle.unwrap_or(false)
    }

    /// The submitted value behind a binding target identifier.
    fn field_value(&self, id: &str) -> Option<&str> {
        match id {
            "nickname" => Some(&self.nickname),
            "email-hpi" => Some(&self.email),
            "name-hpi" => Some(&self.name),
            _ => None,
        }
    }

    /// The submitted checked state behind a binding trigger identifier.
    fn trigger_checked(&self, id: &str) -> bool {
        match id {
            "wants-leaderboard" => self.wants_leaderboard(),
            "wants-hpi" => self.wants_raffle(),
            _ => false,
        }
    }
}

/// Human labels for the requirement-failure message.
fn field_label(id: &str) -> &str {
    match id {
        "nickname" => "a nickname",
        "email-hpi" => "an e-mail address",
        "name-hpi" => "your name",
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the claim kiosk router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/claim/list", get(claim_list))
        .route("/claim/:id", get(claim_form).post(claim_submit))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /claim/list — Render the unclaimed scores list.
async fn claim_list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let scores = db::scores::list_unclaimed(&state.pool).await?;
    let page = ClaimListTemplate { scores }.render()?;
    Ok(Html(page))
}

/// GET /claim/:id — Render the claim form for one unclaimed score.
async fn claim_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_claim_id(&id)?;

    let score = db::scores::get_unclaimed(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no unclaimed score {id}")))?;

    let page = ClaimFormTemplate {
        id,
        score: score.score,
        color: score.color,
        error_message: None,
    }
    .render()?;
    Ok(Html(page))
}

/// POST /claim/:id — Consume an unclaimed score.
///
/// Requirement checks run first, against the binding configuration; a
/// failed check re-renders the form with a message instead of dropping the
/// player's input on the floor. The claim itself is one transaction: the
/// score is deleted and (when wanted) published in a single commit, so a
/// score can never be claimed twice and a failed raffle relay leaves it
/// claimable.
async fn claim_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(claim): Form<ClaimSubmission>,
) -> Result<Response, AppError> {
    let id = parse_claim_id(&id)?;

    // Server-side projection of the form's conditional requirements.
    let missing: Vec<&str> = state
        .bindings
        .required_targets(|trigger| claim.trigger_checked(trigger))
        .into_iter()
        .filter(|field| {
            claim
                .field_value(field)
                .map_or(true, |value| value.trim().is_empty())
        })
        .collect();

    let mut problems: Vec<String> = missing
        .iter()
        .map(|field| field_label(field).to_string())
        .collect();

    // Consent is only meaningful (and only demanded) for raffle entries.
    if claim.wants_raffle() && claim.data_protection != Some(true) {
        problems.push("your consent to data processing".to_string());
    }

    if !problems.is_empty() {
        let score = db::scores::get_unclaimed(&state.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no unclaimed score {id}")))?;

        let message = format!("Still needed: {}.", problems.join(", "));
        tracing::debug!(%id, ?missing, "claim submission incomplete");

        let page = ClaimFormTemplate {
            id,
            score: score.score,
            color: score.color,
            error_message: Some(message),
        }
        .render()?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
    }

    // Raffle entries need the relay; refuse before consuming the score.
    if claim.wants_raffle() && state.relay.is_none() {
        return Err(AppError::ServiceUnavailable(
            "the raffle is not available right now".to_string(),
        ));
    }

    let mut tx = state.pool.begin().await?;

    let score = db::scores::take_unclaimed(&mut *tx, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no unclaimed score {id}")))?;

    if claim.wants_leaderboard() {
        let nickname = scorebox_core::sanitize_nickname(claim.nickname.trim_end());
        db::scores::insert_score(&mut *tx, &nickname, score.score).await?;
        tracing::info!(%id, score = score.score, "score claimed for the leaderboard");
    }

    if claim.wants_raffle() {
        let relay = state.relay.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable("the raffle is not available right now".to_string())
        })?;

        let entry = RegistrationEntry::from_claim(
            &claim.name,
            claim.email.trim(),
            Occupation::from_form_value(&claim.occupation),
            claim.newsletter.unwrap_or(false),
        );
        relay.submit(&entry).await?;
        tracing::info!(%id, "raffle entry relayed");
    }

    tx.commit().await?;

    Ok(Redirect::to("/claim/list").into_response())
}

/// Parse a claim id path segment.
fn parse_claim_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::from_str(raw).map_err(|_| AppError::Validation(format!("malformed claim id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(leaderboard: bool, raffle: bool) -> ClaimSubmission {
        ClaimSubmission {
            wants_leaderboard: leaderboard.then_some(true),
            wants_raffle: raffle.then_some(true),
            nickname: String::new(),
            email: String::new(),
            name: String::new(),
            occupation: String::new(),
            newsletter: None,
            data_protection: None,
        }
    }

    #[test]
    fn trigger_mapping_covers_both_checkboxes() {
        let claim = submission(true, false);
        assert!(claim.trigger_checked("wants-leaderboard"));
        assert!(!claim.trigger_checked("wants-hpi"));
        assert!(!claim.trigger_checked("wants-anything-else"));
    }

    #[test]
    fn field_mapping_covers_the_contract_targets() {
        let claim = ClaimSubmission {
            nickname: "nick".to_string(),
            email: "e@example.com".to_string(),
            name: "Ada Lovelace".to_string(),
            ..submission(false, false)
        };
        assert_eq!(claim.field_value("nickname"), Some("nick"));
        assert_eq!(claim.field_value("email-hpi"), Some("e@example.com"));
        assert_eq!(claim.field_value("name-hpi"), Some("Ada Lovelace"));
        assert_eq!(claim.field_value("favorite-color"), None);
    }

    #[test]
    fn claim_ids_parse_or_fail_as_validation() {
        assert!(parse_claim_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(matches!(
            parse_claim_id("not-a-uuid"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn checkboxes_default_to_unchecked() {
        let claim: ClaimSubmission = serde_urlencoded::from_str("nickname=x").unwrap();
        assert!(!claim.wants_leaderboard());
        assert!(!claim.wants_raffle());
        assert_eq!(claim.nickname, "x");
    }

    #[test]
    fn ticked_checkboxes_parse_true() {
        let claim: ClaimSubmission =
            serde_urlencoded::from_str("wants_leaderboard=true&wants_raffle=true").unwrap();
        assert!(claim.wants_leaderboard());
        assert!(claim.wants_raffle());
    }
}
