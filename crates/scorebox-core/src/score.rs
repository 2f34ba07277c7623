//! Score records and submission validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation failures for game-machine submissions.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Scores are non-negative; the game never reports a negative result.
    #[error("score must not be negative (got {0})")]
    NegativeScore(i32),
    /// The player color must be `#` followed by six hex digits.
    #[error("color must be '#' followed by six hex digits (got {0:?})")]
    MalformedColor(String),
}

/// A score submitted by the game machine but not yet claimed by a player.
///
/// The color is the player's in-game color; the kiosk list shows it so a
/// player can recognize their run among the unclaimed entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnclaimedScore {
    pub id: Uuid,
    pub score: i32,
    pub color: String,
    pub submitted_at: DateTime<Utc>,
}

/// A claimed score on the public leaderboard.
///
/// The nickname is stored already sanitized (see
/// [`sanitize_nickname`](crate::sanitize_nickname)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub nickname: String,
    pub score: i32,
}

/// Validate a submitted score value.
pub fn validate_score(score: i32) -> Result<(), ValidationError> {
    if score < 0 {
        return Err(ValidationError::NegativeScore(score));
    }
    Ok(())
}

/// Validate a submitted player color (`#RRGGBB`).
pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    let malformed = || ValidationError::MalformedColor(color.to_string());

    let Some(digits) = color.strip_prefix('#') else {
        return Err(malformed());
    };
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    Ok(())
}
