// SPDX-License-Identifier: AGPL-3.0-or-later
//! Score persistence operations.
//!
//! Save/load functions for unclaimed and claimed scores. Claiming is a
//! delete-returning so a score can be consumed exactly once even with
//! concurrent claimers.

use chrono::{DateTime, Utc};
use scorebox_core::{ScoreRow, UnclaimedScore};
use sqlx::{Executor, Sqlite, SqlitePool};
use uuid::Uuid;

/// Save a freshly submitted, unclaimed score.
pub async fn insert_unclaimed(
    pool: &SqlitePool,
    score: &UnclaimedScore,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO unclaimed_scores (id, score, color, submitted_at) VALUES (?, ?, ?, ?)",
    )
    .bind(score.id)
    .bind(score.score)
    .bind(&score.color)
    .bind(score.submitted_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// All unclaimed scores, oldest first (kiosk list order).
pub async fn list_unclaimed(pool: &SqlitePool) -> Result<Vec<UnclaimedScore>, sqlx::Error> {
    let rows = sqlx::query_as::<_, UnclaimedScoreRow>(
        "SELECT id, score, color, submitted_at FROM unclaimed_scores ORDER BY submitted_at",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(UnclaimedScoreRow::into_score).collect())
}

/// Look up one unclaimed score.
pub async fn get_unclaimed(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<UnclaimedScore>, sqlx::Error> {
    let row = sqlx::query_as::<_, UnclaimedScoreRow>(
        "SELECT id, score, color, submitted_at FROM unclaimed_scores WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(UnclaimedScoreRow::into_score))
}

/// Consume an unclaimed score: delete it and return it in one statement.
///
/// Returns `None` when the id is unknown or the score was already claimed.
/// Run inside the claim transaction.
pub async fn take_unclaimed(
    executor: impl Executor<'_, Database = Sqlite>,
    id: Uuid,
) -> Result<Option<UnclaimedScore>, sqlx::Error> {
    let row = sqlx::query_as::<_, UnclaimedScoreRow>(
        "DELETE FROM unclaimed_scores WHERE id = ? RETURNING id, score, color, submitted_at",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(UnclaimedScoreRow::into_score))
}

/// Add a claimed score to the leaderboard. The nickname must already be
/// sanitized (see `scorebox_core::sanitize_nickname`).
pub async fn insert_score(
    executor: impl Executor<'_, Database = Sqlite>,
    nickname: &str,
    score: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO scores (nickname, score) VALUES (?, ?)")
        .bind(nickname)
        .bind(score)
        .execute(executor)
        .await?;

    Ok(())
}

/// All claimed scores. Ties keep insertion order, so placement ranking is
/// deterministic.
pub async fn list_scores(pool: &SqlitePool) -> Result<Vec<ScoreRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ClaimedScoreRow>(
        "SELECT nickname, score FROM scores ORDER BY score DESC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| ScoreRow {
            nickname: r.nickname,
            score: r.score,
        })
        .collect())
}

/// Claimed and unclaimed score counts, for the metrics scrape.
pub async fn counts(pool: &SqlitePool) -> Result<(i64, i64), sqlx::Error> {
    let claimed: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scores")
        .fetch_one(pool)
        .await?;
    let unclaimed: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM unclaimed_scores")
        .fetch_one(pool)
        .await?;
    Ok((claimed, unclaimed))
}

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

#[derive(sqlx::FromRow)]
struct UnclaimedScoreRow {
    id: Uuid,
    score: i32,
    color: String,
    submitted_at: DateTime<Utc>,
}

impl UnclaimedScoreRow {
    fn into_score(self) -> UnclaimedScore {
        UnclaimedScore {
            id: self.id,
            score: self.score,
            color: self.color,
            submitted_at: self.submitted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ClaimedScoreRow {
    nickname: String,
    score: i32,
}
