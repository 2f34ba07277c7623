//! Leaderboard placement ranking.

use serde::{Deserialize, Serialize};

use crate::score::ScoreRow;

/// One leaderboard line: a claimed score with its computed placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRow {
    pub nickname: String,
    pub score: i32,
    pub placement: u32,
}

/// Rank claimed scores for display.
///
/// Scores are ordered descending; equal scores share a placement, and the
/// next distinct score takes the placement its list position would have
/// (1, 2, 2, 4). The sort is stable, so entries with equal scores keep
/// their relative order.
pub fn rank(mut scores: Vec<ScoreRow>) -> Vec<PlacementRow> {
    scores.sort_by(|a, b| b.score.cmp(&a.score));

    let mut rows = Vec::with_capacity(scores.len());
    let mut last_score: Option<i32> = None;
    let mut last_placement = 1u32;

    for (i, row) in scores.into_iter().enumerate() {
        if last_score != Some(row.score) {
            last_score = Some(row.score);
            last_placement = i as u32 + 1;
        }
        rows.push(PlacementRow {
            nickname: row.nickname,
            score: row.score,
            placement: last_placement,
        });
    }

    rows
}
