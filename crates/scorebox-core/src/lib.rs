// SPDX-License-Identifier: AGPL-3.0-or-later
//! # scorebox-core — Leaderboard Domain Rules
//!
//! Shared domain types and rules for the arcade leaderboard service:
//!
//! - Score and color validation for game-machine submissions.
//! - Nickname sanitization (the storage-time XSS boundary, since the
//!   leaderboard page renders stored nicknames without further escaping).
//! - Placement ranking with shared placements for equal scores.
//!
//! ## Crate Policy
//!
//! No I/O, no async, no framework types. Everything here is a pure function
//! or a plain value so it can be exercised without a server or a database.

pub mod placement;
pub mod sanitize;
pub mod score;

pub use placement::{rank, PlacementRow};
pub use sanitize::sanitize_nickname;
pub use score::{validate_color, validate_score, ScoreRow, UnclaimedScore, ValidationError};
