//! # HTML Templates
//!
//! Askama template definitions for the three pages the service renders.
//! Templates live in `templates/`.
//!
//! The leaderboard template disables escaping: nicknames are sanitized once
//! at claim time (`scorebox_core::sanitize_nickname`) and stored
//! display-ready, so escaping again here would show entity codes instead of
//! the characters the player typed. The claim templates render only
//! service-generated values and use the default escaper.

use askama::Template;
use scorebox_core::{PlacementRow, UnclaimedScore};
use uuid::Uuid;

/// The public leaderboard (served at `/`).
#[derive(Template)]
#[template(path = "leaderboard.html", escape = "none")]
pub struct LeaderboardTemplate {
    pub rows: Vec<PlacementRow>,
}

/// The kiosk list of scores waiting to be claimed (`/claim/list`).
#[derive(Template)]
#[template(path = "claim_list.html")]
pub struct ClaimListTemplate {
    pub scores: Vec<UnclaimedScore>,
}

/// The claim form for one unclaimed score (`/claim/:id`).
///
/// `error_message` is set when a submission came back for corrections
/// (missing mandatory fields); the form is re-rendered with the message
/// above it.
#[derive(Template)]
#[template(path = "claim_form.html")]
pub struct ClaimFormTemplate {
    pub id: Uuid,
    pub score: i32,
    pub color: String,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_renders_rows_unescaped() {
        let page = LeaderboardTemplate {
            rows: vec![PlacementRow {
                nickname: "&lt;sanitized&gt;".to_string(),
                score: 100,
                placement: 1,
            }],
        }
        .render()
        .unwrap();

        // Stored entities pass through verbatim.
        assert!(page.contains("&lt;sanitized&gt;"));
        assert!(!page.contains("&amp;lt;"));
        assert!(page.contains("100"));
    }

    #[test]
    fn empty_leaderboard_renders_placeholder() {
        let page = LeaderboardTemplate { rows: Vec::new() }.render().unwrap();
        assert!(page.contains("No scores yet"));
    }

    #[test]
    fn claim_list_renders_scores_and_colors() {
        let page = ClaimListTemplate {
            scores: vec![UnclaimedScore {
                id: Uuid::nil(),
                score: 1337,
                color: "#123456".to_string(),
                submitted_at: chrono::Utc::now(),
            }],
        }
        .render()
        .unwrap();

        assert!(page.contains("1337"));
        assert!(page.contains("#123456"));
        assert!(page.contains(&Uuid::nil().to_string()));
    }

    #[test]
    fn empty_claim_list_renders_placeholder() {
        let page = ClaimListTemplate { scores: Vec::new() }.render().unwrap();
        assert!(page.contains("There are no unclaimed scores right now"));
    }

    #[test]
    fn claim_form_carries_the_binding_contract_identifiers() {
        let page = ClaimFormTemplate {
            id: Uuid::nil(),
            score: 42,
            color: "#abcdef".to_string(),
            error_message: None,
        }
        .render()
        .unwrap();

        for id in [
            "wants-leaderboard",
            "wants-hpi",
            "nickname",
            "email-hpi",
            "name-hpi",
        ] {
            assert!(page.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
        assert!(page.contains("/assets/script.js"));
    }

    #[test]
    fn claim_form_shows_the_error_message_when_present() {
        let page = ClaimFormTemplate {
            id: Uuid::nil(),
            score: 42,
            color: "#abcdef".to_string(),
            error_message: Some("please enter a nickname".to_string()),
        }
        .render()
        .unwrap();

        assert!(page.contains("please enter a nickname"));
    }
}
