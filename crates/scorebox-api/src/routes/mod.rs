//! # API Route Modules
//!
//! Route modules for the service surface:
//!
//! - `leaderboard` — the public leaderboard page.
//! - `scores` — the authenticated JSON API the game machine submits to.
//! - `claim` — the kiosk flow: unclaimed list, claim form, claim submit.
//! - `assets` — stylesheets, the rendered form script, robots, favicon.

pub mod assets;
pub mod claim;
pub mod leaderboard;
pub mod scores;
