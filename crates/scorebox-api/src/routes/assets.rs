//! # Static Assets
//!
//! Stylesheets, robots.txt, and the favicon are compiled into the binary;
//! the form script is rendered per request from the binding configuration
//! so the page and the server can never disagree about which fields a
//! checkbox governs.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/assets/style.css` | `style` |
//! | `GET` | `/assets/form.css` | `form_style` |
//! | `GET` | `/assets/script.js` | `script` |
//! | `GET` | `/robots.txt` | `robots` |
//! | `GET` | `/favicon.ico` | `favicon` |

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the static asset router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets/style.css", get(style))
        .route("/assets/form.css", get(form_style))
        .route("/assets/script.js", get(script))
        .route("/robots.txt", get(robots))
        .route("/favicon.ico", get(favicon))
}

async fn style() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../assets/style.css"),
    )
}

async fn form_style() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../assets/form.css"),
    )
}

/// GET /assets/script.js — The claim form's requirement script, rendered
/// from the same bindings the server validates with.
async fn script(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript")],
        scorebox_form::client_script(&state.bindings),
    )
}

async fn robots() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        include_str!("../../assets/robots.txt"),
    )
}

async fn favicon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/x-icon")], "")
}
