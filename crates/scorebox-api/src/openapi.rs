//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented JSON surface (the game machine API) into
//! an OpenAPI spec served at `/openapi.json`. The HTML pages are not part
//! of the spec — they are for people, not integrators.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::state::AppState;

/// Adds the bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some(
                            "Game machine token. Set via SCOREBOX_AUTH_TOKEN env var.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Assembled OpenAPI spec for the JSON surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scorebox API — Arcade Leaderboard",
        version = "0.3.2",
        description = "Score submission API for the arcade leaderboard.\n\nThe game machine POSTs each finished run; players claim their runs at the kiosk pages (`/claim/*`), which are plain HTML and outside this spec.\n\nAuthentication: bearer token via `Authorization: Bearer <token>` header.",
        license(name = "AGPL-3.0-or-later")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    paths(
        crate::routes::scores::submit_score,
    ),
    components(
        schemas(
            crate::routes::scores::SubmitScoreRequest,
            crate::routes::scores::SubmitScoreResponse,
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "scores", description = "Score submission from the game machine"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
