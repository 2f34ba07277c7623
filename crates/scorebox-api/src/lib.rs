//! # scorebox-api — Arcade Leaderboard Service
//!
//! The HTTP service for an event arcade game. A run ends on the game
//! machine, the machine submits the score, the player claims it at the
//! kiosk, and the leaderboard shows the result:
//!
//! | Prefix | Module | Audience |
//! |--------|--------|----------|
//! | `/` | [`routes::leaderboard`] | everyone (big screen) |
//! | `/backend/*` | [`routes::scores`] | game machine (bearer token) |
//! | `/claim/*` | [`routes::claim`] | players at the kiosk |
//! | `/assets/*`, `/robots.txt` | [`routes::assets`] | browsers |
//! | `/health/*`, `/metrics` | this module | operators |
//! | `/openapi.json` | [`openapi`] | integrators |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler        (public routes)
//! TraceLayer → MetricsMiddleware → AuthMiddleware → Handler   (/backend/*)
//! ```
//!
//! Health probes and `/metrics` are mounted outside the middleware stack so
//! they stay reachable when everything else misbehaves.

pub mod auth;
pub mod db;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod templating;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;
use crate::middleware::metrics::ApiMetrics;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Check if metrics are enabled via the `SCOREBOX_METRICS_ENABLED` env var.
/// Defaults to `true` when the variable is absent or set to anything other
/// than `"false"`.
fn metrics_enabled() -> bool {
    std::env::var("SCOREBOX_METRICS_ENABLED")
        .map(|v| v.to_lowercase() != "false")
        .unwrap_or(true)
}

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        token: state.config.auth_token.clone(),
    };
    let metrics = ApiMetrics::new();
    let metrics_on = metrics_enabled();

    // Game machine API, bearer token required when configured.
    let game_api = Router::new()
        .merge(routes::scores::router())
        .merge(openapi::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(Extension(auth_config));

    // Kiosk and spectator pages, no auth.
    let public = Router::new()
        .merge(routes::leaderboard::router())
        .merge(routes::claim::router())
        .merge(routes::assets::router());

    let mut app_router = Router::new().merge(public).merge(game_api);

    // Only register the metrics middleware when metrics are enabled.
    if metrics_on {
        app_router = app_router
            .layer(from_fn(middleware::metrics::metrics_middleware))
            .layer(Extension(metrics.clone()));
    }

    let app_router = app_router
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    // Unauthenticated operational routes.
    let mut operational = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    if metrics_on {
        operational = operational
            .route("/metrics", axum::routing::get(prometheus_metrics))
            .layer(Extension(metrics));
    }

    let operational = operational.with_state(state);

    Router::new().merge(operational).merge(app_router)
}

/// GET /metrics — Prometheus metrics scrape endpoint.
///
/// Updates the domain gauges from the database on each scrape (pull model),
/// then gathers and encodes all metrics in text exposition format.
async fn prometheus_metrics(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
) -> impl IntoResponse {
    match db::scores::counts(&state.pool).await {
        Ok((claimed, unclaimed)) => {
            metrics.scores_total().set(claimed as f64);
            metrics.unclaimed_scores_total().set(unclaimed as f64);
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not refresh domain gauges for scrape");
        }
    }

    match metrics.gather_and_encode() {
        Ok(body) => (
            StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to encode Prometheus metrics: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e).into_response()
        }
    }
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the service can serve traffic.
///
/// Checks that the database answers a trivial query. Returns 200 "ready" or
/// 503 with a diagnostic message.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.pool).await {
        tracing::warn!("database health check failed: {e}");
        return (StatusCode::SERVICE_UNAVAILABLE, "database unreachable").into_response();
    }

    (StatusCode::OK, "ready").into_response()
}
