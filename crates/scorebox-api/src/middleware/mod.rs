//! # Middleware
//!
//! Tower/Axum middleware for the service:
//!
//! - `metrics` — Prometheus request metrics and domain gauges.
//!
//! Authentication middleware lives in `crate::auth`.

pub mod metrics;
