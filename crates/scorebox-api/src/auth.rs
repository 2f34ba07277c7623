//! # Game Machine Authentication
//!
//! The score submission API is only for the game machine; it authenticates
//! with a bearer token. Token comparison is constant-time so response
//! timing does not leak how much of a guessed token matched.

use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use subtle::ConstantTimeEq;

use crate::error::AppError;

/// A token that redacts itself in Debug output, so it never lands in logs
/// via a derived `Debug` somewhere up the stack.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The secret itself. Only the comparison below should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString(***)")
    }
}

/// Auth configuration injected as a request extension.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Expected token; `None` disables authentication.
    pub token: Option<SecretString>,
}

/// Middleware guarding the game machine API.
///
/// Expects `Authorization: Bearer <token>`. With no token configured the
/// middleware passes everything through (development mode; warned about at
/// startup).
pub async fn auth_middleware(
    Extension(config): Extension<AuthConfig>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = &config.token else {
        return next.run(request).await;
    };

    let Some(header) = request.headers().get(AUTHORIZATION) else {
        return AppError::Unauthorized("no authorization token provided".to_string())
            .into_response();
    };

    let provided = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default();

    if !token_matches(provided, expected.expose()) {
        return AppError::Unauthorized("invalid authorization token".to_string()).into_response();
    }

    next.run(request).await
}

/// Constant-time token comparison.
fn token_matches(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_tokens_compare_equal() {
        assert!(token_matches("asdf", "asdf"));
    }

    #[test]
    fn differing_tokens_compare_unequal() {
        assert!(!token_matches("asdf", "asdg"));
        assert!(!token_matches("asdf", "asdf1"));
        assert!(!token_matches("", "asdf"));
        assert!(!token_matches("asdf", ""));
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let secret = SecretString::new("super-secret-token");
        let debug = format!("{secret:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("***"));
    }
}
