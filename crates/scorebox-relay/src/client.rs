//! HTTP client for the registration form endpoint.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::entry::{RegistrationEntry, WireEntry};
use crate::error::RelayError;

/// Configuration for the relay client.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// URL of the registration form page (GET for the token, POST for the
    /// submission — the form posts back to itself).
    pub form_url: String,
    /// Per-request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Create a configuration with the default timeout.
    pub fn new(form_url: impl Into<String>) -> Self {
        Self {
            form_url: form_url.into(),
            timeout_secs: 30,
        }
    }
}

/// Client for the external registration form.
///
/// Wraps a `reqwest::Client` with the form URL and timeout. `Send + Sync`;
/// share it via `Arc` across request handlers.
#[derive(Debug)]
pub struct RelayClient {
    client: reqwest::Client,
    form_url: String,
}

impl RelayClient {
    /// Build a client from configuration.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self {
            client,
            form_url: config.form_url,
        })
    }

    /// The configured form URL.
    pub fn form_url(&self) -> &str {
        &self.form_url
    }

    /// Relay one entry: fetch a fresh submission token, then post the entry
    /// with the upstream's field names.
    pub async fn submit(&self, entry: &RegistrationEntry) -> Result<(), RelayError> {
        let token = self.fetch_form_token().await?;
        tracing::debug!(token_len = token.len(), "fetched registration form token");

        let wire = WireEntry::new(entry, &token);
        let response = self
            .client
            .post(&self.form_url)
            .form(&wire)
            .send()
            .await
            .map_err(|source| RelayError::Submit {
                url: self.form_url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected {
                url: self.form_url.clone(),
                status: status.as_u16(),
            });
        }

        tracing::info!(status = status.as_u16(), "registration entry relayed");
        Ok(())
    }

    /// GET the form page and extract the hidden submission token.
    async fn fetch_form_token(&self) -> Result<String, RelayError> {
        let page = self
            .client
            .get(&self.form_url)
            .send()
            .await
            .map_err(|source| RelayError::TokenFetch {
                url: self.form_url.clone(),
                source,
            })?
            .text()
            .await
            .map_err(|source| RelayError::TokenFetch {
                url: self.form_url.clone(),
                source,
            })?;

        extract_form_token(&page).ok_or_else(|| RelayError::TokenExtract {
            url: self.form_url.clone(),
        })
    }
}

/// Find the hidden `zz_id` input in the form page's markup.
///
/// Tokens are short opaque strings; the length bounds keep the match from
/// swallowing the rest of the attribute list if the markup ever loses its
/// closing quote.
fn extract_form_token(page: &str) -> Option<String> {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    let re = TOKEN_RE.get_or_init(|| {
        Regex::new(r#"<input type="hidden" name="zz_id" value="(.{5,10})">"#)
            .expect("hard-coded token pattern is valid")
    });

    re.captures(page)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Occupation;

    #[test]
    fn token_is_extracted_from_form_markup() {
        let page = r#"
            <form method="post">
              <input type="text" name="persons[0][first_name]">
              <input type="hidden" name="zz_id" value="x9f2k1">
              <input type="submit">
            </form>
        "#;
        assert_eq!(extract_form_token(page), Some("x9f2k1".to_string()));
    }

    #[test]
    fn missing_token_input_yields_none() {
        assert_eq!(extract_form_token("<form></form>"), None);
        assert_eq!(extract_form_token(""), None);
    }

    #[test]
    fn token_outside_the_length_bounds_is_not_matched() {
        let short = r#"<input type="hidden" name="zz_id" value="abcd">"#;
        assert_eq!(extract_form_token(short), None);

        let long = r#"<input type="hidden" name="zz_id" value="abcdefghijklmnop">"#;
        assert_eq!(extract_form_token(long), None);
    }

    #[test]
    fn client_builds_from_config() {
        let client = RelayClient::new(RelayConfig::new("https://example.com/register/")).unwrap();
        assert_eq!(client.form_url(), "https://example.com/register/");
    }

    #[tokio::test]
    #[ignore = "makes requests to the live registration endpoint"]
    async fn live_token_fetch_works() {
        let url = std::env::var("SCOREBOX_RELAY_URL").expect("set SCOREBOX_RELAY_URL to run");
        let client = RelayClient::new(RelayConfig::new(url)).unwrap();
        assert!(client.fetch_form_token().await.is_ok());
    }

    #[tokio::test]
    #[ignore = "submits a real entry to the live registration endpoint"]
    async fn live_submission_works() {
        let url = std::env::var("SCOREBOX_RELAY_URL").expect("set SCOREBOX_RELAY_URL to run");
        let client = RelayClient::new(RelayConfig::new(url)).unwrap();
        let entry = RegistrationEntry::from_claim(
            "Testy McTestface",
            "testy@example.com",
            Occupation::School,
            false,
        );
        assert!(client.submit(&entry).await.is_ok());
    }
}
