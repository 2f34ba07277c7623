//! Relay error types.

/// Errors from talking to the external registration form.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    /// Fetching the form page failed (network, timeout, or a 5xx page).
    #[error("failed to fetch the registration form from {url}: {source}")]
    TokenFetch {
        url: String,
        source: reqwest::Error,
    },
    /// The form page loaded but carried no submission token.
    #[error("no submission token found in the registration form at {url}; did the page layout change?")]
    TokenExtract { url: String },
    /// Posting the entry failed in transit.
    #[error("failed to submit the registration entry to {url}: {source}")]
    Submit {
        url: String,
        source: reqwest::Error,
    },
    /// The form endpoint answered with a non-success status.
    #[error("registration form at {url} returned HTTP {status}")]
    Rejected { url: String, status: u16 },
}
