//! Error types for external data providers.
//!
//! Every provider client returns `Result<T, FetchError>`. The intake layer
//! folds these into [`crate::models::Reading`] so that no failure ever
//! reaches the classifier or the renderer as an error.

use thiserror::Error;

/// Errors that can occur when fetching from an external provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// A required access key is not configured.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// The provider signalled rate limiting (HTTP 429 or an equivalent payload).
    #[error("rate limited by {provider}")]
    RateLimited {
        /// Provider that rejected the request.
        provider: &'static str,
    },

    /// The provider answered with a non-success status.
    #[error("HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The response did not have the expected shape.
    #[error("unexpected response format: {0}")]
    Parse(String),

    /// The response parsed but carried no usable data point.
    #[error("no data: {0}")]
    Empty(String),
}

impl FetchError {
    pub fn parse(err: impl std::fmt::Display) -> Self {
        FetchError::Parse(err.to_string())
    }

    /// Short machine-friendly label, used as a metrics label value.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::MissingCredential(_) => "no_credential",
            FetchError::RateLimited { .. } => "rate_limited",
            FetchError::Status { .. } => "status",
            FetchError::Network(_) => "network",
            FetchError::Timeout => "timeout",
            FetchError::Parse(_) => "parse",
            FetchError::Empty(_) => "empty",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
