//! Shared HTTP plumbing for provider clients

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::error::FetchError;

/// Browser-like agent; Reddit and Yahoo reject blank or library agents.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (MarketSentimentDashboard/1.0; +https://github.com/marketmood/marketmood)";

/// Build the shared client with a bounded per-request timeout
pub fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {}", e)))
}

/// Map rate limiting and non-success statuses onto [`FetchError`]
pub fn check_status(provider: &'static str, response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(FetchError::RateLimited { provider });
    }
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Strip the anti-JSON-hijacking prefix some endpoints put before the payload
pub fn strip_json_prefix(body: &str) -> &str {
    match body.find(|c| c == '{' || c == '[') {
        Some(start) => &body[start..],
        None => body,
    }
}
