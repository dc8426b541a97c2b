//! Remote ticker list source (CSV or one-symbol-per-line)

use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::FetchError;
use crate::services::client::check_status;
use crate::services::market_data::TickerSource;

const PROVIDER: &str = "ticker_list";

pub struct HttpTickerListSource {
    url: String,
    client: Client,
}

impl HttpTickerListSource {
    pub fn new(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

/// Symbols from the first column of each line; header and blank lines drop out
pub fn parse_ticker_list(body: &str) -> HashSet<String> {
    body.lines()
        .filter_map(|line| line.split(',').next())
        .map(|field| field.trim().trim_matches('"'))
        .filter(|symbol| is_symbol(symbol))
        .map(String::from)
        .collect()
}

fn is_symbol(candidate: &str) -> bool {
    (1..=6).contains(&candidate.len())
        && candidate
            .chars()
            .all(|c| c.is_ascii_uppercase() || c == '.' || c == '-')
        && candidate.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

#[async_trait]
impl TickerSource for HttpTickerListSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn load(&self) -> Result<HashSet<String>, FetchError> {
        let response = self.client.get(&self.url).send().await?;
        let response = check_status(PROVIDER, response)?;
        let body = response.text().await?;

        let symbols = parse_ticker_list(&body);
        if symbols.is_empty() {
            return Err(FetchError::Empty(format!("no symbols in {}", self.url)));
        }
        Ok(symbols)
    }
}
