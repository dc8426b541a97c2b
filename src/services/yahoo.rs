//! Yahoo Finance chart client (volatility, index closes, yields, price changes)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::FetchError;
use crate::services::client::check_status;
use crate::services::market_data::QuoteProvider;

const PROVIDER: &str = "yahoo";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteSeries>,
}

#[derive(Debug, Deserialize)]
struct QuoteSeries {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

pub struct YahooClient {
    base_url: String,
    client: Client,
}

impl YahooClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn chart_url(&self, symbol: &str, range: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url).map_err(FetchError::parse)?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Parse(format!("invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("interval", "1d")
            .append_pair("range", range);
        Ok(url)
    }
}

#[async_trait]
impl QuoteProvider for YahooClient {
    async fn latest_close(&self, symbol: &str) -> Result<f64, FetchError> {
        let closes = self.daily_closes(symbol, "5d").await?;
        closes
            .last()
            .copied()
            .ok_or_else(|| FetchError::Empty(format!("no closes for {}", symbol)))
    }

    async fn daily_closes(&self, symbol: &str, range: &str) -> Result<Vec<f64>, FetchError> {
        let url = self.chart_url(symbol, range)?;
        debug!(symbol = %symbol, range = %range, "Fetching Yahoo chart");

        let response = self.client.get(url).send().await?;
        let response = check_status(PROVIDER, response)?;
        let body: ChartResponse = response.json().await.map_err(FetchError::parse)?;

        if let Some(error) = body.chart.error {
            return Err(FetchError::Parse(format!(
                "Yahoo API error: {} - {}",
                error.code, error.description
            )));
        }

        let series = body
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .and_then(|data| data.indicators.quote.into_iter().next())
            .ok_or_else(|| FetchError::Empty(format!("no quote data for {}", symbol)))?;

        // null closes are non-trading gaps
        let closes: Vec<f64> = series.close.into_iter().flatten().collect();
        if closes.is_empty() {
            return Err(FetchError::Empty(format!("no closes for {}", symbol)));
        }
        Ok(closes)
    }
}
