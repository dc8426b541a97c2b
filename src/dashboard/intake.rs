//! Indicator intake: one attempt per source, every failure folded into a
//! [`Reading`] so a broken provider never stops the rest of the refresh.

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::indicators::calculate_rsi;
use crate::metrics::Metrics;
use crate::models::{HeadlineSentiment, Reading};
use crate::services::market_data::{HeadlineProvider, QuoteProvider, SearchInterestProvider};

/// Lookback used for the momentum oscillator's close history
pub const MOMENTUM_RANGE: &str = "2mo";

/// Convert a provider result into a reading, logging and counting failures
pub fn settle<T>(
    indicator: &'static str,
    result: Result<T, FetchError>,
    metrics: Option<&Metrics>,
) -> Reading<T> {
    if let Err(ref e) = result {
        match e {
            FetchError::MissingCredential(key) => {
                warn!(indicator, credential = key, "No API key configured, indicator unavailable")
            }
            FetchError::RateLimited { provider } => {
                warn!(indicator, provider, "Provider rate limited, indicator unavailable")
            }
            other => warn!(indicator, error = %other, "Indicator fetch failed"),
        }
        if let Some(metrics) = metrics {
            metrics.record_provider_failure(indicator, e.kind());
        }
    }
    Reading::from(result)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub async fn fetch_volatility(
    quotes: &dyn QuoteProvider,
    symbol: &str,
    metrics: Option<&Metrics>,
) -> Reading<f64> {
    let result = quotes.latest_close(symbol).await.map(round2);
    settle("volatility", result, metrics)
}

pub async fn fetch_momentum(
    quotes: &dyn QuoteProvider,
    symbol: &str,
    period: usize,
    metrics: Option<&Metrics>,
) -> Reading<f64> {
    let result = match quotes.daily_closes(symbol, MOMENTUM_RANGE).await {
        Ok(closes) => calculate_rsi(&closes, period).map(round2).ok_or_else(|| {
            FetchError::Empty(format!(
                "{} closes are not enough for RSI({})",
                closes.len(),
                period
            ))
        }),
        Err(e) => Err(e),
    };
    settle("momentum", result, metrics)
}

pub async fn fetch_search_interest(
    trends: &dyn SearchInterestProvider,
    term: &str,
    metrics: Option<&Metrics>,
) -> Reading<f64> {
    // scores are 0-100 by construction; anything else means the payload changed
    let result = trends.interest(term).await.and_then(|score| {
        if (0.0..=100.0).contains(&score) {
            Ok(score)
        } else {
            Err(FetchError::Parse(format!("interest score {} out of range", score)))
        }
    });
    settle("search_interest", result, metrics)
}

pub async fn fetch_sentiment(
    news: &dyn HeadlineProvider,
    query: &str,
    metrics: Option<&Metrics>,
) -> Reading<HeadlineSentiment> {
    let result = news.headline_sentiment(query).await;
    settle("sentiment", result, metrics)
}

/// Latest close for an optional symbol; unset symbols are reported as not configured
pub async fn fetch_optional_close(
    indicator: &'static str,
    quotes: &dyn QuoteProvider,
    symbol: Option<&str>,
    metrics: Option<&Metrics>,
) -> Reading<f64> {
    match symbol {
        Some(symbol) => {
            let result = quotes.latest_close(symbol).await.map(round2);
            settle(indicator, result, metrics)
        }
        None => {
            debug!(indicator, "No symbol configured, skipping");
            Reading::NotConfigured
        }
    }
}
