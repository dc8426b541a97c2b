//! Provider interfaces for every external data source the dashboard reads.
//!
//! Each trait is a single-attempt read; implementations map transport,
//! status and payload problems onto [`FetchError`] and never retry.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{HeadlineSentiment, Post};

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Most recent daily close for `symbol`
    async fn latest_close(&self, symbol: &str) -> Result<f64, FetchError>;

    /// Daily closes over `range` (e.g. "2mo"), oldest first
    async fn daily_closes(&self, symbol: &str, range: &str) -> Result<Vec<f64>, FetchError>;

    /// Percentage change between the two most recent daily closes
    async fn percent_change(&self, symbol: &str) -> Result<f64, FetchError> {
        let closes = self.daily_closes(symbol, "5d").await?;
        match closes.as_slice() {
            [.., previous, last] if *previous != 0.0 => Ok((last - previous) / previous * 100.0),
            _ => Err(FetchError::Empty(format!("fewer than two closes for {}", symbol))),
        }
    }
}

#[async_trait]
pub trait SearchInterestProvider: Send + Sync {
    /// Latest 0-100 interest score for `term`
    async fn interest(&self, term: &str) -> Result<f64, FetchError>;
}

#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    /// Scored polarity of recent headlines matching `query`
    async fn headline_sentiment(&self, query: &str) -> Result<HeadlineSentiment, FetchError>;
}

#[async_trait]
pub trait SocialFeedProvider: Send + Sync {
    /// Current "hot" posts of the configured community
    async fn hot_posts(&self) -> Result<Vec<Post>, FetchError>;
}

#[async_trait]
pub trait TickerSource: Send + Sync {
    fn name(&self) -> &str;

    async fn load(&self) -> Result<HashSet<String>, FetchError>;
}

/// Fixed in-memory symbol list
pub struct StaticTickerSource {
    name: String,
    symbols: HashSet<String>,
}

impl StaticTickerSource {
    pub fn new<I, S>(name: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl TickerSource for StaticTickerSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<HashSet<String>, FetchError> {
        Ok(self.symbols.clone())
    }
}
