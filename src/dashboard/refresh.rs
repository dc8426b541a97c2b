//! One full dashboard refresh: indicators, signals, mention radar.
//!
//! Everything runs sequentially and every sub-fetch fails independently.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::dashboard::intake;
use crate::error::FetchError;
use crate::mentions::{default_exclusions, MentionExtractor, RefreshPolicy, TickerRegistry};
use crate::metrics::Metrics;
use crate::models::{
    IndicatorSnapshot, MentionRadar, Post, RadarStatus, SignalOutcome, TickerMention,
};
use crate::services::client::build_client;
use crate::services::market_data::{
    HeadlineProvider, QuoteProvider, SearchInterestProvider, SocialFeedProvider, TickerSource,
};
use crate::services::{HttpTickerListSource, NewsClient, RedditClient, TrendsClient, YahooClient};
use crate::signals::SignalClassifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub indicators: IndicatorSnapshot,
    pub signals: Vec<SignalOutcome>,
    pub radar: MentionRadar,
    pub refreshed_at: DateTime<Utc>,
}

/// The external data sources a dashboard reads from
#[derive(Clone)]
pub struct Providers {
    pub quotes: Arc<dyn QuoteProvider>,
    pub trends: Arc<dyn SearchInterestProvider>,
    pub news: Arc<dyn HeadlineProvider>,
    pub social: Arc<dyn SocialFeedProvider>,
}

impl Providers {
    /// HTTP-backed providers built from configuration
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let client = build_client(config.http_timeout)?;

        Ok(Self {
            quotes: Arc::new(YahooClient::new(&config.yahoo_base_url, client.clone())),
            trends: Arc::new(TrendsClient::new(&config.trends_base_url, client.clone())),
            news: Arc::new(
                NewsClient::new(
                    &config.newsapi_base_url,
                    client.clone(),
                    config.newsapi_key.clone(),
                )
                .with_page_size(config.news_page_size),
            ),
            social: Arc::new(
                RedditClient::new(&config.reddit_base_url, client, &config.subreddit)
                    .with_limit(config.reddit_post_limit),
            ),
        })
    }
}

pub struct Dashboard {
    config: Config,
    providers: Providers,
    registry: Arc<TickerRegistry>,
    extractor: MentionExtractor,
    exclusions: HashSet<String>,
    metrics: Option<Arc<Metrics>>,
}

impl Dashboard {
    pub fn new(
        config: Config,
        providers: Providers,
        registry: Arc<TickerRegistry>,
    ) -> Result<Self, regex::Error> {
        let extractor = MentionExtractor::new(config.mention_cap)?
            .with_lowercase_cashtags(config.accept_lowercase_cashtags);

        Ok(Self {
            config,
            providers,
            registry,
            extractor,
            exclusions: default_exclusions(),
            metrics: None,
        })
    }

    /// Dashboard wired to the real HTTP providers and ticker list sources
    pub fn from_config(config: Config) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let providers = Providers::from_config(&config)?;
        let client = build_client(config.http_timeout)?;

        let sources: Vec<Arc<dyn TickerSource>> = config
            .ticker_list_urls
            .iter()
            .map(|url| {
                Arc::new(HttpTickerListSource::new(url.clone(), client.clone()))
                    as Arc<dyn TickerSource>
            })
            .collect();
        let registry = Arc::new(TickerRegistry::new(
            sources,
            RefreshPolicy::from_ttl(config.ticker_cache_ttl),
        ));

        Ok(Self::new(config, providers, registry)?)
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_exclusions(mut self, exclusions: HashSet<String>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn registry(&self) -> &Arc<TickerRegistry> {
        &self.registry
    }

    /// Fetch everything, classify, and build the mention radar
    pub async fn refresh(&self) -> DashboardSnapshot {
        let start = Instant::now();
        info!("Dashboard refresh started");

        let indicators = self.fetch_indicators().await;
        let signals = SignalClassifier::classify_all(&indicators);
        for outcome in &signals {
            info!(
                style = ?outcome.style,
                verdict = ?outcome.verdict,
                tally = outcome.tally,
                rule = outcome.rule_id.as_deref().unwrap_or("fallback"),
                "Signal classified"
            );
        }

        let radar = self.mention_radar().await;

        if let Some(ref metrics) = self.metrics {
            metrics.dashboard_refreshes_total.inc();
            metrics
                .dashboard_refresh_duration_seconds
                .observe(start.elapsed().as_secs_f64());
        }
        info!(
            duration_ms = start.elapsed().as_millis() as u64,
            mentions = radar.mentions.len(),
            "Dashboard refresh finished"
        );

        DashboardSnapshot {
            indicators,
            signals,
            radar,
            refreshed_at: Utc::now(),
        }
    }

    pub async fn fetch_indicators(&self) -> IndicatorSnapshot {
        let metrics = self.metrics.as_deref();
        let quotes = self.providers.quotes.as_ref();
        let config = &self.config;

        IndicatorSnapshot {
            volatility: intake::fetch_volatility(quotes, &config.volatility_symbol, metrics).await,
            momentum: intake::fetch_momentum(
                quotes,
                &config.momentum_symbol,
                config.rsi_period,
                metrics,
            )
            .await,
            search_interest: intake::fetch_search_interest(
                self.providers.trends.as_ref(),
                &config.trends_term,
                metrics,
            )
            .await,
            sentiment: intake::fetch_sentiment(
                self.providers.news.as_ref(),
                &config.news_query,
                metrics,
            )
            .await,
            put_call: intake::fetch_optional_close(
                "put_call",
                quotes,
                config.put_call_symbol.as_deref(),
                metrics,
            )
            .await,
            short_yield: intake::fetch_optional_close(
                "short_yield",
                quotes,
                Some(config.short_yield_symbol.as_str()),
                metrics,
            )
            .await,
            long_yield: intake::fetch_optional_close(
                "long_yield",
                quotes,
                Some(config.long_yield_symbol.as_str()),
                metrics,
            )
            .await,
            fetched_at: Utc::now(),
        }
    }

    /// Fetch hot posts, extract mentions and annotate price changes
    pub async fn mention_radar(&self) -> MentionRadar {
        let posts = match self.providers.social.hot_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                warn!(error = %e, "Social feed unavailable, mention radar empty");
                if let Some(ref metrics) = self.metrics {
                    metrics.record_provider_failure("social", e.kind());
                }
                return MentionRadar::unavailable(radar_status(&e));
            }
        };

        let mut mentions = self.extract_mentions(&posts).await;
        self.annotate_price_changes(&mut mentions).await;

        MentionRadar {
            status: RadarStatus::Ok,
            mentions,
        }
    }

    /// Rank mentions in a batch of posts against the current known-ticker set
    pub async fn extract_mentions(&self, posts: &[Post]) -> Vec<TickerMention> {
        let known = self.registry.known_tickers().await;
        self.extractor.extract(posts, &known, &self.exclusions)
    }

    async fn annotate_price_changes(&self, mentions: &mut [TickerMention]) {
        for mention in mentions.iter_mut() {
            match self.providers.quotes.percent_change(&mention.symbol).await {
                Ok(change) => mention.price_change_pct = Some(intake::round2(change)),
                Err(e) => {
                    debug!(symbol = %mention.symbol, error = %e, "No price change for mention");
                }
            }
        }
    }
}

pub fn radar_status(error: &FetchError) -> RadarStatus {
    match error {
        FetchError::RateLimited { .. } => RadarStatus::RateLimited,
        FetchError::Status { status } => RadarStatus::HttpStatus(*status),
        FetchError::Parse(_) | FetchError::Empty(_) => RadarStatus::ParseError,
        FetchError::Network(_) | FetchError::Timeout | FetchError::MissingCredential(_) => {
            RadarStatus::NetworkError
        }
    }
}
