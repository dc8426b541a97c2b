use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A single provider reading: either a value or the reason it is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Reading<T> {
    Value(T),
    NoCredential,
    RateLimited,
    FetchError(String),
    ParseError(String),
    NotConfigured,
}

impl<T> Reading<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Reading::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Reading::Value(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reading<U> {
        match self {
            Reading::Value(v) => Reading::Value(f(v)),
            Reading::NoCredential => Reading::NoCredential,
            Reading::RateLimited => Reading::RateLimited,
            Reading::FetchError(e) => Reading::FetchError(e),
            Reading::ParseError(e) => Reading::ParseError(e),
            Reading::NotConfigured => Reading::NotConfigured,
        }
    }
}

impl<T> From<Result<T, FetchError>> for Reading<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(v) => Reading::Value(v),
            Err(FetchError::MissingCredential(_)) => Reading::NoCredential,
            Err(FetchError::RateLimited { .. }) => Reading::RateLimited,
            Err(e @ (FetchError::Parse(_) | FetchError::Empty(_))) => {
                Reading::ParseError(e.to_string())
            }
            Err(e) => Reading::FetchError(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    Mixed,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Bullish => "Bullish",
            SentimentLabel::Bearish => "Bearish",
            SentimentLabel::Mixed => "Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadlineSentiment {
    /// 0-100, 50 is neutral
    pub score: f64,
    pub label: SentimentLabel,
}

/// Indicators a rule condition can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum IndicatorKind {
    Volatility,
    Momentum,
    SearchInterest,
    Sentiment,
    PutCallRatio,
    ShortYield,
    LongYield,
    /// Long yield minus short yield; negative means an inverted curve.
    YieldSpread,
}

impl IndicatorKind {
    pub fn short_name(&self) -> &'static str {
        match self {
            IndicatorKind::Volatility => "VIX",
            IndicatorKind::Momentum => "RSI",
            IndicatorKind::SearchInterest => "Trends",
            IndicatorKind::Sentiment => "News",
            IndicatorKind::PutCallRatio => "Put/Call",
            IndicatorKind::ShortYield => "Short yield",
            IndicatorKind::LongYield => "Long yield",
            IndicatorKind::YieldSpread => "Yield spread",
        }
    }
}

/// Everything the classifier looks at, fetched fresh on each refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub volatility: Reading<f64>,
    pub momentum: Reading<f64>,
    pub search_interest: Reading<f64>,
    pub sentiment: Reading<HeadlineSentiment>,
    pub put_call: Reading<f64>,
    pub short_yield: Reading<f64>,
    pub long_yield: Reading<f64>,
    pub fetched_at: DateTime<Utc>,
}

impl IndicatorSnapshot {
    /// A snapshot where nothing is available.
    pub fn empty() -> Self {
        Self {
            volatility: Reading::NotConfigured,
            momentum: Reading::NotConfigured,
            search_interest: Reading::NotConfigured,
            sentiment: Reading::NotConfigured,
            put_call: Reading::NotConfigured,
            short_yield: Reading::NotConfigured,
            long_yield: Reading::NotConfigured,
            fetched_at: Utc::now(),
        }
    }

    /// Build a snapshot from bare numbers; `None` marks an indicator as absent.
    pub fn from_values(values: &IndicatorValues) -> Self {
        fn reading(v: Option<f64>) -> Reading<f64> {
            v.map(Reading::Value).unwrap_or(Reading::NotConfigured)
        }

        Self {
            volatility: reading(values.vix),
            momentum: reading(values.rsi),
            search_interest: reading(values.trends),
            sentiment: reading(values.news).map(|score| HeadlineSentiment {
                score,
                label: crate::indicators::sentiment::label_for(score),
            }),
            put_call: reading(values.put_call),
            short_yield: reading(values.short_yield),
            long_yield: reading(values.long_yield),
            fetched_at: Utc::now(),
        }
    }

    pub fn value(&self, kind: IndicatorKind) -> Option<f64> {
        match kind {
            IndicatorKind::Volatility => self.volatility.value().copied(),
            IndicatorKind::Momentum => self.momentum.value().copied(),
            IndicatorKind::SearchInterest => self.search_interest.value().copied(),
            IndicatorKind::Sentiment => self.sentiment.value().map(|s| s.score),
            IndicatorKind::PutCallRatio => self.put_call.value().copied(),
            IndicatorKind::ShortYield => self.short_yield.value().copied(),
            IndicatorKind::LongYield => self.long_yield.value().copied(),
            IndicatorKind::YieldSpread => {
                match (self.long_yield.value(), self.short_yield.value()) {
                    (Some(long), Some(short)) => Some(long - short),
                    _ => None,
                }
            }
        }
    }
}

/// Plain numeric indicator values, as accepted by the classify endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValues {
    #[serde(default)]
    pub vix: Option<f64>,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub trends: Option<f64>,
    #[serde(default)]
    pub news: Option<f64>,
    #[serde(default)]
    pub put_call: Option<f64>,
    #[serde(default)]
    pub short_yield: Option<f64>,
    #[serde(default)]
    pub long_yield: Option<f64>,
}

impl IndicatorValues {
    pub fn with_vix(mut self, vix: f64) -> Self {
        self.vix = Some(vix);
        self
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_trends(mut self, trends: f64) -> Self {
        self.trends = Some(trends);
        self
    }

    pub fn with_news(mut self, news: f64) -> Self {
        self.news = Some(news);
        self
    }

    pub fn with_put_call(mut self, ratio: f64) -> Self {
        self.put_call = Some(ratio);
        self
    }

    pub fn with_yields(mut self, short: f64, long: f64) -> Self {
        self.short_yield = Some(short);
        self.long_yield = Some(long);
        self
    }
}
