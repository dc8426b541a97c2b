use serde::{Deserialize, Serialize};

/// One post from the social feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub upvotes: Option<u64>,
}

impl Post {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            upvotes: None,
        }
    }

    pub fn with_upvotes(mut self, upvotes: u64) -> Self {
        self.upvotes = Some(upvotes);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionSource {
    pub title: String,
    pub upvotes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerMention {
    pub symbol: String,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<MentionSource>,
}

/// Outcome of fetching the post batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "code", rename_all = "snake_case")]
pub enum RadarStatus {
    Ok,
    RateLimited,
    HttpStatus(u16),
    NetworkError,
    ParseError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionRadar {
    pub status: RadarStatus,
    pub mentions: Vec<TickerMention>,
}

impl MentionRadar {
    pub fn unavailable(status: RadarStatus) -> Self {
        Self {
            status,
            mentions: Vec::new(),
        }
    }
}
