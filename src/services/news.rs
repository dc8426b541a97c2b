//! NewsAPI headline client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;
use crate::indicators::sentiment::score_headlines;
use crate::models::HeadlineSentiment;
use crate::services::client::check_status;
use crate::services::market_data::HeadlineProvider;

const PROVIDER: &str = "newsapi";

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: Option<String>,
}

pub struct NewsClient {
    base_url: String,
    client: Client,
    api_key: Option<String>,
    page_size: u32,
}

impl NewsClient {
    pub fn new(base_url: impl Into<String>, client: Client, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            api_key,
            page_size: 25,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Titles of the most recent English articles matching `query`
    pub async fn titles(&self, query: &str) -> Result<Vec<String>, FetchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(FetchError::MissingCredential("NEWSAPI_KEY"))?;

        let url = format!("{}/v2/everything", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", api_key)
            .query(&[
                ("q", query.to_string()),
                ("language", "en".to_string()),
                ("pageSize", self.page_size.to_string()),
            ])
            .send()
            .await?;
        let response = check_status(PROVIDER, response)?;
        let body: EverythingResponse = response.json().await.map_err(FetchError::parse)?;

        if body.status != "ok" {
            return Err(match body.code.as_deref() {
                Some("rateLimited") => FetchError::RateLimited { provider: PROVIDER },
                Some("apiKeyMissing") => FetchError::MissingCredential("NEWSAPI_KEY"),
                _ => FetchError::Parse(format!(
                    "NewsAPI error: {}",
                    body.message.unwrap_or_else(|| body.status.clone())
                )),
            });
        }

        debug!(count = body.articles.len(), "Fetched NewsAPI articles");
        Ok(body.articles.into_iter().filter_map(|a| a.title).collect())
    }
}

#[async_trait]
impl HeadlineProvider for NewsClient {
    async fn headline_sentiment(&self, query: &str) -> Result<HeadlineSentiment, FetchError> {
        let titles = self.titles(query).await?;
        Ok(score_headlines(&titles))
    }
}
