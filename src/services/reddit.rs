//! Reddit "hot" listing client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;
use crate::models::Post;
use crate::services::client::check_status;
use crate::services::market_data::SocialFeedProvider;

const PROVIDER: &str = "reddit";

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    selftext: Option<String>,
    #[serde(default)]
    ups: Option<u64>,
}

pub struct RedditClient {
    base_url: String,
    client: Client,
    subreddit: String,
    limit: u32,
}

impl RedditClient {
    pub fn new(base_url: impl Into<String>, client: Client, subreddit: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            subreddit: subreddit.into(),
            limit: 25,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[async_trait]
impl SocialFeedProvider for RedditClient {
    async fn hot_posts(&self) -> Result<Vec<Post>, FetchError> {
        let url = format!(
            "{}/r/{}/hot/.json",
            self.base_url.trim_end_matches('/'),
            self.subreddit
        );
        let response = self
            .client
            .get(&url)
            .query(&[("limit", self.limit)])
            .send()
            .await?;
        let response = check_status(PROVIDER, response)?;

        // read as text first so a non-JSON body is a parse error, not a transport one
        let body = response.text().await?;
        let listing: Listing = serde_json::from_str(&body).map_err(FetchError::parse)?;

        let posts: Vec<Post> = listing
            .data
            .children
            .into_iter()
            .filter_map(|child| {
                let data = child.data;
                data.title.map(|title| Post {
                    title,
                    body: data.selftext.unwrap_or_default(),
                    upvotes: data.ups,
                })
            })
            .collect();

        debug!(subreddit = %self.subreddit, count = posts.len(), "Fetched hot posts");
        Ok(posts)
    }
}
