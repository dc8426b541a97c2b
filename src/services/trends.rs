//! Google Trends interest-over-time client
//!
//! A lookup starts by visiting the explore page for an `NID` session cookie,
//! which Google expects on the API calls that follow. `explore` (a POST)
//! hands out a signed token for the TIMESERIES widget, then
//! `widgetdata/multiline` returns the series. Both payloads carry a `)]}'`
//! prefix that must be stripped before parsing.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, COOKIE, SET_COOKIE};
use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::FetchError;
use crate::services::client::{check_status, strip_json_prefix};
use crate::services::market_data::SearchInterestProvider;

const PROVIDER: &str = "google_trends";
const HOST_LANGUAGE: &str = "en-US";
const GEO: &str = "US";
const TIMEZONE_OFFSET: &str = "360";
const SESSION_COOKIE: &str = "NID";
pub const DEFAULT_TIMEFRAME: &str = "now 7-d";

#[derive(Debug, Deserialize)]
struct ExploreResponse {
    widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
struct Widget {
    id: String,
    token: Option<String>,
    request: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct MultilineResponse {
    default: Timeline,
}

#[derive(Debug, Deserialize)]
struct Timeline {
    #[serde(rename = "timelineData")]
    timeline_data: Vec<TimelinePoint>,
}

#[derive(Debug, Deserialize)]
struct TimelinePoint {
    value: Vec<f64>,
}

pub struct TrendsClient {
    base_url: String,
    client: Client,
    timeframe: String,
    session: RwLock<Option<String>>,
}

impl TrendsClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            session: RwLock::new(None),
        }
    }

    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = timeframe.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// `NID=...` pair for the Cookie header, fetched once and then reused.
    /// A failed visit is not fatal; the API calls go out without it.
    async fn session_cookie(&self) -> Option<String> {
        if let Some(cookie) = self.session.read().await.clone() {
            return Some(cookie);
        }

        let response = match self
            .client
            .get(self.url("/trends/explore/"))
            .query(&[("geo", GEO)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "Google Trends cookie request failed");
                return None;
            }
        };

        let cookie = session_cookie_from(response.headers());
        match cookie {
            Some(ref cookie) => *self.session.write().await = Some(cookie.clone()),
            None => debug!(status = %response.status(), "Google Trends set no NID cookie"),
        }
        cookie
    }

    async fn send_text(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<String, FetchError> {
        let mut request = self.client.request(method, self.url(path)).query(query);
        if let Some(cookie) = self.session_cookie().await {
            request = request.header(COOKIE, cookie);
        }

        let response = check_status(PROVIDER, request.send().await?)?;
        Ok(response.text().await?)
    }

    async fn timeseries_widget(&self, term: &str) -> Result<(String, Value), FetchError> {
        let req = json!({
            "comparisonItem": [{ "keyword": term, "geo": "", "time": self.timeframe }],
            "category": 0,
            "property": "",
        });
        let body = self
            .send_text(
                Method::POST,
                "/trends/api/explore",
                &[
                    ("hl", HOST_LANGUAGE.to_string()),
                    ("tz", TIMEZONE_OFFSET.to_string()),
                    ("req", req.to_string()),
                ],
            )
            .await?;

        let explore: ExploreResponse =
            serde_json::from_str(strip_json_prefix(&body)).map_err(FetchError::parse)?;

        explore
            .widgets
            .into_iter()
            .find(|w| w.id == "TIMESERIES")
            .and_then(|w| Some((w.token?, w.request?)))
            .ok_or_else(|| FetchError::Parse("no TIMESERIES widget in explore response".into()))
    }
}

fn session_cookie_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .find(|pair| {
            pair.split_once('=')
                .map_or(false, |(name, _)| name == SESSION_COOKIE)
        })
        .map(String::from)
}

#[async_trait]
impl SearchInterestProvider for TrendsClient {
    async fn interest(&self, term: &str) -> Result<f64, FetchError> {
        let (token, request) = self.timeseries_widget(term).await?;
        debug!(term = %term, "Fetching Google Trends timeline");

        let body = self
            .send_text(
                Method::GET,
                "/trends/api/widgetdata/multiline",
                &[
                    ("hl", HOST_LANGUAGE.to_string()),
                    ("tz", TIMEZONE_OFFSET.to_string()),
                    ("req", request.to_string()),
                    ("token", token),
                ],
            )
            .await?;

        let timeline: MultilineResponse =
            serde_json::from_str(strip_json_prefix(&body)).map_err(FetchError::parse)?;

        timeline
            .default
            .timeline_data
            .last()
            .and_then(|point| point.value.first().copied())
            .ok_or_else(|| FetchError::Empty(format!("empty trends timeline for '{}'", term)))
    }
}
