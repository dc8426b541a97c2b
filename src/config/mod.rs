//! Environment-driven configuration.
//!
//! Values are read from the process environment (after `dotenvy` has loaded
//! an optional `.env`). Every field has a default so the dashboard runs with
//! no configuration at all; only the headline provider needs a key.

use std::env;
use std::time::Duration;

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TRENDS_BASE_URL: &str = "https://trends.google.com";
pub const DEFAULT_NEWSAPI_BASE_URL: &str = "https://newsapi.org";
pub const DEFAULT_REDDIT_BASE_URL: &str = "https://www.reddit.com";
pub const DEFAULT_TICKER_LIST_URL: &str =
    "https://raw.githubusercontent.com/datasets/s-and-p-500-companies/main/data/constituents.csv";

/// Get the current deployment environment (`ENVIRONMENT`, default `sandbox`)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Get the HTTP port for the API server (`PORT`, default 8080)
pub fn get_port() -> u16 {
    parse_var("PORT").unwrap_or(8080)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub newsapi_key: Option<String>,
    pub http_timeout: Duration,

    pub yahoo_base_url: String,
    pub trends_base_url: String,
    pub newsapi_base_url: String,
    pub reddit_base_url: String,

    pub volatility_symbol: String,
    pub momentum_symbol: String,
    pub short_yield_symbol: String,
    pub long_yield_symbol: String,
    /// Put/call ratio source; the indicator is reported as not configured when unset.
    pub put_call_symbol: Option<String>,
    pub rsi_period: usize,

    pub trends_term: String,
    pub news_query: String,
    pub news_page_size: u32,

    pub subreddit: String,
    pub reddit_post_limit: u32,
    pub mention_cap: usize,
    pub accept_lowercase_cashtags: bool,

    pub ticker_list_urls: Vec<String>,
    /// `None` loads the ticker universe once per process.
    pub ticker_cache_ttl: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            newsapi_key: None,
            http_timeout: Duration::from_secs(10),
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            trends_base_url: DEFAULT_TRENDS_BASE_URL.to_string(),
            newsapi_base_url: DEFAULT_NEWSAPI_BASE_URL.to_string(),
            reddit_base_url: DEFAULT_REDDIT_BASE_URL.to_string(),
            volatility_symbol: "^VIX".to_string(),
            momentum_symbol: "^GSPC".to_string(),
            short_yield_symbol: "^IRX".to_string(),
            long_yield_symbol: "^TNX".to_string(),
            put_call_symbol: None,
            rsi_period: 14,
            trends_term: "stock market crash".to_string(),
            news_query: "stock market".to_string(),
            news_page_size: 25,
            subreddit: "wallstreetbets".to_string(),
            reddit_post_limit: 25,
            mention_cap: 10,
            accept_lowercase_cashtags: true,
            ticker_list_urls: vec![DEFAULT_TICKER_LIST_URL.to_string()],
            ticker_cache_ttl: None,
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let ticker_list_urls = match env::var("TICKER_LIST_URLS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            Err(_) => defaults.ticker_list_urls,
        };

        Self {
            newsapi_key: non_empty_var("NEWSAPI_KEY"),
            http_timeout: parse_var::<u64>("HTTP_TIMEOUT_SECONDS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            yahoo_base_url: string_var("YAHOO_BASE_URL", defaults.yahoo_base_url),
            trends_base_url: string_var("TRENDS_BASE_URL", defaults.trends_base_url),
            newsapi_base_url: string_var("NEWSAPI_BASE_URL", defaults.newsapi_base_url),
            reddit_base_url: string_var("REDDIT_BASE_URL", defaults.reddit_base_url),
            volatility_symbol: string_var("VOLATILITY_SYMBOL", defaults.volatility_symbol),
            momentum_symbol: string_var("MOMENTUM_SYMBOL", defaults.momentum_symbol),
            short_yield_symbol: string_var("SHORT_YIELD_SYMBOL", defaults.short_yield_symbol),
            long_yield_symbol: string_var("LONG_YIELD_SYMBOL", defaults.long_yield_symbol),
            put_call_symbol: non_empty_var("PUT_CALL_SYMBOL"),
            rsi_period: parse_var("RSI_PERIOD").unwrap_or(defaults.rsi_period),
            trends_term: string_var("TRENDS_TERM", defaults.trends_term),
            news_query: string_var("NEWS_QUERY", defaults.news_query),
            news_page_size: parse_var("NEWS_PAGE_SIZE").unwrap_or(defaults.news_page_size),
            subreddit: string_var("SUBREDDIT", defaults.subreddit),
            reddit_post_limit: parse_var("REDDIT_POST_LIMIT")
                .unwrap_or(defaults.reddit_post_limit),
            mention_cap: parse_var("MENTION_CAP").unwrap_or(defaults.mention_cap),
            accept_lowercase_cashtags: parse_var("ACCEPT_LOWERCASE_CASHTAGS")
                .unwrap_or(defaults.accept_lowercase_cashtags),
            ticker_list_urls,
            ticker_cache_ttl: parse_var::<u64>("TICKER_CACHE_TTL_SECONDS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn string_var(key: &str, default: String) -> String {
    non_empty_var(key).unwrap_or(default)
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
