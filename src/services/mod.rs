//! External data providers and their HTTP clients.

pub mod client;
pub mod market_data;
pub mod news;
pub mod reddit;
pub mod ticker_list;
pub mod trends;
pub mod yahoo;

pub use market_data::{
    HeadlineProvider, QuoteProvider, SearchInterestProvider, SocialFeedProvider,
    StaticTickerSource, TickerSource,
};
pub use news::NewsClient;
pub use reddit::RedditClient;
pub use ticker_list::HttpTickerListSource;
pub use trends::TrendsClient;
pub use yahoo::YahooClient;
