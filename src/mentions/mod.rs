//! Meme-ticker mention radar: extraction, exclusions and the known-ticker registry.

pub mod exclusions;
pub mod extractor;
pub mod registry;

pub use exclusions::default_exclusions;
pub use extractor::MentionExtractor;
pub use registry::{fallback_tickers, RefreshPolicy, TickerRegistry, FALLBACK_TICKERS};
