//! Shared data models spanning the dashboard layers.

pub mod indicators;
pub mod mention;
pub mod signal;

pub use indicators::{
    HeadlineSentiment, IndicatorKind, IndicatorSnapshot, IndicatorValues, Reading, SentimentLabel,
};
pub use mention::{MentionRadar, MentionSource, Post, RadarStatus, TickerMention};
pub use signal::{SignalOutcome, SignalReason, SignalStyle, Verdict};
