//! Headline polarity scoring
//!
//! Each title is checked once against a bearish and a bullish keyword list.
//! The score starts at a neutral 50 and moves two points per net title,
//! clamped to the 0-100 range.

use crate::models::{HeadlineSentiment, SentimentLabel};

pub const BEARISH_KEYWORDS: [&str; 6] = ["crash", "panic", "recession", "sell-off", "fear", "collapse"];
pub const BULLISH_KEYWORDS: [&str; 5] = ["rally", "bullish", "surge", "record high", "optimism"];

const NEUTRAL_SCORE: f64 = 50.0;
const POINTS_PER_TITLE: f64 = 2.0;

/// Score a batch of headline titles
pub fn score_headlines<S: AsRef<str>>(titles: &[S]) -> HeadlineSentiment {
    let mut bearish = 0i64;
    let mut bullish = 0i64;

    for title in titles {
        let lower = title.as_ref().to_lowercase();
        if BEARISH_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            bearish += 1;
        }
        if BULLISH_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            bullish += 1;
        }
    }

    let score = (NEUTRAL_SCORE + (bullish - bearish) as f64 * POINTS_PER_TITLE).clamp(0.0, 100.0);

    HeadlineSentiment {
        score,
        label: label_for(score),
    }
}

/// Coarse label for a 0-100 sentiment score
pub fn label_for(score: f64) -> SentimentLabel {
    if score > 60.0 {
        SentimentLabel::Bullish
    } else if score < 40.0 {
        SentimentLabel::Bearish
    } else {
        SentimentLabel::Mixed
    }
}
