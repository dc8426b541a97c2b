//! Built-in rule tables for the two signal styles

use crate::models::{IndicatorKind, SignalStyle, Verdict};
use crate::signals::rules::{Bound, Comparison, Condition, Predicate, Rule, RuleTable};

use IndicatorKind::*;

/// Long-term style thresholds
pub struct LongTermThresholds;

impl LongTermThresholds {
    pub const FEAR_VIX: f64 = 28.0;
    pub const FEAR_TRENDS: f64 = 80.0;
    pub const FEAR_NEWS: f64 = 35.0;
    pub const FEAR_PUT_CALL: f64 = 1.0;
    pub const INVERTED_SPREAD: f64 = 0.0;

    pub const STRONG_BUY_RSI: f64 = 35.0;
    pub const STRONG_BUY_FEAR: u32 = 2;
    pub const ACCUMULATE_RSI: f64 = 40.0;
    pub const ACCUMULATE_FEAR: u32 = 1;

    pub const NEUTRAL_RSI: (f64, f64) = (40.0, 60.0);
    pub const NEUTRAL_VIX: (f64, f64) = (16.0, 28.0);
    pub const NEUTRAL_NEWS: (f64, f64) = (35.0, 65.0);

    pub const OVERHEATED_RSI: f64 = 70.0;
    pub const OVERHEATED_NEWS: f64 = 60.0;
    pub const OVERHEATED_TRENDS: f64 = 20.0;
}

/// Tactical style thresholds
pub struct TacticalThresholds;

impl TacticalThresholds {
    pub const DIP_VIX: f64 = 22.0;
    pub const DIP_RSI: f64 = 45.0;
    pub const DIP_TRENDS: f64 = 60.0;
    pub const DIP_NEWS: f64 = 50.0;
    pub const DIP_PUT_CALL: f64 = 0.9;
    pub const INVERTED_SPREAD: f64 = 0.0;
    pub const DIP_SCORE: u32 = 2;

    pub const HOT_VIX: f64 = 14.0;
    pub const HOT_RSI: f64 = 70.0;
    pub const HOT_NEWS: f64 = 60.0;
}

impl RuleTable {
    pub fn for_style(style: SignalStyle) -> Self {
        match style {
            SignalStyle::LongTerm => Self::long_term(),
            SignalStyle::Tactical => Self::tactical(),
        }
    }

    /// Contrarian table: buy into fear, stand aside otherwise
    pub fn long_term() -> Self {
        type T = LongTermThresholds;

        let tally = vec![
            Condition::new(Volatility, Comparison::GreaterThan(T::FEAR_VIX)),
            Condition::new(SearchInterest, Comparison::GreaterThan(T::FEAR_TRENDS)),
            Condition::new(Sentiment, Comparison::LessThan(T::FEAR_NEWS)),
            Condition::new(PutCallRatio, Comparison::GreaterThan(T::FEAR_PUT_CALL)),
            Condition::new(YieldSpread, Comparison::LessThan(T::INVERTED_SPREAD)),
        ];

        let rules = vec![
            Rule::new(
                "oversold_with_fear",
                Predicate::all(vec![
                    Predicate::when(Momentum, Comparison::LessThan(T::STRONG_BUY_RSI)),
                    Predicate::TallyAtLeast(T::STRONG_BUY_FEAR),
                ]),
                Verdict::StrongBuy,
            ),
            Rule::new(
                "weak_with_some_fear",
                Predicate::all(vec![
                    Predicate::when(Momentum, Comparison::LessThan(T::ACCUMULATE_RSI)),
                    Predicate::TallyAtLeast(T::ACCUMULATE_FEAR),
                ]),
                Verdict::Accumulate,
            ),
            Rule::new(
                "neutral_market",
                Predicate::all(vec![
                    Predicate::when(Momentum, inclusive(T::NEUTRAL_RSI)),
                    Predicate::when(Volatility, exclusive(T::NEUTRAL_VIX)),
                    Predicate::when(Sentiment, inclusive(T::NEUTRAL_NEWS)),
                ]),
                Verdict::Wait,
            ),
            Rule::new(
                "overheated",
                Predicate::all(vec![
                    Predicate::when(Momentum, Comparison::GreaterThan(T::OVERHEATED_RSI)),
                    Predicate::when(Sentiment, Comparison::GreaterThan(T::OVERHEATED_NEWS)),
                    Predicate::when(SearchInterest, Comparison::LessThan(T::OVERHEATED_TRENDS)),
                ]),
                Verdict::Overheated,
            ),
        ];

        Self {
            style: SignalStyle::LongTerm,
            tally,
            rules,
            fallback: Verdict::HoldOff,
        }
    }

    /// Buy-the-dip table: any two stress readings are an entry
    pub fn tactical() -> Self {
        type T = TacticalThresholds;

        let tally = vec![
            Condition::new(Volatility, Comparison::GreaterThan(T::DIP_VIX)),
            Condition::new(Momentum, Comparison::LessThan(T::DIP_RSI)),
            Condition::new(SearchInterest, Comparison::GreaterThan(T::DIP_TRENDS)),
            Condition::new(Sentiment, Comparison::LessThan(T::DIP_NEWS)),
            Condition::new(PutCallRatio, Comparison::GreaterThan(T::DIP_PUT_CALL)),
            Condition::new(YieldSpread, Comparison::LessThan(T::INVERTED_SPREAD)),
        ];

        let rules = vec![
            Rule::new(
                "dip_score",
                Predicate::TallyAtLeast(T::DIP_SCORE),
                Verdict::BuyTheDip,
            ),
            Rule::new(
                "complacent_and_hot",
                Predicate::all(vec![
                    Predicate::when(Volatility, Comparison::LessThan(T::HOT_VIX)),
                    Predicate::when(Momentum, Comparison::GreaterThan(T::HOT_RSI)),
                    Predicate::when(Sentiment, Comparison::GreaterThan(T::HOT_NEWS)),
                ]),
                Verdict::TooHot,
            ),
        ];

        Self {
            style: SignalStyle::Tactical,
            tally,
            rules,
            fallback: Verdict::StayInvested,
        }
    }
}

fn inclusive((min, max): (f64, f64)) -> Comparison {
    Comparison::InRange {
        min: Bound::Inclusive(min),
        max: Bound::Inclusive(max),
    }
}

fn exclusive((min, max): (f64, f64)) -> Comparison {
    Comparison::InRange {
        min: Bound::Exclusive(min),
        max: Bound::Exclusive(max),
    }
}
