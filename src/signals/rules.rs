//! Rule table data model
//!
//! A table is a list of tally conditions, an ordered list of
//! `(predicate, verdict)` rules and a fallback verdict. The first rule whose
//! predicate holds wins. Tables are plain serde types so custom tables can
//! be supplied as JSON.

use serde::{Deserialize, Serialize};

use crate::models::{IndicatorKind, SignalStyle, Verdict};

/// One end of a range comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

impl Bound {
    fn admits_above(&self, value: f64) -> bool {
        match *self {
            Bound::Inclusive(min) => value >= min,
            Bound::Exclusive(min) => value > min,
        }
    }

    fn admits_below(&self, value: f64) -> bool {
        match *self {
            Bound::Inclusive(max) => value <= max,
            Bound::Exclusive(max) => value < max,
        }
    }
}

/// Comparison operations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Comparison {
    GreaterThan(f64),
    LessThan(f64),
    GreaterEqual(f64),
    LessEqual(f64),
    InRange { min: Bound, max: Bound },
}

impl Comparison {
    pub fn holds(&self, value: f64) -> bool {
        match *self {
            Comparison::GreaterThan(t) => value > t,
            Comparison::LessThan(t) => value < t,
            Comparison::GreaterEqual(t) => value >= t,
            Comparison::LessEqual(t) => value <= t,
            Comparison::InRange { min, max } => min.admits_above(value) && max.admits_below(value),
        }
    }

    fn describe(&self, subject: &str) -> String {
        match *self {
            Comparison::GreaterThan(t) => format!("{} > {}", subject, t),
            Comparison::LessThan(t) => format!("{} < {}", subject, t),
            Comparison::GreaterEqual(t) => format!("{} >= {}", subject, t),
            Comparison::LessEqual(t) => format!("{} <= {}", subject, t),
            Comparison::InRange { min, max } => {
                let lower = match min {
                    Bound::Inclusive(v) => format!("{} <=", v),
                    Bound::Exclusive(v) => format!("{} <", v),
                };
                let upper = match max {
                    Bound::Inclusive(v) => format!("<= {}", v),
                    Bound::Exclusive(v) => format!("< {}", v),
                };
                format!("{} {} {}", lower, subject, upper)
            }
        }
    }
}

/// Indicator comparison condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub indicator: IndicatorKind,
    pub comparison: Comparison,
}

impl Condition {
    pub fn new(indicator: IndicatorKind, comparison: Comparison) -> Self {
        Self {
            indicator,
            comparison,
        }
    }

    /// Unavailable indicators never satisfy a condition.
    pub fn holds(&self, value: Option<f64>) -> bool {
        value.is_some_and(|v| self.comparison.holds(v))
    }

    /// Human-readable form, e.g. `VIX > 28`
    pub fn describe(&self) -> String {
        self.comparison.describe(self.indicator.short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Predicate {
    Condition(Condition),
    /// At least this many tally conditions were met
    TallyAtLeast(u32),
    All(Vec<Predicate>),
}

impl Predicate {
    pub fn all(predicates: Vec<Predicate>) -> Self {
        Predicate::All(predicates)
    }

    pub fn when(indicator: IndicatorKind, comparison: Comparison) -> Self {
        Predicate::Condition(Condition::new(indicator, comparison))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub when: Predicate,
    pub verdict: Verdict,
}

impl Rule {
    pub fn new(id: impl Into<String>, when: Predicate, verdict: Verdict) -> Self {
        Self {
            id: id.into(),
            when,
            verdict,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub style: SignalStyle,
    pub tally: Vec<Condition>,
    pub rules: Vec<Rule>,
    pub fallback: Verdict,
}
