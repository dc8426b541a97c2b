//! Rule-table evaluation
//!
//! Classification is a total, pure function of the snapshot: it never fails,
//! and an unavailable indicator simply leaves every condition on it unmet.

use crate::models::{IndicatorSnapshot, SignalOutcome, SignalReason, SignalStyle};
use crate::signals::rules::{Condition, Predicate, RuleTable};

pub struct SignalClassifier;

impl SignalClassifier {
    /// Run one rule table against a snapshot
    pub fn classify(table: &RuleTable, snapshot: &IndicatorSnapshot) -> SignalOutcome {
        let mut reasons = Vec::new();
        let mut tally = 0u32;

        for condition in &table.tally {
            let value = snapshot.value(condition.indicator);
            if condition.holds(value) {
                tally += 1;
                reasons.push(Self::reason(condition, value));
            }
        }

        let matched = table
            .rules
            .iter()
            .find(|rule| Self::evaluate(&rule.when, snapshot, tally));

        let (verdict, rule_id) = match matched {
            Some(rule) => {
                reasons.push(SignalReason {
                    description: format!("Rule {} matched", rule.id),
                });
                (rule.verdict, Some(rule.id.clone()))
            }
            None => (table.fallback, None),
        };

        SignalOutcome {
            style: table.style,
            verdict,
            headline: verdict.headline().to_string(),
            tally,
            rule_id,
            reasons,
        }
    }

    /// Classify with the built-in table for a style
    pub fn classify_style(style: SignalStyle, snapshot: &IndicatorSnapshot) -> SignalOutcome {
        Self::classify(&RuleTable::for_style(style), snapshot)
    }

    /// Classify with every built-in style, long-term first
    pub fn classify_all(snapshot: &IndicatorSnapshot) -> Vec<SignalOutcome> {
        [SignalStyle::LongTerm, SignalStyle::Tactical]
            .into_iter()
            .map(|style| Self::classify_style(style, snapshot))
            .collect()
    }

    fn evaluate(predicate: &Predicate, snapshot: &IndicatorSnapshot, tally: u32) -> bool {
        match predicate {
            Predicate::Condition(condition) => {
                condition.holds(snapshot.value(condition.indicator))
            }
            Predicate::TallyAtLeast(min) => tally >= *min,
            Predicate::All(children) => children
                .iter()
                .all(|child| Self::evaluate(child, snapshot, tally)),
        }
    }

    fn reason(condition: &Condition, value: Option<f64>) -> SignalReason {
        let description = match value {
            Some(v) => format!("{} (observed {:.2})", condition.describe(), v),
            None => condition.describe(),
        };
        SignalReason { description }
    }
}
