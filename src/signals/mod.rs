//! Signal classification: rule tables and their evaluation.

pub mod classifier;
pub mod rules;
pub mod styles;

pub use classifier::SignalClassifier;
pub use rules::{Bound, Comparison, Condition, Predicate, Rule, RuleTable};
pub use styles::{LongTermThresholds, TacticalThresholds};
