pub mod momentum;
pub mod sentiment;

pub use momentum::*;
pub use sentiment::{label_for, score_headlines};
