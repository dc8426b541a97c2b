//! Market sentiment dashboard: indicator intake, rule-table signals and
//! meme-ticker mention radar.

pub mod config;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod mentions;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
