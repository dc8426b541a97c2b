//! One-shot dashboard: refresh every indicator once and print the text view.

use dotenvy::dotenv;
use marketmood::config::Config;
use marketmood::dashboard::{render_text, Dashboard};
use marketmood::logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let dashboard = Dashboard::from_config(Config::from_env())?;
    let snapshot = dashboard.refresh().await;

    info!(
        signals = snapshot.signals.len(),
        mentions = snapshot.radar.mentions.len(),
        "Dashboard ready"
    );
    println!("{}", render_text(&snapshot));

    Ok(())
}
