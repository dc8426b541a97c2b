//! MarketMood API Server
//!
//! HTTP API serving the dashboard (text and JSON), on-demand classification
//! and mention extraction, plus health and metrics endpoints.

use dotenvy::dotenv;
use marketmood::config::{get_environment, get_port, Config};
use marketmood::core::http::start_server;
use marketmood::dashboard::Dashboard;
use marketmood::logging;
use marketmood::metrics::Metrics;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let port = get_port();
    let env = get_environment();
    info!("Starting MarketMood API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let config = Config::from_env();
    if config.newsapi_key.is_none() {
        info!("NEWSAPI_KEY not set, news sentiment will be reported as unavailable");
    }

    let metrics = Arc::new(Metrics::new()?);
    let dashboard = Arc::new(Dashboard::from_config(config)?.with_metrics(metrics.clone()));

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, dashboard, metrics).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
