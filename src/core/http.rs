//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, Level};

use crate::dashboard::{render_text, Dashboard, DashboardSnapshot};
use crate::metrics::Metrics;
use crate::models::{
    IndicatorKind, IndicatorSnapshot, IndicatorValues, Post, RadarStatus, SignalOutcome,
    TickerMention,
};
use crate::signals::{RuleTable, SignalClassifier};

/// Indicators the dashboard fetches on every refresh. The optional ones
/// (put/call, yields) do not count toward health.
const CORE_INDICATORS: [IndicatorKind; 4] = [
    IndicatorKind::Volatility,
    IndicatorKind::Momentum,
    IndicatorKind::SearchInterest,
    IndicatorKind::Sentiment,
];

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub metrics: Arc<Metrics>,
    pub last_refresh: Arc<RwLock<RefreshHealth>>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(dashboard: Arc<Dashboard>, metrics: Arc<Metrics>) -> Self {
        Self {
            dashboard,
            metrics,
            last_refresh: Arc::new(RwLock::new(RefreshHealth::default())),
            started_at: Instant::now(),
        }
    }

    /// Run a refresh and remember how it went for `/health`
    async fn refresh(&self) -> DashboardSnapshot {
        let snapshot = self.dashboard.refresh().await;
        *self.last_refresh.write().await = RefreshHealth::from_snapshot(&snapshot);
        snapshot
    }
}

/// How the most recent dashboard refresh went
#[derive(Clone, Debug, Default, Serialize)]
pub struct RefreshHealth {
    pub refreshed_at: Option<DateTime<Utc>>,
    pub unavailable: Vec<&'static str>,
    pub radar: Option<RadarStatus>,
}

impl RefreshHealth {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let unavailable = CORE_INDICATORS
            .iter()
            .filter(|kind| snapshot.indicators.value(**kind).is_none())
            .map(|kind| kind.short_name())
            .collect();

        Self {
            refreshed_at: Some(snapshot.refreshed_at),
            unavailable,
            radar: Some(snapshot.radar.status),
        }
    }

    /// Degraded once a refresh came back with no core indicator at all
    pub fn status(&self) -> &'static str {
        if self.refreshed_at.is_some() && self.unavailable.len() == CORE_INDICATORS.len() {
            "degraded"
        } else {
            "healthy"
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let last_refresh = state.last_refresh.read().await;
    Json(json!({
        "status": last_refresh.status(),
        "service": "marketmood",
        "uptime_seconds": state.started_at.elapsed().as_secs(),
        "last_refresh": &*last_refresh,
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state.metrics.export().map_err(|e| {
        error!(error = %e, "Failed to encode metrics");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Count and time every request; server errors are logged
async fn track_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let metrics = &state.metrics;
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    metrics.http_requests_in_flight.inc();
    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();
    metrics.http_requests_in_flight.dec();

    metrics.http_requests_total.inc();
    metrics
        .http_request_duration_seconds
        .observe(elapsed.as_secs_f64());

    let status = response.status();
    let duration_ms = elapsed.as_millis() as u64;
    if status.is_server_error() {
        error!(%method, %path, %status, duration_ms, "Request failed");
    } else {
        debug!(%method, %path, %status, duration_ms, "Request served");
    }

    response
}

/// Refresh and render the dashboard as plain text
async fn dashboard_text(State(state): State<AppState>) -> String {
    render_text(&state.refresh().await)
}

/// Refresh and return the dashboard snapshot as JSON
async fn dashboard_json(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.refresh().await)
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub values: IndicatorValues,
    /// Custom rule tables; the built-in styles are used when absent
    #[serde(default)]
    pub tables: Option<Vec<RuleTable>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub signals: Vec<SignalOutcome>,
}

/// Classify caller-supplied indicator values without fetching anything
async fn classify_signals(Json(request): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    let snapshot = IndicatorSnapshot::from_values(&request.values);
    let signals = match request.tables {
        Some(tables) => tables
            .iter()
            .map(|table| SignalClassifier::classify(table, &snapshot))
            .collect(),
        None => SignalClassifier::classify_all(&snapshot),
    };
    debug!(count = signals.len(), "Classified supplied values");
    Json(ClassifyResponse { signals })
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub mentions: Vec<TickerMention>,
}

/// Rank ticker mentions in caller-supplied posts
async fn extract_mentions(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    let mentions = state.dashboard.extract_mentions(&request.posts).await;
    Json(ExtractResponse { mentions })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_text))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/dashboard", get(dashboard_json))
        .route("/api/signals/classify", post(classify_signals))
        .route("/api/mentions/extract", post(extract_mentions))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    track_requests,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    dashboard: Arc<Dashboard>,
    metrics: Arc<Metrics>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = AppState::new(dashboard, metrics);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
