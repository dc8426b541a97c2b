//! Prometheus metrics for the HTTP surface and the refresh pipeline

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub dashboard_refreshes_total: IntCounter,
    pub dashboard_refresh_duration_seconds: Histogram,
    pub provider_failures_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Number of HTTP requests currently being served",
        )?;
        let dashboard_refreshes_total = IntCounter::new(
            "dashboard_refreshes_total",
            "Number of completed dashboard refreshes",
        )?;
        let dashboard_refresh_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "dashboard_refresh_duration_seconds",
                "Wall time of a full dashboard refresh",
            )
            .buckets(vec![0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        )?;
        let provider_failures_total = IntCounterVec::new(
            Opts::new(
                "provider_failures_total",
                "External provider fetches that degraded to an unavailable reading",
            ),
            &["provider", "kind"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(dashboard_refreshes_total.clone()))?;
        registry.register(Box::new(dashboard_refresh_duration_seconds.clone()))?;
        registry.register(Box::new(provider_failures_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            dashboard_refreshes_total,
            dashboard_refresh_duration_seconds,
            provider_failures_total,
        })
    }

    pub fn record_provider_failure(&self, provider: &str, kind: &str) {
        self.provider_failures_total
            .with_label_values(&[provider, kind])
            .inc();
    }

    /// Render all registered metrics in the Prometheus text exposition format
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
