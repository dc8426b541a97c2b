use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use marketmood::error::FetchError;
use marketmood::mentions::{RefreshPolicy, TickerRegistry, FALLBACK_TICKERS};
use marketmood::services::{StaticTickerSource, TickerSource};

/// Source that counts loads and optionally fails
struct CountingSource {
    loads: AtomicUsize,
    fail: bool,
}

impl CountingSource {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            loads: AtomicUsize::new(0),
            fail,
        })
    }

    fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

fn registry_over(source: &Arc<CountingSource>, policy: RefreshPolicy) -> TickerRegistry {
    let sources: Vec<Arc<dyn TickerSource>> = vec![source.clone() as Arc<dyn TickerSource>];
    TickerRegistry::new(sources, policy)
}

#[async_trait]
impl TickerSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn load(&self) -> Result<HashSet<String>, FetchError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError::Status { status: 503 });
        }
        Ok(["MSFT".to_string()].into_iter().collect())
    }
}

#[tokio::test]
async fn test_fallback_only_registry_knows_fallback_symbols() {
    let registry = TickerRegistry::fallback_only();
    let known = registry.known_tickers().await;

    assert_eq!(known.len(), FALLBACK_TICKERS.len());
    assert!(known.contains("GME"));
    assert!(known.contains("BB"));
}

#[tokio::test]
async fn test_failing_sources_still_leave_fallback() {
    let source = CountingSource::new(true);
    let registry = registry_over(&source, RefreshPolicy::LoadOnce);

    let known = registry.known_tickers().await;
    assert!(known.contains("TSLA"));
    assert!(!known.contains("MSFT"));
    assert_eq!(source.loads(), 1);
}

#[tokio::test]
async fn test_successful_sources_are_unioned_with_fallback() {
    let sources: Vec<Arc<dyn TickerSource>> = vec![
        CountingSource::new(false) as Arc<dyn TickerSource>,
        CountingSource::new(true) as Arc<dyn TickerSource>,
        Arc::new(StaticTickerSource::new("static", ["KO", "PEP"])) as Arc<dyn TickerSource>,
    ];
    let registry = TickerRegistry::new(sources, RefreshPolicy::LoadOnce);

    let known = registry.known_tickers().await;
    for symbol in ["MSFT", "KO", "PEP", "GME", "SPY"] {
        assert!(known.contains(symbol), "missing {}", symbol);
    }
}

#[tokio::test]
async fn test_load_once_policy_never_reloads() {
    let source = CountingSource::new(false);
    let registry = registry_over(&source, RefreshPolicy::LoadOnce);

    registry.known_tickers().await;
    registry.known_tickers().await;
    registry.known_tickers().await;
    assert_eq!(source.loads(), 1);
}

#[tokio::test]
async fn test_expired_ttl_reloads() {
    let source = CountingSource::new(false);
    let registry = registry_over(&source, RefreshPolicy::Ttl(Duration::ZERO));

    registry.known_tickers().await;
    registry.known_tickers().await;
    assert_eq!(source.loads(), 2);
}

#[tokio::test]
async fn test_long_ttl_serves_cache() {
    let source = CountingSource::new(false);
    let registry = registry_over(&source, RefreshPolicy::Ttl(Duration::from_secs(3600)));

    registry.known_tickers().await;
    registry.known_tickers().await;
    assert_eq!(source.loads(), 1);
}

#[tokio::test]
async fn test_invalidate_forces_reload() {
    let source = CountingSource::new(false);
    let registry = registry_over(&source, RefreshPolicy::LoadOnce);

    registry.known_tickers().await;
    registry.invalidate().await;
    registry.known_tickers().await;
    assert_eq!(source.loads(), 2);
}

#[test]
fn test_policy_from_optional_ttl() {
    assert_eq!(RefreshPolicy::from_ttl(None), RefreshPolicy::LoadOnce);
    assert_eq!(
        RefreshPolicy::from_ttl(Some(Duration::from_secs(60))),
        RefreshPolicy::Ttl(Duration::from_secs(60))
    );
}
