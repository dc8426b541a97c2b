//! Known-ticker registry
//!
//! Combines every configured [`TickerSource`] into one membership set and
//! caches it according to an explicit [`RefreshPolicy`]. The fallback
//! symbols are always part of the set, so it is never empty even when every
//! dynamic source fails.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::services::market_data::TickerSource;

pub const FALLBACK_TICKERS: [&str; 12] = [
    "GME", "AMC", "PLTR", "TSLA", "BBBY", "NVDA", "HOOD", "BB", "ROKU", "CLOV", "AAPL", "SPY",
];

pub fn fallback_tickers() -> HashSet<String> {
    FALLBACK_TICKERS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Load on first use and keep for the life of the registry
    LoadOnce,
    /// Reload on the first use after the duration has elapsed
    Ttl(Duration),
}

impl RefreshPolicy {
    pub fn from_ttl(ttl: Option<Duration>) -> Self {
        ttl.map(RefreshPolicy::Ttl).unwrap_or(RefreshPolicy::LoadOnce)
    }

    fn is_fresh(&self, loaded_at: Instant) -> bool {
        match self {
            RefreshPolicy::LoadOnce => true,
            RefreshPolicy::Ttl(ttl) => loaded_at.elapsed() < *ttl,
        }
    }
}

struct CachedSet {
    loaded_at: Instant,
    symbols: Arc<HashSet<String>>,
}

pub struct TickerRegistry {
    sources: Vec<Arc<dyn TickerSource>>,
    policy: RefreshPolicy,
    cache: RwLock<Option<CachedSet>>,
}

impl TickerRegistry {
    pub fn new(sources: Vec<Arc<dyn TickerSource>>, policy: RefreshPolicy) -> Self {
        Self {
            sources,
            policy,
            cache: RwLock::new(None),
        }
    }

    /// Registry with no dynamic sources: the fallback list only
    pub fn fallback_only() -> Self {
        Self::new(Vec::new(), RefreshPolicy::LoadOnce)
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Current known-ticker set, loading or reloading it if the policy requires
    pub async fn known_tickers(&self) -> Arc<HashSet<String>> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if self.policy.is_fresh(cached.loaded_at) {
                    return cached.symbols.clone();
                }
            }
        }

        let mut cache = self.cache.write().await;
        // another refresh may have reloaded while we waited for the lock
        if let Some(cached) = cache.as_ref() {
            if self.policy.is_fresh(cached.loaded_at) {
                return cached.symbols.clone();
            }
        }

        let symbols = Arc::new(self.load_all().await);
        *cache = Some(CachedSet {
            loaded_at: Instant::now(),
            symbols: symbols.clone(),
        });
        symbols
    }

    /// Drop the cached set so the next lookup reloads from the sources
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    async fn load_all(&self) -> HashSet<String> {
        let mut symbols = HashSet::new();
        let mut loaded_sources = 0usize;

        for source in &self.sources {
            match source.load().await {
                Ok(set) => {
                    debug!(source = source.name(), count = set.len(), "Loaded ticker list");
                    loaded_sources += 1;
                    symbols.extend(set);
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "Ticker list source failed");
                }
            }
        }

        if loaded_sources == 0 && !self.sources.is_empty() {
            warn!("All ticker list sources failed, using fallback symbols only");
        }

        symbols.extend(fallback_tickers());
        info!(
            count = symbols.len(),
            sources_ok = loaded_sources,
            sources_total = self.sources.len(),
            "Known ticker set loaded"
        );
        symbols
    }
}
