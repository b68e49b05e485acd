//! Election Results Service
//!
//! Read-through lookup of election results: consult the cache, fall back to
//! the source, remember the fresh value.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{CacheStats, Clock, ExpiringCache, MonotonicClock};
use crate::error::{ElectionError, Result};
use crate::models::ElectionResult;
use crate::service::key::cache_key;
use crate::service::source::ResultSource;

/// Namespace for per-election result keys.
pub const RESULTS_NAMESPACE: &str = "election_results";

/// Cache holding shared election results.
pub type ResultCache<C = MonotonicClock> = ExpiringCache<Arc<ElectionResult>, C>;

/// Serves election results through a shared cache.
///
/// The cache is injected so one instance, built at process start, can be
/// shared by every component that needs it.
pub struct ElectionService<S, C = MonotonicClock> {
    cache: Arc<ResultCache<C>>,
    source: S,
}

impl<S, C> ElectionService<S, C>
where
    S: ResultSource,
    C: Clock,
{
    /// Creates a service over an existing cache and source.
    pub fn new(cache: Arc<ResultCache<C>>, source: S) -> Self {
        Self { cache, source }
    }

    /// Returns results for `election_id`, fetching them only on a cache miss.
    ///
    /// Source failures are returned unchanged and leave the cache untouched.
    pub async fn results(&self, election_id: &str) -> Result<Arc<ElectionResult>> {
        let election_id = election_id.trim();
        if election_id.is_empty() {
            return Err(ElectionError::InvalidKey(
                "election_id cannot be empty".to_string(),
            ));
        }

        let key = cache_key(RESULTS_NAMESPACE, &[("election_id", election_id)])?;
        if let Some(cached) = self.cache.get(&key) {
            debug!(election_id, "serving results from cache");
            return Ok(cached);
        }

        debug!(election_id, "fetching results from source");
        let fresh = match self.source.fetch(election_id).await {
            Ok(result) => Arc::new(result),
            Err(err) => {
                warn!(election_id, error = %err, "result fetch failed");
                return Err(err);
            }
        };

        self.cache.set(key, Arc::clone(&fresh));
        Ok(fresh)
    }

    /// Drops every cached result.
    pub fn invalidate_all(&self) {
        self.cache.clear();
        info!("election result cache cleared");
    }

    /// Statistics of the underlying cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The shared cache handle.
    pub fn cache(&self) -> &Arc<ResultCache<C>> {
        &self.cache
    }
}
