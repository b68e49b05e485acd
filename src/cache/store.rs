//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheEntry, CacheStats, Clock, MonotonicClock};

// == Expiring Cache ==
/// Thread-safe string-keyed cache whose entries all share one TTL.
///
/// Expiry is lazy: an entry past its TTL is only removed when a `get`
/// observes it. There is no background sweeper, so keys written once and
/// never read again stay resident until `clear` or process exit.
#[derive(Debug)]
pub struct ExpiringCache<V, C = MonotonicClock> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// Lifetime shared by every entry
    ttl: Duration,
    /// Time source used to stamp and age entries
    clock: C,
    /// Performance statistics
    stats: StatsRecorder,
}

impl<V> ExpiringCache<V, MonotonicClock> {
    // == Constructor ==
    /// Creates an empty cache with the given TTL and the monotonic system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, MonotonicClock)
    }
}

impl<V, C: Clock> ExpiringCache<V, C> {
    /// Creates an empty cache driven by a custom clock.
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
            stats: StatsRecorder::new(),
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` if the key was never set or its entry has expired.
    /// An expired entry is removed as a side effect of the read.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => {
                    self.stats.record_miss();
                    debug!(key, "cache miss");
                    return None;
                }
                Some(entry) if !entry.is_expired(self.clock.now(), self.ttl) => {
                    self.stats.record_hit();
                    debug!(key, "cache hit");
                    return Some(entry.value.clone());
                }
                Some(_) => {}
            }
        }

        // Re-check under the write lock: a concurrent set may have refreshed
        // the entry, or a concurrent get or clear may already have removed it.
        let mut entries = self.entries.write();
        let now = self.clock.now();
        match entries.get(key).map(|entry| entry.is_expired(now, self.ttl)) {
            Some(true) => {
                entries.remove(key);
                self.stats.record_expiration();
                debug!(key, "cache entry expired");
                None
            }
            Some(false) => {
                self.stats.record_hit();
                entries.get(key).map(|entry| entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value under `key`, stamping it with the current time.
    ///
    /// Any prior entry for the key is replaced whether or not it had expired,
    /// which also restarts its TTL.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let entry = CacheEntry::new(value, self.clock.now());
        debug!(key = %key, "cache set");
        self.entries.write().insert(key, entry);
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let removed = entries.len();
        entries.clear();
        debug!(removed, "cache cleared");
    }

    // == TTL ==
    /// Lifetime applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Number of resident entries, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }
}
