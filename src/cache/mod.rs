//! Persistent compliment cache.
//!
//! [`ComplimentCache`] keeps previously generated compliments per cache key
//! (`{type}-{specificity}-{safe|any}`) in a single JSON blob stored under
//! one well-known key of a [`KeyValueStore`]:
//!
//! ```json
//! { "animal-high-safe": { "compliments": ["..."], "timestamp": 1700000000000 } }
//! ```
//!
//! Entries older than the TTL are treated as absent on read but stay in
//! storage until the next [`add`](ComplimentCache::add) for the same key
//! refreshes them.
//!
//! # Failure policy
//!
//! Every operation comes in two flavours. The `try_*` methods return the
//! underlying [`PlauditError`] so callers can observe degraded mode. The
//! plain methods absorb failures: they log, bump
//! [`STORE_ERRORS_TOTAL`](crate::telemetry::STORE_ERRORS_TOTAL) and act as
//! if the store held nothing. Malformed blobs are never an error for
//! writers; [`try_add`](ComplimentCache::try_add) starts over from an empty
//! mapping. A single malformed entry only costs that entry: it reads as
//! absent and the next write drops it.

pub mod history;

pub use history::{DEFAULT_HISTORY_SIZE, RecentHistory};

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::KeyValueStore;
use crate::{PlauditError, Result, telemetry};

/// Store key the whole cache lives under.
pub const DEFAULT_STORAGE_KEY: &str = "complimentCache";

/// Configuration for the compliment cache.
///
/// ```rust
/// # use plaudit::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_per_key(50)
///     .ttl(Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Age after which an entry is no longer served. Default: 24 hours.
    pub ttl: Duration,
    /// Maximum compliments kept per key, oldest evicted first. Default: 20.
    pub max_per_key: usize,
    /// Store key holding the serialized cache. Default: `complimentCache`.
    pub storage_key: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 3600),
            max_per_key: 20,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl CacheConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time-to-live for entries.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the per-key capacity.
    pub fn max_per_key(mut self, n: usize) -> Self {
        self.max_per_key = n;
        self
    }

    /// Set the store key the cache is persisted under.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

/// Cached compliments for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Insertion order, no duplicates.
    pub compliments: Vec<String>,
    /// Last refresh, epoch milliseconds.
    pub timestamp: i64,
}

/// The persisted structure: cache key to entry.
pub type CacheMap = BTreeMap<String, CacheEntry>;

/// Cache introspection counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of keys in the persisted cache, expired ones included.
    pub cached_types: usize,
    /// Sum of list lengths across all keys.
    pub total_cached_compliments: usize,
}

/// Keyed, time-expiring compliment cache backed by a [`KeyValueStore`].
#[derive(Clone)]
pub struct ComplimentCache {
    store: Arc<dyn KeyValueStore>,
    config: CacheConfig,
}

impl ComplimentCache {
    /// Create a cache over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>, config: CacheConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Read and parse the persisted cache. `Ok(None)` if nothing is stored.
    ///
    /// A blob that is not a JSON object is an `Err(Json)`. Individual
    /// entries of the wrong shape are skipped so their siblings stay usable.
    async fn load(&self) -> Result<Option<CacheMap>> {
        let Some(raw) = self.store.get(&self.config.storage_key).await? else {
            return Ok(None);
        };
        let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(&raw)?;

        let mut cache = CacheMap::new();
        for (key, value) in entries {
            match serde_json::from_value::<CacheEntry>(value) {
                Ok(entry) => {
                    cache.insert(key, entry);
                }
                Err(e) => warn!(key = %key, error = %e, "skipping malformed cache entry"),
            }
        }
        Ok(Some(cache))
    }

    fn is_fresh(&self, entry: &CacheEntry, now_ms: i64) -> bool {
        let ttl_ms = i64::try_from(self.config.ttl.as_millis()).unwrap_or(i64::MAX);
        now_ms.saturating_sub(entry.timestamp) < ttl_ms
    }

    /// The whole persisted cache, expired entries included.
    pub async fn try_snapshot(&self) -> Result<CacheMap> {
        Ok(self.load().await?.unwrap_or_default())
    }

    /// Unexpired compliments for `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored, the key is unknown, its
    /// entry is malformed or it has expired. A blob that is not a JSON
    /// object is an `Err(Json)`.
    pub async fn try_get_cached(&self, key: &str) -> Result<Option<Vec<String>>> {
        let now_ms = now_millis();
        let mut cache = match self.load().await? {
            Some(cache) => cache,
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                return Ok(None);
            }
        };

        match cache.remove(key) {
            Some(entry) if self.is_fresh(&entry, now_ms) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                debug!(key, size = entry.compliments.len(), "cache hit");
                Ok(Some(entry.compliments))
            }
            Some(_) => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                debug!(key, "cache entry expired");
                Ok(None)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                Ok(None)
            }
        }
    }

    /// Like [`try_get_cached`](Self::try_get_cached), treating any failure as a miss.
    pub async fn get_cached(&self, key: &str) -> Option<Vec<String>> {
        self.try_get_cached(key)
            .await
            .unwrap_or_else(|e| {
                record_store_error("get", &e);
                None
            })
    }

    /// Append `compliment` to the entry for `key` and persist the cache.
    ///
    /// Duplicates are not appended. When the entry grows past
    /// `max_per_key`, the oldest compliments are evicted. The entry's
    /// timestamp is refreshed either way. An unparsable stored blob is
    /// replaced rather than reported.
    pub async fn try_add(&self, key: &str, compliment: &str) -> Result<()> {
        let mut cache = match self.load().await {
            Ok(cache) => cache.unwrap_or_default(),
            Err(PlauditError::Json(e)) => {
                warn!(error = %e, "discarding malformed compliment cache");
                CacheMap::new()
            }
            Err(e) => return Err(e),
        };

        let now_ms = now_millis();
        let entry = cache.entry(key.to_string()).or_insert_with(|| CacheEntry {
            compliments: Vec::new(),
            timestamp: now_ms,
        });

        if !entry.compliments.iter().any(|c| c == compliment) {
            entry.compliments.push(compliment.to_string());
            let overflow = entry
                .compliments
                .len()
                .saturating_sub(self.config.max_per_key);
            entry.compliments.drain(..overflow);
        }
        entry.timestamp = now_ms;

        let raw = serde_json::to_string(&cache)?;
        self.store.set(&self.config.storage_key, &raw).await
    }

    /// Best-effort [`try_add`](Self::try_add).
    pub async fn add(&self, key: &str, compliment: &str) {
        if let Err(e) = self.try_add(key, compliment).await {
            record_store_error("add", &e);
        }
    }

    /// Remove the entire persisted cache.
    pub async fn try_clear(&self) -> Result<()> {
        self.store.remove(&self.config.storage_key).await
    }

    /// Best-effort [`try_clear`](Self::try_clear).
    pub async fn clear(&self) {
        if let Err(e) = self.try_clear().await {
            record_store_error("clear", &e);
        }
    }

    /// Count keys and compliments in the persisted cache.
    pub async fn try_stats(&self) -> Result<CacheStats> {
        let cache = self.try_snapshot().await?;
        Ok(CacheStats {
            cached_types: cache.len(),
            total_cached_compliments: cache.values().map(|e| e.compliments.len()).sum(),
        })
    }

    /// Like [`try_stats`](Self::try_stats), reporting zeros on failure.
    pub async fn stats(&self) -> CacheStats {
        self.try_stats().await.unwrap_or_else(|e| {
            record_store_error("stats", &e);
            CacheStats::default()
        })
    }
}

/// Log and count an absorbed cache failure.
pub(crate) fn record_store_error(operation: &'static str, error: &PlauditError) {
    metrics::counter!(telemetry::STORE_ERRORS_TOTAL, "operation" => operation).increment(1);
    warn!(operation, error = %error, "compliment cache unavailable, continuing without it");
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn cache_over(store: &MemoryStore, config: CacheConfig) -> ComplimentCache {
        ComplimentCache::new(Arc::new(store.clone()), config)
    }

    #[tokio::test]
    async fn fifo_eviction_at_capacity() {
        let store = MemoryStore::new();
        let cache = cache_over(&store, CacheConfig::new().max_per_key(3));
        for c in ["a", "b", "c", "d"] {
            cache.try_add("k", c).await.unwrap();
        }
        assert_eq!(
            cache.try_get_cached("k").await.unwrap().unwrap(),
            ["b", "c", "d"]
        );
    }

    #[tokio::test]
    async fn duplicate_refreshes_timestamp() {
        let store = MemoryStore::new();
        let stale = now_millis() - 1_000;
        let blob = format!(r#"{{"k":{{"compliments":["a"],"timestamp":{stale}}}}}"#);
        store.set(DEFAULT_STORAGE_KEY, &blob).await.unwrap();

        let cache = cache_over(&store, CacheConfig::new());
        cache.try_add("k", "a").await.unwrap();

        let snapshot = cache.try_snapshot().await.unwrap();
        assert_eq!(snapshot["k"].compliments, ["a"]);
        assert!(snapshot["k"].timestamp > stale);
    }

    #[test]
    fn freshness_boundary_is_exclusive() {
        let cache = ComplimentCache::new(
            Arc::new(MemoryStore::new()),
            CacheConfig::new().ttl(Duration::from_millis(100)),
        );
        let entry = CacheEntry {
            compliments: vec![],
            timestamp: 1_000,
        };
        assert!(cache.is_fresh(&entry, 1_099));
        assert!(!cache.is_fresh(&entry, 1_100));
    }

    #[test]
    fn stats_serialize_camel_case() {
        let stats = CacheStats {
            cached_types: 2,
            total_cached_compliments: 8,
        };
        assert_eq!(
            serde_json::to_string(&stats).unwrap(),
            r#"{"cachedTypes":2,"totalCachedCompliments":8}"#
        );
    }

    #[test]
    fn config_builder_pattern() {
        let config = CacheConfig::new()
            .ttl(Duration::from_secs(60))
            .max_per_key(5)
            .storage_key("other");
        assert_eq!(config.ttl, Duration::from_secs(60));
        assert_eq!(config.max_per_key, 5);
        assert_eq!(config.storage_key, "other");
    }
}
