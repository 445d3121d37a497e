//! Builder for configuring generator instances

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::ComplimentGenerator;
use crate::bank::FallbackBank;
use crate::cache::{CacheConfig, ComplimentCache, DEFAULT_HISTORY_SIZE, RecentHistory};
use crate::store::KeyValueStore;
use crate::{PlauditError, Result};

/// Main entry point for creating generator instances.
pub struct Plaudit;

impl Plaudit {
    /// Create a new builder for configuring the generator.
    pub fn builder() -> PlauditBuilder {
        PlauditBuilder::new()
    }
}

/// Builder for configuring generator instances.
pub struct PlauditBuilder {
    store: Option<Arc<dyn KeyValueStore>>,
    cache_config: CacheConfig,
    history: Option<RecentHistory>,
    history_size: usize,
    bank: Option<FallbackBank>,
    seed: Option<u64>,
}

impl Default for PlauditBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlauditBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            cache_config: CacheConfig::default(),
            history: None,
            history_size: DEFAULT_HISTORY_SIZE,
            bank: None,
            seed: None,
        }
    }

    /// Persist the cache in `store`.
    pub fn store(self, store: impl KeyValueStore + 'static) -> Self {
        self.shared_store(Arc::new(store))
    }

    /// Persist the cache in a store shared with other components.
    pub fn shared_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override cache TTL, capacity or storage key.
    pub fn cache_config(mut self, config: CacheConfig) -> Self {
        self.cache_config = config;
        self
    }

    /// Number of recent compliments to avoid repeating (default: 5).
    pub fn history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Start from an existing recent history instead of an empty one.
    ///
    /// Takes precedence over [`history_size`](Self::history_size).
    pub fn history(mut self, history: RecentHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Use a custom content bank instead of the built-in one.
    pub fn bank(mut self, bank: FallbackBank) -> Self {
        self.bank = Some(bank);
        self
    }

    /// Seed the random source for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the generator.
    pub fn build(self) -> Result<ComplimentGenerator> {
        let store = self.store.ok_or(PlauditError::NoStore)?;
        if self.cache_config.max_per_key == 0 {
            return Err(PlauditError::Configuration(
                "cache max_per_key must be at least 1".to_string(),
            ));
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(ComplimentGenerator {
            cache: ComplimentCache::new(store, self.cache_config),
            history: self
                .history
                .unwrap_or_else(|| RecentHistory::new(self.history_size)),
            bank: self.bank.unwrap_or_default(),
            rng,
        })
    }
}
