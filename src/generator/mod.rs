//! Compliment generation.
//!
//! [`ComplimentGenerator`] is the public entry point. One call to
//! [`generate`](ComplimentGenerator::generate):
//!
//! 1. derives the cache key from the options,
//! 2. reads the cached compliments for that key,
//! 3. drops the ones shown recently, unless that leaves fewer than three
//!    out of a cache of more than five, in which case the whole cache is
//!    the pool again,
//! 4. picks uniformly from the pool, or synthesizes a fresh compliment from
//!    the [`FallbackBank`] (up to five redraws against recent repeats) and
//!    appends it to the cache,
//! 5. personalizes the result once, records it in the recent history and
//!    returns it.
//!
//! The cache stores compliments without the recipient name; the history
//! stores what was shown. Repeat checks therefore compare the personalized
//! form of each candidate.
//!
//! Cache failures never fail a generation. Only a defect in the content
//! bank (an empty list) is returned as an error.

mod builder;

pub use builder::{Plaudit, PlauditBuilder};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::bank::{FallbackBank, personalize};
use crate::cache::{CacheStats, ComplimentCache, RecentHistory, record_store_error};
use crate::types::{GenerateOptions, Generated, Source};
use crate::{Result, telemetry};

/// Below this many fresh candidates the variety override may kick in.
const MIN_FRESH_CANDIDATES: usize = 3;

/// The override only applies to caches larger than this.
const MIN_CACHE_FOR_OVERRIDE: usize = 5;

/// Redraws allowed when synthesis keeps producing recent repeats.
const MAX_SYNTHESIS_ATTEMPTS: usize = 5;

/// Cache-first compliment generator with anti-repeat filtering.
///
/// Owns its recent history, so generations take `&mut self` and run one at
/// a time. Build one with [`Plaudit::builder()`].
pub struct ComplimentGenerator {
    cache: ComplimentCache,
    history: RecentHistory,
    bank: FallbackBank,
    rng: StdRng,
}

impl ComplimentGenerator {
    /// Generate one compliment.
    pub async fn generate(&mut self, options: &GenerateOptions) -> Result<String> {
        self.generate_detailed(options).await.map(|g| g.text)
    }

    /// Generate one compliment, reporting where it came from.
    pub async fn generate_detailed(&mut self, options: &GenerateOptions) -> Result<Generated> {
        let key = options.cache_key();
        let name = options.recipient_name.as_deref();
        let mut degraded = false;
        // Malformed cache data is overwritten by the next add; an
        // unreachable store is left alone for the rest of the call.
        let mut write_back = true;

        let cached = match self.cache.try_get_cached(&key).await {
            Ok(cached) => cached.unwrap_or_default(),
            Err(e) => {
                record_store_error("get", &e);
                degraded = true;
                write_back = !e.is_storage();
                Vec::new()
            }
        };

        let history = &self.history;
        let pool = candidate_pool(&cached, |c| history.contains(&personalize(c, name)));

        let (text, source) = match pool.choose(&mut self.rng) {
            Some(choice) => (personalize(choice, name), Source::Cache),
            None => {
                let base = self.synthesize(options)?;
                if write_back {
                    if let Err(e) = self.cache.try_add(&key, &base).await {
                        record_store_error("add", &e);
                        degraded = true;
                    }
                }
                (personalize(&base, name), Source::Fallback)
            }
        };

        self.history.record(text.clone());
        metrics::counter!(telemetry::GENERATIONS_TOTAL, "source" => source.as_str()).increment(1);
        debug!(key, source = source.as_str(), degraded, "generated compliment");

        Ok(Generated {
            text,
            source,
            cache_key: key,
            degraded,
        })
    }

    /// Draw from the bank until the result is not a recent repeat, giving
    /// up after [`MAX_SYNTHESIS_ATTEMPTS`] redraws.
    fn synthesize(&mut self, options: &GenerateOptions) -> Result<String> {
        let name = options.recipient_name.as_deref();
        let mut candidate =
            self.bank
                .synthesize(options.kind, options.specificity, &mut self.rng)?;

        let mut attempts = 0;
        while self.history.contains(&personalize(&candidate, name)) {
            if attempts == MAX_SYNTHESIS_ATTEMPTS {
                metrics::counter!(telemetry::SYNTHESIS_EXHAUSTED_TOTAL).increment(1);
                debug!(attempts, "accepting a recent repeat");
                break;
            }
            candidate = self
                .bank
                .synthesize(options.kind, options.specificity, &mut self.rng)?;
            attempts += 1;
        }
        Ok(candidate)
    }

    /// Remove every cached compliment. Failures are logged, not returned.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Cache counters; zeros if the store is unavailable.
    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// The underlying cache, for the fallible `try_*` operations.
    pub fn cache(&self) -> &ComplimentCache {
        &self.cache
    }

    pub fn history(&self) -> &RecentHistory {
        &self.history
    }

    /// Forget recently shown compliments.
    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    pub fn bank(&self) -> &FallbackBank {
        &self.bank
    }
}

/// Cached compliments eligible for selection.
///
/// Recent ones are filtered out, except that the full list is used when
/// filtering leaves fewer than three of more than five.
pub(crate) fn candidate_pool<'a>(
    cached: &'a [String],
    is_recent: impl Fn(&str) -> bool,
) -> Vec<&'a str> {
    let fresh: Vec<&str> = cached
        .iter()
        .map(String::as_str)
        .filter(|c| !is_recent(*c))
        .collect();

    if fresh.len() < MIN_FRESH_CANDIDATES && cached.len() > MIN_CACHE_FOR_OVERRIDE {
        cached.iter().map(String::as_str).collect()
    } else {
        fresh
    }
}
