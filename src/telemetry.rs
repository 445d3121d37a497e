//! Telemetry metric name constants.
//!
//! Centralised metric names for plaudit operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `plaudit_`. Counters end in `_total`.

/// Total compliments returned by the generator.
///
/// Labels: `source` ("cache" | "fallback").
pub const GENERATIONS_TOTAL: &str = "plaudit_generations_total";

/// Cache reads that returned an unexpired entry.
pub const CACHE_HITS_TOTAL: &str = "plaudit_cache_hits_total";

/// Cache reads that found nothing usable (absent or expired).
pub const CACHE_MISSES_TOTAL: &str = "plaudit_cache_misses_total";

/// Store failures absorbed by the cache.
///
/// Labels: `operation` ("get" | "add" | "clear" | "stats").
pub const STORE_ERRORS_TOTAL: &str = "plaudit_store_errors_total";

/// Synthesis loops that ran out of attempts and accepted a repeat.
pub const SYNTHESIS_EXHAUSTED_TOTAL: &str = "plaudit_synthesis_exhausted_total";
