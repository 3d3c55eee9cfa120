//! Metrics collection module
//!
//! Tracks search volume, cache effectiveness and lookup outcomes.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-process counters
#[derive(Debug, Default)]
pub struct Metrics {
    searches: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    cache_expired: AtomicU64,
    generation_failures: AtomicU64,
    lookups: AtomicU64,
    lookup_misses: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_search(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// A stale entry was regenerated
    pub fn record_cache_expired(&self) {
        self.cache_expired.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_generation_failure(&self) {
        self.generation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup by id and whether it found anything
    pub fn record_lookup(&self, found: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Fraction of searches served from a fresh cache entry
    pub fn hit_rate(&self) -> f64 {
        let hits = self.cache_hits.load(Ordering::Relaxed);
        let total = hits
            + self.cache_misses.load(Ordering::Relaxed)
            + self.cache_expired.load(Ordering::Relaxed);

        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            cache_expired: self.cache_expired.load(Ordering::Relaxed),
            generation_failures: self.generation_failures.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            hit_rate: self.hit_rate(),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub searches: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_expired: u64,
    pub generation_failures: u64,
    pub lookups: u64,
    pub lookup_misses: u64,
    pub hit_rate: f64,
}
