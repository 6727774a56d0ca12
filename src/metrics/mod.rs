//! Cache Metrics System
//!
//! Counters for cache activity, reported through the [`CacheMetrics`] trait
//! as a `BTreeMap<String, f64>`. A BTreeMap keeps the keys in a fixed order,
//! so two reports of the same activity always print the same way.
//!
//! Counting rules:
//! - Refreshing reads (`peek`, `peek_mut`) and consuming reads (`take`) are
//!   requests, and each one is either a hit or a miss.
//! - Quiet lookups (`peek_quiet`, `contains`, `iter`) are not requests; they
//!   take `&self` and leave no trace.
//! - A `put` of a new key is an insertion; a `put` of an existing key is an
//!   update (see [`LruCacheMetrics`]).
//! - Evictions count only entries displaced by the capacity bound, not
//!   entries the caller removed with `take`, `pop_lru` or `clear`.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Counters common to every cache in the crate.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of counted lookups
    pub requests: u64,

    /// Number of lookups that found the key
    pub cache_hits: u64,

    /// Number of new keys stored
    pub insertions: u64,

    /// Number of entries discarded to stay within capacity
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key entering the cache.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an entry discarded by the eviction policy.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Number of lookups that did not find their key.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Fraction of requests that were hits, or 0.0 before any request.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of requests that were misses, or 0.0 before any request.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.insertions > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.insertions as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics interface implemented by every cache in the crate.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// A static string identifying the eviction policy, e.g. `"LRU"`.
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_before_any_request() {
        let metrics = CoreCacheMetrics::new();
        assert_eq!(metrics.hit_rate(), 0.0);
        assert_eq!(metrics.miss_rate(), 0.0);
        assert!(!metrics.to_btreemap().contains_key("eviction_rate"));
    }

    #[test]
    fn test_hit_and_miss_accounting() {
        let mut metrics = CoreCacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();
        assert_eq!(metrics.requests, 4);
        assert_eq!(metrics.cache_misses(), 1);
        assert_eq!(metrics.hit_rate(), 0.75);
        assert_eq!(metrics.miss_rate(), 0.25);
    }

    #[test]
    fn test_btreemap_keys_are_sorted() {
        let mut metrics = CoreCacheMetrics::new();
        metrics.record_insertion();
        metrics.record_insertion();
        metrics.record_eviction();
        let map = metrics.to_btreemap();
        let keys: alloc::vec::Vec<&str> = map.keys().map(String::as_str).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert_eq!(map.get("eviction_rate"), Some(&0.5));
    }
}
