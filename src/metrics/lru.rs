//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) caches.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-specific metrics (extends CoreCacheMetrics)
///
/// On top of the core counters, an LRU store distinguishes writes that
/// replaced an existing value (`updates`) and reads that moved a value out of
/// the cache (`takes`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Core metrics common to all caches
    pub core: CoreCacheMetrics,

    /// Number of `put` calls that replaced the value of an existing key
    pub updates: u64,

    /// Number of consuming reads that returned a value
    pub takes: u64,
}

impl LruCacheMetrics {
    /// Creates a zeroed set of LRU counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a `put` that replaced an existing value.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records a consuming read that found its key.
    pub fn record_take(&mut self) {
        self.core.record_hit();
        self.takes += 1;
    }

    /// Converts LRU metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("takes".to_string(), self.takes as f64);
        metrics.insert("updates".to_string(), self.updates as f64);
        metrics
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
