//! Tests for the Concurrent Cache Wrapper
//!
//! The wrapper holds one lock for each call, so recency order stays global:
//! these tests check both the single-threaded LRU contract through the
//! wrapper and that capacity and key uniqueness survive contention.

#![cfg(feature = "concurrent")]

use lru_store::config::LruCacheConfig;
use lru_store::metrics::CacheMetrics;
use lru_store::ConcurrentLruCache;
use scoped_threadpool::Pool;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

const NUM_THREADS: u32 = 8;
const OPS_PER_THREAD: usize = 2_000;

fn make_cache<V>(cap: usize) -> ConcurrentLruCache<usize, V> {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    ConcurrentLruCache::init(config, None)
}

#[test]
fn test_concurrent_lru_basic_eviction() {
    let cache = make_cache(3);
    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);

    cache.put(4, 40);
    assert!(!cache.contains(&1), "Key 1 should have been evicted (was LRU)");
    assert_eq!(cache.peek_cloned(&4), Some(40));
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_concurrent_lru_access_prevents_eviction() {
    let cache = make_cache(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");

    assert_eq!(cache.peek_with(&1, |v| v.len()), Some(1));
    cache.put(4, "d");

    assert!(cache.contains(&1), "Key 1 was refreshed and should remain");
    assert!(!cache.contains(&2), "Key 2 should have been evicted");
}

#[test]
fn test_concurrent_lru_take_is_exclusive() {
    let cache = make_cache(OPS_PER_THREAD);
    for i in 0..OPS_PER_THREAD {
        cache.put(i, vec![i; 4]);
    }

    // Every key is taken exactly once, however the threads interleave.
    let taken = AtomicUsize::new(0);
    let mut pool = Pool::new(NUM_THREADS);
    pool.scoped(|scope| {
        for _ in 0..NUM_THREADS {
            let cache = &cache;
            let taken = &taken;
            scope.execute(move || {
                for i in 0..OPS_PER_THREAD {
                    if let Some(v) = cache.take(&i) {
                        assert_eq!(v, vec![i; 4]);
                        taken.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
    });

    assert_eq!(taken.load(Ordering::Relaxed), OPS_PER_THREAD);
    assert!(cache.is_empty());
}

#[test]
fn test_concurrent_lru_writes_maintain_capacity() {
    let cache = make_cache(100);
    let mut pool = Pool::new(NUM_THREADS);
    pool.scoped(|scope| {
        for t in 0..NUM_THREADS as usize {
            let cache = &cache;
            scope.execute(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = (t * 7919 + i) % 400;
                    match i % 4 {
                        0 | 1 => cache.put(key, t),
                        2 => {
                            let _ = cache.peek_cloned(&key);
                        }
                        _ => {
                            let _ = cache.take(&key);
                        }
                    }
                    assert!(cache.len() <= 100);
                }
            });
        }
    });

    let inner = cache.into_inner();
    let mut keys: Vec<usize> = inner.iter().map(|(k, _)| *k).collect();
    let len = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), len, "keys must stay pairwise distinct");
    assert!(len <= 100);
}

#[test]
fn test_concurrent_lru_metrics_count_every_call() {
    let cache = make_cache(16);
    let mut pool = Pool::new(4);
    pool.scoped(|scope| {
        for t in 0..4usize {
            let cache = &cache;
            scope.execute(move || {
                for i in 0..100 {
                    cache.put(t * 100 + i, i);
                    let _ = cache.peek_cloned(&(t * 100 + i));
                }
            });
        }
    });

    let metrics = cache.metrics();
    assert_eq!(metrics.get("insertions"), Some(&400.0));
    assert_eq!(metrics.get("requests"), Some(&400.0));
    assert_eq!(metrics.get("evictions"), Some(&384.0));
}
