//! Concurrent Cache Wrapper
//!
//! The caches in this crate are single-threaded: every mutating call takes
//! `&mut self`. Sharing one across threads requires a lock held for the full
//! duration of each call. [`ConcurrentLruCache`] packages that contract as a
//! type: one [`parking_lot::Mutex`] around one [`IndexedLruCache`].
//!
//! ## Why One Mutex?
//!
//! Lock striping (one lock per shard of the key space) scales better, but it
//! makes recency order per-shard: a key could be evicted from one shard while
//! another shard holds older entries. This wrapper keeps a single global
//! order, so eviction is exactly least-recently-used across all keys.
//!
//! ## Why Mutex Instead of RwLock?
//!
//! Every refreshing read moves an entry to the back of the recency list, so
//! reads are writes. An `RwLock` would hand out the write lock on every call
//! anyway.
//!
//! # Borrowed Access
//!
//! A reference into the cache cannot outlive the lock guard, so `peek` is
//! offered in two forms:
//!
//! - [`peek_with`](ConcurrentLruCache::peek_with) runs a closure on the
//!   borrowed value while the lock is held.
//! - [`peek_cloned`](ConcurrentLruCache::peek_cloned) clones the value out,
//!   for `V: Clone`.
//!
//! # Example
//!
//! ```rust
//! use lru_store::ConcurrentLruCache;
//! use std::num::NonZeroUsize;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(NonZeroUsize::new(100).unwrap()));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..50 {
//!                 cache.put(format!("key-{}-{}", t, i), vec![0u8; 64]);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(cache.len(), 100);
//! ```

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::CapacityError;
use crate::indexed::{DefaultHashBuilder, IndexedLruCache};
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::Mutex;

/// A thread-safe LRU cache: an [`IndexedLruCache`] behind one mutex.
///
/// Every method locks for its whole duration, so each call observes and
/// leaves the cache in a consistent state and recency order is global.
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<IndexedLruCache<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V> ConcurrentLruCache<K, V, DefaultHashBuilder> {
    /// Creates an empty cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> Self {
        Self::from_cache(IndexedLruCache::new(cap))
    }

    /// Creates an empty cache from a raw entry count.
    pub fn try_new(capacity: usize) -> Result<Self, CapacityError> {
        IndexedLruCache::try_new(capacity).map(Self::from_cache)
    }

    /// Creates an empty cache from a configuration and an optional hasher.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::from_cache(IndexedLruCache::init(config, hasher))
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Wraps an existing cache, keeping its contents and metrics.
    pub fn from_cache(cache: IndexedLruCache<K, V, S>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// See [`IndexedLruCache::put`].
    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    /// See [`IndexedLruCache::push`].
    pub fn push(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().push(key, value)
    }

    /// See [`IndexedLruCache::take`].
    pub fn take<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().take(key)
    }

    /// Runs `f` on the value for `key` while holding the lock, refreshing recency.
    ///
    /// Returns `None` without calling `f` if the key is absent.
    pub fn peek_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().peek(key).map(f)
    }

    /// Mutable form of [`peek_with`](Self::peek_with).
    pub fn peek_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.lock().peek_mut(key).map(f)
    }

    /// Clones the value for `key` out of the cache, refreshing recency.
    pub fn peek_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lru()
    }

    /// Unwraps the inner cache.
    pub fn into_inner(self) -> IndexedLruCache<K, V, S> {
        self.inner.into_inner()
    }
}

impl<K, V, S> ConcurrentLruCache<K, V, S> {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<K, V, S> CacheMetrics for ConcurrentLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ConcurrentLruCache")
            .field("capacity", &inner.capacity())
            .field("len", &inner.len())
            .finish()
    }
}
