//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides the linear-scan LRU store. It keeps its entries in one
//! `VecDeque`, ordered from least recently used (front) to most recently used
//! (back), and finds keys by comparing them for equality. Keys need nothing
//! beyond `PartialEq`: no hashing, no ordering, no cloning.
//!
//! # Algorithm
//!
//! - `put` of a new key into a full cache pops the front entry, then pushes the
//!   new entry at the back.
//! - `put` of an existing key swaps the value in place and moves the entry to
//!   the back. The length never changes and nothing is evicted.
//! - `peek` moves the entry it finds to the back and lends its value.
//! - `take` removes the entry it finds and hands the value to the caller.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Lookup (`peek`, `take`, `put`): O(n) scan
//!   - Eviction: O(1)
//!
//! - **Space Complexity**:
//!   - O(capacity); storage is reserved up front, so `put` does not allocate
//!
//! # When to Use
//!
//! The linear store is the right choice for small caches (tens of entries) of
//! large values, and for key types that cannot be hashed. For large
//! capacities use [`IndexedLruCache`](crate::IndexedLruCache), which has the
//! same observable behavior with O(1) lookups.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the
//! cache in a `Mutex` held for the duration of each call, or use
//! `ConcurrentLruCache` (feature `concurrent`).

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::error::CapacityError;
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::vec_deque;
use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::num::NonZeroUsize;
use tracing::trace;

/// A bounded, recency-ordered key/value store with linear lookup.
///
/// # Examples
///
/// ```
/// use lru_store::LruCache;
/// use core::num::NonZeroUsize;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Reading refreshes recency
/// assert_eq!(cache.peek(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used entry
/// cache.put("cherry", 3);
/// assert_eq!(cache.peek(&"banana"), None);
///
/// // Consuming reads move the value out and free the slot
/// assert_eq!(cache.take(&"apple"), Some(1));
/// assert_eq!(cache.take(&"apple"), None);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct LruCache<K, V> {
    config: LruCacheConfig,
    entries: VecDeque<CacheEntry<K, V>>,
    metrics: LruCacheMetrics,
}

impl<K, V> LruCache<K, V> {
    /// Creates an empty cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> Self {
        Self::init(LruCacheConfig { capacity: cap })
    }

    /// Creates an empty cache from a raw entry count.
    ///
    /// A zero count is rejected immediately with [`CapacityError::Zero`].
    pub fn try_new(capacity: usize) -> Result<Self, CapacityError> {
        LruCacheConfig::try_from_capacity(capacity).map(Self::init)
    }

    /// Creates an empty cache from a configuration.
    pub fn init(config: LruCacheConfig) -> Self {
        LruCache {
            config,
            entries: VecDeque::with_capacity(config.capacity.get()),
            metrics: LruCacheMetrics::new(),
        }
    }

    /// Maximum number of entries; fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity.get()
    }

    /// Same as [`capacity`](Self::capacity), as a `NonZeroUsize`.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Number of entries currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Activity counters for this cache.
    #[inline]
    pub fn lru_metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Drops every stored value. Capacity and metrics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates from least to most recently used without touching recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// The entry that the next eviction would discard.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.entries.front().map(|e| (&e.key, &e.value))
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        self.entries.pop_front().map(CacheEntry::into_parts)
    }

    /// Moves the entry at `pos` to the most-recently-used position.
    fn promote(&mut self, pos: usize) -> Option<&mut CacheEntry<K, V>> {
        let entry = self.entries.remove(pos)?;
        self.entries.push_back(entry);
        self.entries.back_mut()
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let entry = self.entries.pop_front()?;
        self.metrics.core.record_eviction();
        trace!(
            len = self.entries.len(),
            capacity = self.capacity(),
            "lru: evicted least recently used entry"
        );
        Some(entry.into_parts())
    }
}

impl<K: PartialEq, V> LruCache<K, V> {
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.entries.iter().position(|e| e.key.borrow() == key)
    }

    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// An existing value for an equal key is replaced and dropped. Inserting a
    /// new key into a full cache first evicts the least recently used entry.
    #[inline]
    pub fn put(&mut self, key: K, value: V) {
        let _ = self.push(key, value);
    }

    /// Like [`put`](Self::put), but returns whatever left the cache.
    ///
    /// - Update of an existing key: `Some((key, old_value))`, where `key` is the
    ///   argument; the stored key is kept.
    /// - Insert into a full cache: the evicted `(key, value)`.
    /// - Otherwise `None`.
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(pos) = self.position(&key) {
            self.metrics.record_update();
            trace!(position = pos, "lru: updated existing entry");
            let entry = self.promote(pos)?;
            let old_value = entry.replace_value(value);
            return Some((key, old_value));
        }

        let evicted = if self.entries.len() >= self.capacity() {
            self.evict()
        } else {
            None
        };

        self.entries.push_back(CacheEntry::new(key, value));
        self.metrics.core.record_insertion();
        evicted
    }

    /// Lends the value for `key` and marks the entry most recently used.
    ///
    /// Returns `None` if no entry has an equal key.
    pub fn peek<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.peek_mut(key).map(|v| &*v)
    }

    /// Mutable form of [`peek`](Self::peek).
    pub fn peek_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        let Some(pos) = self.position(key) else {
            self.metrics.core.record_miss();
            trace!("lru: miss");
            return None;
        };
        self.metrics.core.record_hit();
        self.promote(pos).map(|e| &mut e.value)
    }

    /// Lends the value for `key` without changing recency order.
    pub fn peek_quiet<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.position(key)
            .and_then(|pos| self.entries.get(pos))
            .map(|e| &e.value)
    }

    /// Returns true if an entry with an equal key is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.position(key).is_some()
    }

    /// Removes the entry for `key` and returns ownership of its value.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        let Some(pos) = self.position(key) else {
            self.metrics.core.record_miss();
            trace!("lru: miss");
            return None;
        };
        let entry = self.entries.remove(pos)?;
        self.metrics.record_take();
        Some(entry.into_value())
    }
}

impl<K, V> CacheMetrics for LruCache<K, V> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`LruCache`], least recently used first.
pub struct Iter<'a, K, V> {
    inner: vec_deque::Iter<'a, CacheEntry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| (&e.key, &e.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
