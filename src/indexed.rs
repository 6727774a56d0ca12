//! Hash-Indexed LRU Cache Implementation
//!
//! [`IndexedLruCache`] behaves exactly like [`LruCache`](crate::LruCache):
//! same eviction order, same update and read semantics. The difference is
//! how it finds keys. Entries live in a slab-backed doubly linked list that is
//! the only record of recency order, and a hash map from key to list slot
//! turns every lookup into an O(1) probe.
//!
//! ```text
//!   map: key ──▶ slot
//!                 │
//!   list:  [LRU] ◀─▶ ... ◀─▶ [slot] ◀─▶ ... ◀─▶ [MRU]
//! ```
//!
//! Every mutation updates the list and the map together before returning, so
//! the two never disagree about which keys are present.
//!
//! # Performance Characteristics
//!
//! | Operation | Time |
//! |-----------|------|
//! | `put` / `push` | O(1) average |
//! | `peek` / `peek_mut` / `peek_quiet` | O(1) average |
//! | `take` | O(1) average |
//! | eviction | O(1) |
//!
//! The map stores a second copy of each key, so keys must be `Clone`. Values
//! are never cloned.
//!
//! # Thread Safety
//!
//! Not thread-safe. `ConcurrentLruCache` (feature `concurrent`) wraps this
//! type in a mutex.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::error::CapacityError;
use crate::list::{self, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use tracing::trace;

#[cfg(feature = "hashbrown")]
pub use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
pub use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A bounded, recency-ordered key/value store with hashed lookup.
///
/// # Examples
///
/// ```
/// use lru_store::IndexedLruCache;
/// use core::num::NonZeroUsize;
///
/// let mut cache = IndexedLruCache::new(NonZeroUsize::new(3).unwrap());
/// cache.put("a", vec![0u8; 1024]);
/// cache.put("b", vec![1u8; 1024]);
/// cache.put("c", vec![2u8; 1024]);
///
/// // Refresh "a", then insert: "b" is now the oldest entry
/// assert!(cache.peek(&"a").is_some());
/// cache.put("d", vec![3u8; 1024]);
/// assert!(!cache.contains(&"b"));
///
/// let buffer = cache.take(&"a").unwrap();
/// assert_eq!(buffer.len(), 1024);
/// ```
pub struct IndexedLruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, usize, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq + Clone, V> IndexedLruCache<K, V, DefaultHashBuilder> {
    /// Creates an empty cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> Self {
        Self::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates an empty cache from a raw entry count.
    ///
    /// A zero count is rejected immediately with [`CapacityError::Zero`].
    pub fn try_new(capacity: usize) -> Result<Self, CapacityError> {
        let config = LruCacheConfig::try_from_capacity(capacity)?;
        Ok(Self::init(config, None))
    }

    /// Creates an empty cache from a configuration and an optional hasher.
    ///
    /// `None` uses [`DefaultHashBuilder`].
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::with_hasher(config.capacity, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> IndexedLruCache<K, V, S> {
    /// Creates an empty cache with the given capacity and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        IndexedLruCache {
            config: LruCacheConfig { capacity: cap },
            list: List::with_capacity(cap.get()),
            map: HashMap::with_capacity_and_hasher(cap.get(), hash_builder),
            metrics: LruCacheMetrics::new(),
        }
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
    /// On update this is the argument key paired with the old value; on
    /// eviction it is the evicted entry.
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&slot) = self.map.get(&key) {
            self.metrics.record_update();
            trace!(slot, "indexed lru: updated existing entry");
            self.list.move_to_back(slot);
            let entry = self.list.get_mut(slot)?;
            let old_value = entry.replace_value(value);
            return Some((key, old_value));
        }

        let evicted = if self.list.len() >= self.capacity() {
            self.evict()
        } else {
            None
        };

        let slot = self.list.push_back(CacheEntry::new(key.clone(), value));
        self.map.insert(key, slot);
        self.metrics.core.record_insertion();
        evicted
    }

    /// Lends the value for `key` and marks the entry most recently used.
    pub fn peek<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.peek_mut(key).map(|v| &*v)
    }

    /// Mutable form of [`peek`](Self::peek).
    pub fn peek_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&slot) = self.map.get(key) else {
            self.metrics.core.record_miss();
            trace!("indexed lru: miss");
            return None;
        };
        self.metrics.core.record_hit();
        self.list.move_to_back(slot);
        self.list.get_mut(slot).map(|e| &mut e.value)
    }

    /// Lends the value for `key` without changing recency order.
    pub fn peek_quiet<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = *self.map.get(key)?;
        self.list.get(slot).map(|e| &e.value)
    }

    /// Returns true if an entry with an equal key is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Removes the entry for `key` and returns ownership of its value.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(slot) = self.map.remove(key) else {
            self.metrics.core.record_miss();
            trace!("indexed lru: miss");
            return None;
        };
        let entry = self.list.remove(slot)?;
        self.metrics.record_take();
        Some(entry.into_value())
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_front()?;
        self.map.remove(&entry.key);
        Some(entry.into_parts())
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let evicted = self.pop_lru()?;
        self.metrics.core.record_eviction();
        trace!(
            len = self.list.len(),
            capacity = self.capacity(),
            "indexed lru: evicted least recently used entry"
        );
        Some(evicted)
    }
}

impl<K, V, S> IndexedLruCache<K, V, S> {
    /// Maximum number of entries; fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity.get()
    }

    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Activity counters for this cache.
    #[inline]
    pub fn lru_metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Drops every stored value. Capacity and metrics are kept.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    /// Iterates from least to most recently used without touching recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// The entry that the next eviction would discard.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.front().map(|e| (&e.key, &e.value))
    }
}

impl<K, V, S> CacheMetrics for IndexedLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for IndexedLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedLruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<'a, K, V, S> IntoIterator for &'a IndexedLruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an [`IndexedLruCache`], least recently used first.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, CacheEntry<K, V>>,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LruCache;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn cache<K: Hash + Eq + Clone, V>(cap: usize) -> IndexedLruCache<K, V> {
        IndexedLruCache::new(NonZeroUsize::new(cap).unwrap())
    }

    fn keys<V, S>(cache: &IndexedLruCache<&'static str, V, S>) -> Vec<&'static str> {
        cache.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_indexed_put_peek() {
        let mut cache = cache(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.peek(&"apple"), Some(&1));
        cache.put("cherry", 3);
        assert_eq!(cache.peek(&"banana"), None);
        assert_eq!(cache.peek(&"apple"), Some(&1));
        assert_eq!(cache.peek(&"cherry"), Some(&3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_indexed_update_keeps_len() {
        let mut cache = cache(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.push("a", 10), Some(("a", 1)));
        assert_eq!(cache.len(), 3);
        assert_eq!(keys(&cache), ["b", "c", "a"]);
        assert_eq!(cache.push("d", 4), Some(("b", 2)));
        assert_eq!(cache.take(&"a"), Some(10));
    }

    #[test]
    fn test_indexed_take_then_reinsert_reuses_slot() {
        let mut cache = cache(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.take(&"a"), Some(1));
        assert_eq!(cache.take(&"a"), None);
        cache.put("c", 3);
        cache.put("d", 4);
        assert_eq!(keys(&cache), ["c", "d"]);
        assert_eq!(cache.peek_lru(), Some((&"c", &3)));
    }

    #[test]
    fn test_indexed_quiet_reads() {
        let mut cache = cache(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.peek_quiet(&"a"), Some(&1));
        assert!(cache.contains(&"b"));
        cache.put("d", 4);
        assert!(!cache.contains(&"a"));
        assert_eq!(cache.peek_quiet(&"a"), None);
    }

    #[test]
    fn test_indexed_borrowed_string_lookup() {
        let mut cache = cache(2);
        cache.put(String::from("apple"), 1);
        if let Some(v) = cache.peek_mut("apple") {
            *v += 1;
        }
        assert_eq!(cache.take("apple"), Some(2));
    }

    #[test]
    fn test_indexed_clear_and_pop() {
        let mut cache = cache(2);
        cache.put(1u32, "one");
        cache.put(2u32, "two");
        assert_eq!(cache.pop_lru(), Some((1, "one")));
        assert!(!cache.contains(&1));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.pop_lru(), None);
        cache.put(3, "three");
        assert_eq!(cache.iter().count(), 1);
    }

    #[test]
    fn test_indexed_custom_hasher() {
        let mut cache: IndexedLruCache<u64, u64, DefaultHashBuilder> =
            IndexedLruCache::with_hasher(NonZeroUsize::new(4).unwrap(), Default::default());
        for i in 0..10 {
            cache.put(i, i * i);
        }
        assert_eq!(cache.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [6, 7, 8, 9]);
    }

    #[test]
    fn test_indexed_matches_linear_store() {
        let mut indexed = cache::<u32, u32>(5);
        let mut linear = LruCache::<u32, u32>::new(NonZeroUsize::new(5).unwrap());

        // Deterministic mixed workload over a key space larger than capacity.
        let mut state = 0x2545_f491u32;
        for step in 0..2_000u32 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let key = state % 9;
            match state % 4 {
                0 | 1 => assert_eq!(indexed.push(key, step), linear.push(key, step)),
                2 => assert_eq!(indexed.peek(&key), linear.peek(&key)),
                _ => assert_eq!(indexed.take(&key), linear.take(&key)),
            }
            assert!(indexed.len() <= indexed.capacity());
            assert!(indexed.iter().eq(linear.iter()));
        }
        assert_eq!(indexed.metrics(), linear.metrics());
    }

    #[test]
    fn test_indexed_try_new() {
        assert_eq!(
            IndexedLruCache::<u8, u8>::try_new(0).unwrap_err(),
            CapacityError::Zero
        );
        let config = LruCacheConfig::try_from_capacity(2).unwrap();
        let cache: IndexedLruCache<u8, u8> = IndexedLruCache::init(config, None);
        assert_eq!(cache.capacity(), 2);
    }
}
