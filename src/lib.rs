#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Choosing a Store
//!
//! | Type | Key bound | Lookup | Best Use Case |
//! |------|-----------|--------|---------------|
//! | [`LruCache`] | `PartialEq` | O(n) scan | Small caches of large values; keys that cannot be hashed |
//! | [`IndexedLruCache`] | `Hash + Eq + Clone` | O(1) average | Larger capacities |
//! | `ConcurrentLruCache` | `Hash + Eq + Clone` | O(1) average, one lock | Shared across threads (feature `concurrent`) |
//!
//! All three evict the same entry for the same sequence of calls.
//!
//! ## Reads
//!
//! ```text
//!   peek(&k)        -> Option<&V>   borrow, entry becomes most recently used
//!   peek_mut(&k)    -> Option<&mut V>
//!   peek_quiet(&k)  -> Option<&V>   borrow, recency untouched
//!   take(&k)        -> Option<V>    move out, slot is freed
//! ```
//!
//! Absence is always `None`. A cache never hands out a placeholder value for a
//! key it does not hold, and a value that has been moved out with `take` leaves
//! no entry behind.
//!
//! ```rust
//! use lru_store::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(3).unwrap());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//!
//! cache.peek(&"a");          // "a" becomes most recently used
//! cache.put("d", 4);         // "b" evicted (least recently used)
//! assert!(cache.peek(&"b").is_none());
//!
//! cache.peek_quiet(&"c");    // does not refresh "c"
//! cache.put("e", 5);         // "c" evicted
//! assert!(!cache.contains(&"c"));
//! ```
//!
//! ## Construction
//!
//! A zero-capacity cache is a configuration error, rejected up front:
//!
//! ```rust
//! use lru_store::{CapacityError, IndexedLruCache, LruCache};
//! use lru_store::config::LruCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! // Type-level: NonZeroUsize
//! let cache: LruCache<u32, String> = LruCache::new(NonZeroUsize::new(8).unwrap());
//!
//! // Runtime: raw counts are checked
//! assert_eq!(LruCache::<u32, String>::try_new(0).unwrap_err(), CapacityError::Zero);
//!
//! // From configuration
//! let config = LruCacheConfig { capacity: NonZeroUsize::new(1024).unwrap() };
//! let indexed: IndexedLruCache<u64, Vec<u8>> = IndexedLruCache::init(config, None);
//! assert_eq!(indexed.capacity(), 1024);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: linear-scan LRU store
//! - [`indexed`]: hash-indexed LRU store
//! - [`entry`]: the key/value pair both stores are made of
//! - [`config`]: configuration structures
//! - [`metrics`]: activity counters
//! - [`error`]: construction errors
//! - `concurrent`: mutex-guarded wrapper (requires `concurrent` feature)

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Cache entry type.
///
/// `CacheEntry<K, V>` pairs a key with the value it owns. Entries are moved
/// between positions, never copied.
pub mod entry;

/// Construction errors.
pub mod error;

/// Slab-backed doubly linked list used by the indexed store.
///
/// Internal infrastructure; its slot indices are only meaningful to the cache
/// that owns the list.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Least Recently Used (LRU) cache with linear lookup.
///
/// Keys only need `PartialEq`. Suited to small capacities.
pub mod lru;

/// Least Recently Used (LRU) cache with hashed lookup.
///
/// Observably identical to [`lru`], with O(1) average lookups.
pub mod indexed;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions, updates, takes and evictions,
/// reported through the [`metrics::CacheMetrics`] trait.
pub mod metrics;

/// Thread-safe wrapper around the indexed store.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use entry::CacheEntry;
pub use error::CapacityError;
pub use indexed::IndexedLruCache;
pub use lru::LruCache;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
