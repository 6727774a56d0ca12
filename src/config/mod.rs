//! Cache Configuration Module
//!
//! Configuration structures for the cache implementations. Each struct has
//! public fields so it can be written out as a literal:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: A zero capacity cannot be expressed with `NonZeroUsize`
//! - **No boilerplate**: No builder methods needed
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache), `IndexedLruCache` | Least Recently Used |
//!
//! The concurrent wrapper reuses `LruCacheConfig` unchanged: it guards a single
//! store, so there is nothing extra to configure.
//!
//! # Examples
//!
//! ```
//! use lru_store::config::LruCacheConfig;
//! use lru_store::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(64).unwrap(),
//! };
//!
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config);
//! assert_eq!(cache.capacity(), 64);
//! ```

pub mod lru;

pub use lru::LruCacheConfig;
