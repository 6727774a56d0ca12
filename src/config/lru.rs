//! Configuration for the Least Recently Used (LRU) caches.
//!
//! # Sizing Guidelines
//!
//! `capacity` is a count of entries, not bytes. The store is meant for values
//! that are expensive to build, so the right number is usually "how many of
//! these can I afford to keep alive at once":
//!
//! ```text
//! capacity = memory_budget / typical_value_size
//! ```
//!
//! **Example**: 256MB for decoded 4MB frames gives `capacity = 64`.
//!
//! For small capacities (tens of entries) the linear [`LruCache`](crate::LruCache)
//! is usually fastest. Beyond that, the hash-indexed store scales better.
//!
//! # Examples
//!
//! ```
//! use lru_store::config::LruCacheConfig;
//! use lru_store::LruCache;
//!
//! // Capacity read from a settings file or CLI flag
//! let requested: usize = 64;
//! let config = LruCacheConfig::try_from_capacity(requested).unwrap();
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config);
//! assert_eq!(cache.capacity(), 64);
//!
//! assert!(LruCacheConfig::try_from_capacity(0).is_err());
//! ```

use crate::error::CapacityError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed entry when a new key is inserted
/// into a full cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Fixed for the
///   lifetime of the cache.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Builds a configuration from a raw entry count.
    ///
    /// Returns [`CapacityError::Zero`] for a zero count, so the mistake is
    /// reported where the configuration is read rather than on first use.
    pub fn try_from_capacity(capacity: usize) -> Result<Self, CapacityError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CapacityError::Zero)?;
        Ok(Self { capacity })
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
