//! Cache Entry Type
//!
//! A `CacheEntry<K, V>` is the unit the entry store is made of: one key and
//! the value it owns. Both cache implementations keep their entries in
//! recency order, so an entry carries no timestamps or counters of its own;
//! its position in the store is its age.
//!
//! Entries are moved, never cloned. Relocating an entry to the
//! most-recently-used position moves the struct, and handing a value back to
//! the caller destructures it with [`CacheEntry::into_parts`] or
//! [`CacheEntry::into_value`].

use core::fmt;

/// One stored key/value pair.
///
/// # Examples
///
/// ```
/// use lru_store::entry::CacheEntry;
///
/// let entry = CacheEntry::new("frame:0", vec![0u8; 16]);
/// assert_eq!(entry.key, "frame:0");
/// assert_eq!(entry.value.len(), 16);
///
/// let (key, value) = entry.into_parts();
/// assert_eq!(key, "frame:0");
/// assert_eq!(value.len(), 16);
/// ```
pub struct CacheEntry<K, V> {
    /// The cached key
    pub key: K,

    /// The cached value
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates an entry owning `key` and `value`.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Replaces the stored value, returning the previous one.
    #[inline]
    pub fn replace_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry, returning the key and value.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Consumes the entry, returning only the value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
