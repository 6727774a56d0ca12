//! Construction errors.
//!
//! Once a cache exists none of its operations can fail: a missing key is an
//! ordinary `None`. The only error in the crate is asking for a cache that can
//! never hold an entry.

use core::fmt;

/// Error returned when a cache or configuration is built with an invalid capacity.
///
/// # Examples
///
/// ```
/// use lru_store::{CapacityError, LruCache};
///
/// let err = LruCache::<&str, i32>::try_new(0).unwrap_err();
/// assert_eq!(err, CapacityError::Zero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// A capacity of zero was requested.
    Zero,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityError::Zero => f.write_str("cache capacity must be at least one entry"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}
