//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`NotFound`]: Returned by lookup and removal operations when a key is
//!   absent, or present but past its expiry deadline.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use lrukit::cache::single::LruCache;
//! use lrukit::error::NotFound;
//!
//! let cache: LruCache<u32, String> = LruCache::new(10, Duration::ZERO);
//!
//! let err = cache.get(&7).unwrap_err();
//! assert_eq!(err, NotFound::new(7));
//! assert_eq!(*err.key(), 7);
//! ```

use std::fmt;

/// Error returned when a key is not present in the cache.
///
/// Carries the offending key so callers can tell which lookup failed when
/// several are in flight. Two `NotFound` values compare equal exactly when
/// their keys do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound<K> {
    key: K,
}

impl<K> NotFound<K> {
    /// Creates a new `NotFound` for the given key.
    #[inline]
    pub fn new(key: K) -> Self {
        Self { key }
    }

    /// Returns the key that was not found.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the error, returning the key.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Debug> fmt::Display for NotFound<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry not found for key {:?}", self.key)
    }
}

impl<K: fmt::Debug> std::error::Error for NotFound<K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_key() {
        let err = NotFound::new("page_7");
        assert_eq!(err.to_string(), "entry not found for key \"page_7\"");
    }

    #[test]
    fn debug_includes_key() {
        let err = NotFound::new(42);
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("42"));
    }

    #[test]
    fn key_accessors() {
        let err = NotFound::new(7u32);
        assert_eq!(*err.key(), 7);
        assert_eq!(err.into_key(), 7);
    }

    #[test]
    fn equality_is_by_key() {
        let a = NotFound::new("k1");
        let b = NotFound::new("k1");
        let c = NotFound::new("k2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn clone_and_eq() {
        let a = NotFound::new(1);
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<NotFound<u32>>();
    }
}
