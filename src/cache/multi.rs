//! Thread-safe multi-value LRU cache with optional TTL.
//!
//! Stores an ordered sequence of values per key over the same engine as the
//! single-value front. Sequences are deep-copied on both sides of the cache
//! boundary: `insert*` copies the caller's slice into cache-owned storage,
//! and `get` hands back a fresh `Vec`. Neither side can mutate the other's
//! data after the call returns.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::core::CacheCore;
use crate::error::NotFound;

/// Thread-safe bounded LRU cache storing an ordered `Vec<V>` per key.
///
/// Cloning the cache clones the handle, not the contents: all clones share
/// the same underlying engine.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use lrukit::cache::multi::LruMultiCache;
///
/// let cache: LruMultiCache<&str, String> = LruMultiCache::new(8, Duration::ZERO);
///
/// let mut skills = vec!["manager".to_string(), "audit".to_string()];
/// cache.insert("john", &skills);
///
/// // Mutating the caller's slice afterwards does not reach the cache.
/// skills.push("java".to_string());
/// assert_eq!(cache.get(&"john").unwrap().len(), 2);
/// ```
#[derive(Clone)]
pub struct LruMultiCache<K, V> {
    inner: Arc<Mutex<CacheCore<K, Vec<V>>>>,
}

impl<K, V> LruMultiCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a cache with the given capacity and default TTL.
    ///
    /// A `capacity` of 0 creates a cache that accepts no entries. A `ttl`
    /// of [`Duration::ZERO`] disables the default TTL.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheCore::new(capacity, ttl))),
        }
    }

    /// Inserts or overwrites the sequence for `key`, deep-copying it into
    /// the cache. No expiry deadline is stamped; an overwrite leaves any
    /// existing deadline in place.
    pub fn insert(&self, key: K, values: &[V]) {
        self.inner.lock().insert(key, values.to_vec());
    }

    /// Inserts or overwrites the sequence for `key`, deep-copying it and
    /// stamping `now + ttl` as the entry's deadline.
    pub fn insert_with_ttl(&self, key: K, values: &[V]) {
        self.inner.lock().insert_with_ttl(key, values.to_vec());
    }

    /// Returns a deep copy of the sequence for `key`, marking the entry
    /// most recently used.
    ///
    /// Fails with [`NotFound`] when the key is absent or its deadline has
    /// passed; an expired entry is removed before this call returns.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use lrukit::cache::multi::LruMultiCache;
    ///
    /// let cache: LruMultiCache<u32, u8> = LruMultiCache::new(4, Duration::ZERO);
    /// cache.insert(1, &[1, 2, 3]);
    ///
    /// let mut values = cache.get(&1).unwrap();
    /// values.push(4);
    ///
    /// // The returned Vec is the caller's own copy.
    /// assert_eq!(cache.get(&1).unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn get(&self, key: &K) -> Result<Vec<V>, NotFound<K>> {
        self.inner.lock().get(key).map(Vec::clone)
    }

    /// Removes `key`; fails with [`NotFound`] if it is absent.
    pub fn remove(&self, key: &K) -> Result<(), NotFound<K>> {
        self.inner.lock().remove(key)
    }

    /// Removes `key` if present; absent keys are a no-op.
    pub fn remove_silent(&self, key: &K) {
        self.inner.lock().remove_silent(key);
    }

    /// Returns `true` if `key` has a live entry. Does not touch recency
    /// order.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Current number of entries (keys, not values).
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// The default TTL; zero means disabled.
    pub fn ttl(&self) -> Duration {
        self.inner.lock().ttl()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

/// Diagnostic dump: capacity header plus one `key: .., values: ..` line per
/// live entry, in unspecified order.
impl<K, V> fmt::Display for LruMultiCache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.lock().write_dump(f, "values")
    }
}

impl<K, V> fmt::Debug for LruMultiCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.inner.lock();
        f.debug_struct("LruMultiCache")
            .field("len", &core.len())
            .field("capacity", &core.capacity())
            .finish_non_exhaustive()
    }
}
