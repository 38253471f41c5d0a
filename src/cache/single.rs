//! Thread-safe single-value LRU cache with optional TTL.
//!
//! One value per key. A single `parking_lot::Mutex` guards the whole engine
//! so every operation — including `get`, which rewrites recency order — is
//! atomic with respect to all others. Values cross the cache boundary as
//! clones in both directions; callers never hold references into cache
//! storage.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::core::CacheCore;
use crate::error::NotFound;

/// Thread-safe bounded LRU cache storing one value per key.
///
/// Cloning the cache clones the handle, not the contents: all clones share
/// the same underlying engine.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use lrukit::cache::single::LruCache;
///
/// let cache: LruCache<u32, String> = LruCache::new(2, Duration::ZERO);
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
///
/// assert_eq!(cache.get(&1).unwrap(), "one");
///
/// // Key 1 was just read, so inserting a third entry evicts key 2.
/// cache.insert(3, "three".to_string());
/// assert!(cache.contains(&1));
/// assert!(!cache.contains(&2));
/// ```
#[derive(Clone)]
pub struct LruCache<K, V> {
    inner: Arc<Mutex<CacheCore<K, V>>>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a cache with the given capacity and default TTL.
    ///
    /// A `capacity` of 0 creates a cache that accepts no entries. A `ttl`
    /// of [`Duration::ZERO`] disables the default TTL, making
    /// [`insert_with_ttl`](Self::insert_with_ttl) equivalent to
    /// [`insert`](Self::insert).
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheCore::new(capacity, ttl))),
        }
    }

    /// Inserts or overwrites a value without stamping an expiry deadline.
    ///
    /// An overwrite leaves any deadline from an earlier
    /// [`insert_with_ttl`](Self::insert_with_ttl) in place.
    pub fn insert(&self, key: K, value: V) {
        self.inner.lock().insert(key, value);
    }

    /// Inserts or overwrites a value, stamping `now + ttl` as its deadline.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use lrukit::cache::single::LruCache;
    ///
    /// let cache: LruCache<&str, u32> = LruCache::new(8, Duration::from_secs(60));
    /// cache.insert_with_ttl("session", 42);
    /// assert_eq!(cache.get(&"session"), Ok(42));
    /// ```
    pub fn insert_with_ttl(&self, key: K, value: V) {
        self.inner.lock().insert_with_ttl(key, value);
    }

    /// Returns a clone of the value for `key`, marking it most recently
    /// used.
    ///
    /// Fails with [`NotFound`] when the key is absent or its deadline has
    /// passed; an expired entry is removed before this call returns.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use lrukit::cache::single::LruCache;
    /// use lrukit::error::NotFound;
    ///
    /// let cache: LruCache<u32, &str> = LruCache::new(4, Duration::ZERO);
    /// cache.insert(1, "one");
    ///
    /// assert_eq!(cache.get(&1), Ok("one"));
    /// assert_eq!(cache.get(&2), Err(NotFound::new(2)));
    /// ```
    pub fn get(&self, key: &K) -> Result<V, NotFound<K>> {
        self.inner.lock().get(key).map(V::clone)
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

    /// Current number of entries.
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

/// Diagnostic dump: capacity header plus one `key: .., value: ..` line per
/// live entry, in unspecified order.
impl<K, V> fmt::Display for LruCache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.lock().write_dump(f, "value")
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.inner.lock();
        f.debug_struct("LruCache")
            .field("len", &core.len())
            .field("capacity", &core.capacity())
            .finish_non_exhaustive()
    }
}
