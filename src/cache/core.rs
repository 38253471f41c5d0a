//! # LRU/TTL Cache Engine Core
//!
//! Single-threaded eviction and expiration engine shared by the single-value
//! and multi-value cache fronts.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────────────┐
//!   │                       CacheCore<K, P>                           │
//!   │                                                                 │
//!   │   ┌───────────────────────────────────────────────────────┐     │
//!   │   │  FxHashMap<K, Entry<P>>                               │     │
//!   │   │                                                       │     │
//!   │   │  ┌─────────┬───────────────────────────────────┐      │     │
//!   │   │  │   Key   │ Entry { payload, expires_at, node}│      │     │
//!   │   │  ├─────────┼───────────────────────────────────┤      │     │
//!   │   │  │  key_1  │  node ────────────────────────┐   │      │     │
//!   │   │  │  key_2  │  node ──────────────────┐     │   │      │     │
//!   │   │  │  key_3  │  node ────────────┐     │     │   │      │     │
//!   │   │  └─────────┴───────────────────┼─────┼─────┼───┘      │     │
//!   │   └──────────────────────────────────────────────────────-┘     │
//!   │                                    │     │     │                │
//!   │   ┌────────────────────────────────┼─────┼─────┼──────────┐     │
//!   │   │  RecencyList<K> (SlotId links) ▼     ▼     ▼          │     │
//!   │   │                                                       │     │
//!   │   │  front ──► [key_3] ◄──► [key_2] ◄──► [key_1] ◄── back │     │
//!   │   │            (MRU)                     (LRU)            │     │
//!   │   └───────────────────────────────────────────────────────┘     │
//!   └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The map owns the payloads; the list holds only keys. The two structures
//! stay in 1:1 correspondence: every live key has exactly one list node, and
//! `index.len() == recency.len() <= capacity` after every operation.
//!
//! ## Operation Flow
//!
//! ```text
//!   insert(D) with cache full (capacity = 3):
//!     1. pop_back() evicts the LRU key from the list
//!     2. the evicted key's entry is removed from the map
//!     3. D is pushed to the front with a fresh entry
//!
//!   get(B):
//!     1. map lookup: O(1)
//!     2. deadline check; an expired entry is removed from both
//!        structures and reported as a miss
//!     3. move_to_front(B): a read counts as a use
//!     4. the payload is handed back by reference; the thread-safe
//!        fronts clone it before the lock is released
//! ```
//!
//! ## Expiry
//!
//! Deadlines are absolute `Instant`s stamped at write time by
//! [`insert_with_ttl`](CacheCore::insert_with_ttl). Expiry is lazy: nothing
//! scans for stale entries, they are dropped when a `get` trips over them.
//! A plain [`insert`](CacheCore::insert) never touches the deadline of an
//! entry it overwrites.
//!
//! ## Thread Safety
//!
//! `CacheCore` is **not** thread-safe; it takes `&mut self` for every
//! mutation. [`LruCache`](crate::cache::single::LruCache) and
//! [`LruMultiCache`](crate::cache::multi::LruMultiCache) wrap it in a single
//! `parking_lot::Mutex` covering map and list together.

use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::ds::recency_list::RecencyList;
use crate::ds::slot_arena::SlotId;
use crate::error::NotFound;

/// One cached key's payload plus expiry deadline and list position.
#[derive(Debug)]
struct Entry<P> {
    payload: P,
    expires_at: Option<Instant>,
    node: SlotId,
}

/// Bounded LRU engine with lazy TTL expiration.
///
/// Generic over the key type `K` and the stored payload `P`. The payload is
/// opaque to the engine: the single-value front instantiates `P = V`, the
/// multi-value front `P = Vec<V>`.
pub struct CacheCore<K, P> {
    index: FxHashMap<K, Entry<P>>,
    recency: RecencyList<K>,
    capacity: usize,
    ttl: Duration,
}

impl<K, P> CacheCore<K, P>
where
    K: Eq + Hash + Clone,
{
    /// Creates an engine with the given capacity and default TTL.
    ///
    /// A `capacity` of 0 creates a cache that accepts no entries (all
    /// inserts are no-ops). A `ttl` of [`Duration::ZERO`] disables the
    /// default TTL: [`insert_with_ttl`](Self::insert_with_ttl) then stores
    /// entries without a deadline, exactly like [`insert`](Self::insert).
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            recency: RecencyList::with_capacity(capacity),
            capacity,
            ttl,
        }
    }

    /// Inserts or overwrites `key` without stamping an expiry deadline.
    ///
    /// Overwrites replace the payload and refresh recency but leave the
    /// entry's existing deadline untouched, whether that is "never" or a
    /// deadline stamped by an earlier [`insert_with_ttl`](Self::insert_with_ttl).
    /// A new key inserted into a full cache evicts the least recently used
    /// entry first.
    pub fn insert(&mut self, key: K, payload: P) {
        self.insert_inner(key, payload, false);
    }

    /// Inserts or overwrites `key`, stamping `now + ttl` as the deadline.
    ///
    /// Every write through this path is a full TTL reset: overwriting an
    /// aged entry gives it a fresh deadline, not an extension of the old
    /// one.
    pub fn insert_with_ttl(&mut self, key: K, payload: P) {
        self.insert_inner(key, payload, true);
    }

    fn insert_inner(&mut self, key: K, payload: P, stamp_deadline: bool) {
        if let Some(entry) = self.index.get_mut(&key) {
            entry.payload = payload;
            if stamp_deadline {
                entry.expires_at = Self::deadline(self.ttl);
            }
            self.recency.move_to_front(entry.node);
            self.validate_invariants();
            return;
        }

        // A zero-capacity cache accepts nothing.
        if self.capacity == 0 {
            return;
        }

        if self.index.len() >= self.capacity {
            if let Some(evicted) = self.recency.pop_back() {
                self.index.remove(&evicted);
            }
        }

        let node = self.recency.push_front(key.clone());
        self.index.insert(
            key,
            Entry {
                payload,
                expires_at: if stamp_deadline {
                    Self::deadline(self.ttl)
                } else {
                    None
                },
                node,
            },
        );
        self.validate_invariants();
    }

    /// Looks up `key`, refreshing its recency on a hit.
    ///
    /// An entry whose deadline has passed is removed from both structures
    /// inside this call and reported as a miss; a stale payload is never
    /// handed out.
    pub fn get(&mut self, key: &K) -> Result<&P, NotFound<K>> {
        let (node, expired) = match self.index.get(key) {
            Some(entry) => (
                entry.node,
                entry
                    .expires_at
                    .is_some_and(|deadline| Instant::now() >= deadline),
            ),
            None => return Err(NotFound::new(key.clone())),
        };

        if expired {
            self.index.remove(key);
            self.recency.remove(node);
            self.validate_invariants();
            return Err(NotFound::new(key.clone()));
        }

        self.recency.move_to_front(node);
        self.validate_invariants();
        match self.index.get(key) {
            Some(entry) => Ok(&entry.payload),
            None => Err(NotFound::new(key.clone())),
        }
    }

    /// Removes `key` from both structures; absent keys are an error.
    pub fn remove(&mut self, key: &K) -> Result<(), NotFound<K>> {
        match self.index.remove(key) {
            Some(entry) => {
                self.recency.remove(entry.node);
                self.validate_invariants();
                Ok(())
            }
            None => Err(NotFound::new(key.clone())),
        }
    }

    /// Removes `key` if present; absent keys are a no-op.
    pub fn remove_silent(&mut self, key: &K) {
        if let Some(entry) = self.index.remove(key) {
            self.recency.remove(entry.node);
            self.validate_invariants();
        }
    }

    /// Returns `true` if `key` has a live map entry.
    ///
    /// Pure membership check: recency order is not touched, and an entry
    /// past its deadline still counts until a `get` removes it.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn deadline(ttl: Duration) -> Option<Instant> {
        if ttl.is_zero() {
            None
        } else {
            Some(Instant::now() + ttl)
        }
    }

    fn validate_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            debug_assert_eq!(self.index.len(), self.recency.len());
            debug_assert!(self.index.len() <= self.capacity);
            self.recency.debug_validate_invariants();
        }
    }
}

impl<K, P> CacheCore<K, P> {
    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The default TTL stamped by `insert_with_ttl`; zero means disabled.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.index.clear();
        self.recency.clear();
    }
}

impl<K, P> CacheCore<K, P>
where
    K: fmt::Debug,
    P: fmt::Debug,
{
    /// Writes the diagnostic listing: capacity header plus one line per
    /// live entry. Entries come out in map order, which is unspecified.
    pub(crate) fn write_dump(&self, f: &mut fmt::Formatter<'_>, payload_label: &str) -> fmt::Result {
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Cached:")?;
        for (key, entry) in &self.index {
            writeln!(f, "key: {:?}, {}: {:?}", key, payload_label, entry.payload)?;
        }
        Ok(())
    }
}

impl<K, P> fmt::Debug for CacheCore<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheCore")
            .field("len", &self.index.len())
            .field("capacity", &self.capacity)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
