//! # Least Recently Used (LRU) Cache Implementation
//!
//! Single-threaded LRU engine. Put it behind
//! [`ConcurrentCache`](crate::concurrent::ConcurrentCache) (aliased
//! [`LruCache`](crate::LruCache)) for shared access.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                         LruCore<K, V>                                │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId> (index into the list's arena)          │   │
//!   │   │                                                              │   │
//!   │   │  ┌─────────┬────────────────────────────────────────────┐    │   │
//!   │   │  │   Key   │  SlotId                                    │    │   │
//!   │   │  ├─────────┼────────────────────────────────────────────┤    │   │
//!   │   │  │  key_1  │  ────────────────────────────────────────┐ │    │   │
//!   │   │  │  key_2  │  ──────────────────────────────────┐     │ │    │   │
//!   │   │  │  key_3  │  ────────────────────────────┐     │     │ │    │   │
//!   │   │  └─────────┴──────────────────────────────┼─────┼─────┼─┘    │   │
//!   │   └───────────────────────────────────────────┼─────┼─────┼──────┘   │
//!   │                                               │     │     │          │
//!   │   ┌───────────────────────────────────────────┼─────┼─────┼──────┐   │
//!   │   │  IntrusiveList<Entry<K, V>> (recency)     ▼     ▼     ▼      │   │
//!   │   │                                                              │   │
//!   │   │  head ──► ┌──────┐ ◄──► ┌──────┐ ◄──► ┌──────┐ ◄── tail      │   │
//!   │   │    (MRU)  │ k, v │      │ k, v │      │ k, v │   (LRU)       │   │
//!   │   │           └──────┘      └──────┘      └──────┘               │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   │                                                                      │
//!   │   capacity: Capacity (>= 1, mutable via resize)                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## LRU Operations Flow
//!
//! ```text
//!   PUT new item (cache full)
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   Before:
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail    (capacity = 3)
//!
//!   put(D):
//!     1. Evict [C] from tail (pop_victim)
//!     2. Push [D] at head
//!
//!   After:
//!     head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   GET existing item
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   get(B):
//!     1. Find [B] in index: O(1)
//!     2. Move [B] to head: O(1)
//!
//!   After:
//!     head ──► [B] ◄──► [A] ◄──► [C] ◄── tail
//!
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   RESIZE(1)
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   Pops from the tail until len <= 1: [C], then [A].
//!     head ──► [B] ◄── tail
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation        | Time       | Notes                          |
//! |------------------|------------|--------------------------------|
//! | `get`            | O(1) avg   | Index lookup + list move       |
//! | `peek`           | O(1) avg   | Index lookup only              |
//! | `put`            | O(1) avg   | Index update + list update     |
//! | `remove`         | O(1) avg   | Index remove + list unlink     |
//! | `pop_victim`     | O(1)       | Tail removal                   |
//! | `resize`         | O(evicted) | Repeated tail removal          |
//!
//! ## Thread Safety
//!
//! - `LruCore`: **NOT thread-safe** - single-threaded only
//! - `LruCache`: **Thread-safe** via `parking_lot::RwLock`

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::capacity::{Capacity, IntoCapacity};
use crate::ds::{IntrusiveList, SlotId};
use crate::error::{CacheError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetrics, CacheMetricsSnapshot, CoreMetricsRecorder};
use crate::traits::EvictionPolicy;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Single-threaded LRU cache engine.
///
/// The entry at the back of the recency list is always the next victim.
pub struct LruCore<K, V> {
    list: IntrusiveList<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    capacity: Capacity,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

impl<K, V> LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty LRU engine.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or negative. Use
    /// [`try_new`](Self::try_new) to handle that case.
    ///
    /// # Example
    ///
    /// ```
    /// use tiercache::policy::lru::LruCore;
    /// use tiercache::traits::EvictionPolicy;
    ///
    /// let cache: LruCore<u64, String> = LruCore::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new<C: IntoCapacity>(capacity: C) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty LRU engine, rejecting capacities below one.
    pub fn try_new<C: IntoCapacity>(capacity: C) -> Result<Self, CacheError> {
        let capacity = capacity
            .into_capacity()
            .inspect_err(|err| warn!(policy = "lru", %err, "rejected cache capacity"))?;
        Ok(<Self as EvictionPolicy>::with_capacity(capacity))
    }

    /// Returns entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|entry| &entry.key)
    }

    /// Verifies that the index and the recency list describe the same entries.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.list.len() > self.capacity.get() {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.list.len(),
                self.capacity
            )));
        }
        if self.list.len() != self.index.len() {
            return Err(InvariantError::new(format!(
                "list holds {} entries but index holds {}",
                self.list.len(),
                self.index.len()
            )));
        }
        let mut walked = 0usize;
        for (id, entry) in self.list.iter_entries() {
            if self.index.get(&entry.key) != Some(&id) {
                return Err(InvariantError::new("index does not point at list node"));
            }
            walked += 1;
        }
        if walked != self.list.len() {
            return Err(InvariantError::new(format!(
                "walked {walked} nodes but list reports {}",
                self.list.len()
            )));
        }
        Ok(())
    }

    fn evict_one(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);
        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();
        trace!(policy = "lru", remaining = self.list.len(), "evicted entry");
        Some((entry.key, entry.value))
    }
}

impl<K, V> EvictionPolicy for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    type Key = K;
    type Value = V;

    fn with_capacity(capacity: Capacity) -> Self {
        LruCore {
            list: IntrusiveList::with_capacity(capacity.prealloc_hint()),
            index: FxHashMap::with_capacity_and_hasher(capacity.prealloc_hint(), Default::default()),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
        }
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };
        self.list.move_to_front(id);
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();
        self.list.get(id).map(|entry| &entry.value)
    }

    fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            self.list.move_to_front(id);
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            let entry = self.list.get_mut(id)?;
            return Some(std::mem::replace(&mut entry.value, value));
        }

        if self.list.len() >= self.capacity.get() {
            self.evict_one();
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();
        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        None
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.list.remove(id).map(|entry| entry.value)
    }

    fn pop_victim(&mut self) -> Option<(K, V)> {
        self.evict_one()
    }

    fn peek_victim(&self) -> Option<(&K, &V)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    fn resize<C>(&mut self, capacity: C) -> Result<usize, CacheError>
    where
        C: IntoCapacity,
    {
        let capacity = capacity
            .into_capacity()
            .inspect_err(|err| warn!(policy = "lru", %err, "rejected cache resize"))?;
        let old_capacity = std::mem::replace(&mut self.capacity, capacity);
        let mut evicted = 0usize;
        while self.list.len() > capacity.get() && self.evict_one().is_some() {
            evicted += 1;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_resize();
        debug!(
            policy = "lru",
            old_capacity = old_capacity.get(),
            new_capacity = capacity.get(),
            evicted,
            "resized cache"
        );
        Ok(evicted)
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn capacity(&self) -> usize {
        self.capacity.get()
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.list.clear();
        self.index.clear();
    }

    #[cfg(feature = "metrics")]
    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics
            .snapshot(self.list.len(), self.capacity.get())
    }
}

impl<K, V> fmt::Debug for LruCore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCore")
            .field("len", &self.list.len())
            .field("capacity", &self.capacity.get())
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
