//! # LFU (Least Frequently Used) Cache Implementation
//!
//! Single-threaded LFU engine. Entries are ranked by use count; within one
//! count the most recently promoted or inserted entry ranks highest. Put it
//! behind [`ConcurrentCache`](crate::concurrent::ConcurrentCache) (aliased
//! [`LfuCache`](crate::LfuCache)) for shared access.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                          LfuCore<K, V>                                   │
//!   │                                                                          │
//!   │   index: FxHashMap<K, SlotId>          tiers: FxHashMap<u64, SlotId>     │
//!   │   ┌─────────┬──────────┐               ┌───────┬──────────────────────┐  │
//!   │   │   Key   │  SlotId  │               │ count │ front-most entry     │  │
//!   │   ├─────────┼──────────┤               ├───────┼──────────────────────┤  │
//!   │   │  hot    │  id_1    │               │   5   │ id_1                 │  │
//!   │   │  warm   │  id_2    │               │   2   │ id_2                 │  │
//!   │   │  cold_a │  id_3    │               │   1   │ id_3                 │  │
//!   │   │  cold_b │  id_4    │               └───────┴──────────────────────┘  │
//!   │   └─────────┴──────────┘                                                 │
//!   │                                                                          │
//!   │   list: IntrusiveList<Entry<K, V>>  (counts non-increasing head → tail)  │
//!   │                                                                          │
//!   │   head ─► [hot:5] ◄──► [warm:2] ◄──► [cold_a:1] ◄──► [cold_b:1] ◄─ tail  │
//!   │           └ tier 5 ┘   └ tier 2 ┘    └────────── tier 1 ──────────┘      │
//!   │                                                        victim ──┘        │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole ordering lives in one list; a "tier" is the contiguous run of
//! entries sharing a count. The tier map only remembers where each run starts,
//! which is all promotion needs to splice an entry in O(1).
//!
//! ## Promotion
//!
//! ```text
//!   promote(e) where e.count == c
//!        │
//!        ▼
//!   ┌────────────────────────────────────────────────────────────────────────┐
//!   │ e is the head of tier c?                                               │
//!   │   YES → tiers[c] = next(e) if next(e).count == c, else drop tiers[c]   │
//!   └────────────────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   ┌────────────────────────────────────────────────────────────────────────┐
//!   │ e.count = c + 1                                                        │
//!   │ anchor  = tiers[c + 1] if present, else the old head of tier c         │
//!   │ move e immediately before anchor (no-op when anchor == e)              │
//!   │ tiers[c + 1] = e                                                       │
//!   └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Example, all entries at count 1:
//!
//! ```text
//!   head ─► [C:1] ◄──► [B:1] ◄──► [A:1] ◄─ tail        tiers {1: C}
//!
//!   get(A): tier 2 absent, anchor = C
//!   head ─► [A:2] ◄──► [C:1] ◄──► [B:1] ◄─ tail        tiers {2: A, 1: C}
//!
//!   get(B): tier 2 present, anchor = A
//!   head ─► [B:2] ◄──► [A:2] ◄──► [C:1] ◄─ tail        tiers {2: B, 1: C}
//! ```
//!
//! ## Insertion and Eviction
//!
//! - New entries start at count 1 and go in front of the tier-1 head, or at
//!   the tail if no entry has count 1. They become the tier-1 head.
//! - The victim is always the tail: lowest count, least recent within it.
//! - Replacing the value of a live key promotes it exactly like `get`.
//! - Counts saturate at `u64::MAX`; a saturated hit only refreshes recency
//!   within the top tier.
//!
//! ## Performance Characteristics
//!
//! | Operation        | Time       | Notes                               |
//! |------------------|------------|-------------------------------------|
//! | `get`            | O(1) avg   | Index lookup + tier splice          |
//! | `peek`           | O(1) avg   | No promotion                        |
//! | `put`            | O(1) avg   | May evict the tail first            |
//! | `remove`         | O(1) avg   | Fixes tier head if needed           |
//! | `frequency`      | O(1) avg   | Current use count                   |
//! | `resize`         | O(evicted) | Repeated tail removal               |
//!
//! ## Thread Safety
//!
//! - `LfuCore`: **NOT thread-safe**
//! - `LfuCache`: **Thread-safe** via `parking_lot::RwLock`

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
    count: u64,
}

/// Single-threaded LFU cache engine.
///
/// # Example
///
/// ```
/// use tiercache::policy::lfu::LfuCore;
/// use tiercache::traits::EvictionPolicy;
///
/// let mut cache = LfuCore::new(2);
/// cache.put("hot", 1);
/// cache.put("cold", 2);
/// cache.get(&"hot");
/// cache.put("new", 3);
///
/// assert!(cache.contains(&"hot"));
/// assert!(!cache.contains(&"cold"));
/// assert_eq!(cache.frequency(&"hot"), Some(2));
/// ```
pub struct LfuCore<K, V> {
    list: IntrusiveList<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    tiers: FxHashMap<u64, SlotId>,
    capacity: Capacity,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

impl<K, V> LfuCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty LFU engine.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or negative.
    pub fn new<C: IntoCapacity>(capacity: C) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty LFU engine, rejecting capacities below one.
    pub fn try_new<C: IntoCapacity>(capacity: C) -> Result<Self, CacheError> {
        let capacity = capacity
            .into_capacity()
            .inspect_err(|err| warn!(policy = "lfu", %err, "rejected cache capacity"))?;
        Ok(<Self as EvictionPolicy>::with_capacity(capacity))
    }

    /// Returns the use count of `key` without promoting it.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| entry.count)
    }

    /// Returns entries from highest to lowest priority. The last item is the
    /// next victim.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns keys from highest to lowest priority.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|entry| &entry.key)
    }

    /// Verifies ordering, tier heads and the index against each other.
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

        let mut prev_count: Option<u64> = None;
        let mut tiers_seen = 0usize;
        for (id, entry) in self.list.iter_entries() {
            if entry.count == 0 {
                return Err(InvariantError::new("entry with zero use count"));
            }
            if self.index.get(&entry.key) != Some(&id) {
                return Err(InvariantError::new("index does not point at list node"));
            }
            match prev_count {
                Some(prev) if prev < entry.count => {
                    return Err(InvariantError::new(format!(
                        "count {} follows lower count {prev}",
                        entry.count
                    )));
                }
                Some(prev) if prev == entry.count => {
                    if self.tiers.get(&entry.count) == Some(&id) {
                        return Err(InvariantError::new(format!(
                            "tier {} head is not front-most",
                            entry.count
                        )));
                    }
                }
                _ => {
                    if self.tiers.get(&entry.count) != Some(&id) {
                        return Err(InvariantError::new(format!(
                            "tier {} head does not match first entry",
                            entry.count
                        )));
                    }
                    tiers_seen += 1;
                }
            }
            prev_count = Some(entry.count);
        }

        if tiers_seen != self.tiers.len() {
            return Err(InvariantError::new(format!(
                "{} tier heads recorded but {tiers_seen} tiers present",
                self.tiers.len()
            )));
        }
        Ok(())
    }

    /// Re-points or drops the head of tier `count`, which currently is `id`.
    fn advance_tier_head(&mut self, id: SlotId, count: u64) {
        let successor = self
            .list
            .next_id(id)
            .filter(|&next| self.list.get(next).is_some_and(|e| e.count == count));
        match successor {
            Some(next) => {
                self.tiers.insert(count, next);
            }
            None => {
                self.tiers.remove(&count);
            }
        }
    }

    fn promote(&mut self, id: SlotId) {
        let Some(count) = self.list.get(id).map(|entry| entry.count) else {
            return;
        };
        let old_head = self.tiers.get(&count).copied();

        let Some(next_count) = count.checked_add(1) else {
            if let Some(head) = old_head
                && head != id
            {
                self.list.move_before(id, head);
                self.tiers.insert(count, id);
            }
            return;
        };

        if old_head == Some(id) {
            self.advance_tier_head(id, count);
        }
        if let Some(entry) = self.list.get_mut(id) {
            entry.count = next_count;
        }
        if let Some(anchor) = self.tiers.get(&next_count).copied().or(old_head) {
            self.list.move_before(id, anchor);
        }
        self.tiers.insert(next_count, id);
    }

    fn unlink(&mut self, id: SlotId) -> Option<Entry<K, V>> {
        let count = self.list.get(id)?.count;
        if self.tiers.get(&count) == Some(&id) {
            self.advance_tier_head(id, count);
        }
        self.list.remove(id)
    }

    fn evict_one(&mut self) -> Option<(K, V)> {
        let id = self.list.back_id()?;
        let entry = self.unlink(id)?;
        self.index.remove(&entry.key);
        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();
        trace!(
            policy = "lfu",
            count = entry.count,
            remaining = self.list.len(),
            "evicted entry"
        );
        Some((entry.key, entry.value))
    }
}

impl<K, V> EvictionPolicy for LfuCore<K, V>
where
    K: Eq + Hash + Clone,
{
    type Key = K;
    type Value = V;

    fn with_capacity(capacity: Capacity) -> Self {
        LfuCore {
            list: IntrusiveList::with_capacity(capacity.prealloc_hint()),
            index: FxHashMap::with_capacity_and_hasher(capacity.prealloc_hint(), Default::default()),
            tiers: FxHashMap::default(),
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
        self.promote(id);
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
            self.promote(id);
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
        let entry = Entry {
            key: key.clone(),
            value,
            count: 1,
        };
        let id = match self.tiers.get(&1).copied() {
            Some(head) => self.list.insert_before(entry, head),
            None => self.list.push_back(entry),
        };
        self.tiers.insert(1, id);
        self.index.insert(key, id);
        None
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.unlink(id).map(|entry| entry.value)
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
            .inspect_err(|err| warn!(policy = "lfu", %err, "rejected cache resize"))?;
        let old_capacity = std::mem::replace(&mut self.capacity, capacity);
        let mut evicted = 0usize;
        while self.list.len() > capacity.get() && self.evict_one().is_some() {
            evicted += 1;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_resize();
        debug!(
            policy = "lfu",
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
        self.tiers.clear();
    }

    #[cfg(feature = "metrics")]
    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.list.len(), self.capacity.get())
    }
}

impl<K, V> fmt::Debug for LfuCore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCore")
            .field("len", &self.list.len())
            .field("capacity", &self.capacity.get())
            .field("tiers", &self.tiers.len())
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for LfuCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(cache: &LfuCore<i32, i32>) -> Vec<i32> {
        cache.keys().copied().collect()
    }

    fn counts_of(cache: &LfuCore<i32, i32>) -> Vec<u64> {
        cache
            .keys()
            .map(|k| cache.frequency(k).unwrap_or_default())
            .collect()
    }

    // ==============================================
    // CORRECTNESS TESTS MODULE
    // ==============================================
    mod correctness {
        use super::*;

        mod basic_behavior {
            use super::*;

            #[test]
            fn test_new_cache_creation() {
                let cache: LfuCore<i32, i32> = LfuCore::new(10);
                assert_eq!(cache.capacity(), 10);
                assert!(cache.is_empty());
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_invalid_capacity() {
                assert_eq!(
                    LfuCore::<i32, i32>::try_new(0).unwrap_err(),
                    CacheError::InvalidCapacity { requested: 0 }
                );
                assert!(LfuCore::<i32, i32>::try_new(-5i64).is_err());
            }

            #[test]
            #[should_panic(expected = "invalid capacity")]
            fn test_new_panics_on_negative_capacity() {
                let _cache: LfuCore<i32, i32> = LfuCore::new(-1);
            }

            #[test]
            fn test_get_and_frequency() {
                let mut cache = LfuCore::new(3);
                cache.put(1, 10);
                assert_eq!(cache.frequency(&1), Some(1));

                assert_eq!(cache.get(&1), Some(&10));
                assert_eq!(cache.get(&1), Some(&10));
                assert_eq!(cache.frequency(&1), Some(3));
                assert_eq!(cache.get(&2), None);
                assert_eq!(cache.frequency(&2), None);
            }

            #[test]
            fn test_peek_does_not_promote() {
                let mut cache = LfuCore::new(3);
                cache.put(1, 10);
                assert_eq!(cache.peek(&1), Some(&10));
                assert!(cache.contains(&1));
                assert_eq!(cache.frequency(&1), Some(1));
            }

            #[test]
            fn test_update_replaces_value_and_promotes() {
                let mut cache = LfuCore::new(3);
                cache.put(1, 10);
                assert_eq!(cache.put(1, 11), Some(10));

                assert_eq!(cache.peek(&1), Some(&11));
                assert_eq!(cache.frequency(&1), Some(2));
                assert_eq!(cache.len(), 1);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_remove_tier_head_and_middle() {
                let mut cache = LfuCore::new(4);
                cache.extend([(1, 1), (2, 2), (3, 3), (4, 4)]);
                // order: 4, 3, 2, 1 (all count 1)

                assert_eq!(cache.remove(&4), Some(4));
                cache.check_invariants().unwrap();
                assert_eq!(cache.remove(&2), Some(2));
                cache.check_invariants().unwrap();
                assert_eq!(keys_of(&cache), vec![3, 1]);

                cache.remove(&3);
                cache.remove(&1);
                assert!(cache.is_empty());
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_clear_resets_tiers() {
                let mut cache = LfuCore::new(3);
                cache.extend([(1, 1), (2, 2)]);
                cache.get(&1);
                cache.clear();

                assert!(cache.is_empty());
                assert_eq!(cache.capacity(), 3);
                cache.put(5, 5);
                assert_eq!(cache.frequency(&5), Some(1));
                cache.check_invariants().unwrap();
            }
        }

        mod promotion {
            use super::*;

            #[test]
            fn test_promote_without_next_tier_anchors_at_old_tier_head() {
                let mut cache = LfuCore::new(3);
                cache.extend([(1, 1), (2, 2), (3, 3)]);
                assert_eq!(keys_of(&cache), vec![3, 2, 1]);

                cache.get(&1);
                assert_eq!(keys_of(&cache), vec![1, 3, 2]);
                assert_eq!(counts_of(&cache), vec![2, 1, 1]);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_promote_into_existing_tier_becomes_its_head() {
                let mut cache = LfuCore::new(3);
                cache.extend([(1, 1), (2, 2), (3, 3)]);
                cache.get(&1);
                cache.get(&2);

                assert_eq!(keys_of(&cache), vec![2, 1, 3]);
                assert_eq!(counts_of(&cache), vec![2, 2, 1]);
                assert_eq!(cache.peek_victim(), Some((&3, &3)));
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_promote_tier_head_advances_to_successor() {
                let mut cache = LfuCore::new(3);
                cache.extend([(1, 1), (2, 2), (3, 3)]);

                cache.get(&3);
                assert_eq!(keys_of(&cache), vec![3, 2, 1]);
                assert_eq!(counts_of(&cache), vec![2, 1, 1]);
                cache.check_invariants().unwrap();

                cache.get(&3);
                assert_eq!(counts_of(&cache), vec![3, 1, 1]);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_promote_sole_member_drops_tier() {
                let mut cache = LfuCore::new(2);
                cache.put(1, 1);
                cache.get(&1);
                cache.get(&1);

                assert_eq!(cache.frequency(&1), Some(3));
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_saturated_count_refreshes_recency_only() {
                let mut cache = LfuCore::new(2);
                cache.put(1, 1);
                cache.put(2, 2);
                for key in [1, 2] {
                    let id = cache.index[&key];
                    if let Some(entry) = cache.list.get_mut(id) {
                        entry.count = u64::MAX;
                    }
                }
                cache.tiers.clear();
                cache.tiers.insert(u64::MAX, cache.index[&2]);
                cache.check_invariants().unwrap();

                cache.get(&1);
                assert_eq!(cache.frequency(&1), Some(u64::MAX));
                assert_eq!(keys_of(&cache), vec![1, 2]);
                cache.check_invariants().unwrap();
            }
        }

        mod eviction_order {
            use super::*;

            #[test]
            fn test_frequency_beats_recency() {
                let mut cache = LfuCore::new(2);
                cache.put(1, 1);
                cache.put(2, 2);
                cache.get(&1);
                cache.put(3, 3);

                assert!(cache.contains(&1));
                assert!(!cache.contains(&2));
                assert!(cache.contains(&3));
            }

            #[test]
            fn test_tie_evicts_least_recent_in_tier() {
                let mut cache = LfuCore::new(2);
                cache.put(1, 1);
                cache.put(2, 2);
                cache.put(3, 3);

                assert!(!cache.contains(&1));
                assert_eq!(keys_of(&cache), vec![3, 2]);
            }

            #[test]
            fn test_new_entry_goes_to_tail_when_no_count_one_entries() {
                let mut cache = LfuCore::new(3);
                cache.put(1, 1);
                cache.put(2, 2);
                cache.get(&1);
                cache.get(&2);
                cache.put(3, 3);

                assert_eq!(keys_of(&cache), vec![2, 1, 3]);
                assert_eq!(cache.peek_victim(), Some((&3, &3)));
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_hot_entry_survives_scan() {
                let mut cache = LfuCore::new(3);
                cache.put(0, 0);
                for _ in 0..5 {
                    cache.get(&0);
                }
                for key in 1..50 {
                    cache.put(key, key);
                    assert!(cache.len() <= 3);
                }
                assert!(cache.contains(&0));
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_pop_victim_drains_in_priority_order() {
                let mut cache = LfuCore::new(3);
                cache.extend([(1, 1), (2, 2), (3, 3)]);
                cache.get(&1);
                cache.get(&1);
                cache.get(&2);

                assert_eq!(cache.pop_victim(), Some((3, 3)));
                assert_eq!(cache.pop_victim(), Some((2, 2)));
                assert_eq!(cache.pop_victim(), Some((1, 1)));
                assert_eq!(cache.pop_victim(), None);
                cache.check_invariants().unwrap();
            }
        }

        mod resize {
            use super::*;

            #[test]
            fn test_shrink_evicts_lowest_priority() {
                let mut cache = LfuCore::new(5);
                for i in 1..=5 {
                    cache.put(i, i);
                }
                cache.get(&1);
                cache.get(&1);
                cache.get(&2);
                // order: 1(3), 2(2), 5(1), 4(1), 3(1)

                assert_eq!(cache.resize(3), Ok(2));
                assert_eq!(keys_of(&cache), vec![1, 2, 5]);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn test_invalid_resize_is_rejected() {
                let mut cache = LfuCore::new(2);
                cache.put(1, 1);
                assert_eq!(
                    cache.resize(-1),
                    Err(CacheError::InvalidCapacity { requested: -1 })
                );
                assert_eq!(cache.capacity(), 2);
                assert_eq!(cache.len(), 1);
            }

            #[test]
            fn test_grow_then_fill() {
                let mut cache = LfuCore::new(1);
                cache.put(1, 1);
                assert_eq!(cache.resize(3usize), Ok(0));
                cache.put(2, 2);
                cache.put(3, 3);
                assert_eq!(cache.len(), 3);
                cache.check_invariants().unwrap();
            }
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn test_counters_track_operations() {
            let mut cache = LfuCore::new(1);
            cache.put(1, 1);
            cache.get(&1);
            cache.put(2, 2);
            cache.get(&1);
            cache.clear();

            let snap = cache.metrics_snapshot();
            assert_eq!(snap.insert_new, 2);
            assert_eq!(snap.get_hits, 1);
            assert_eq!(snap.get_misses, 1);
            assert_eq!(snap.evicted_entries, 1);
            assert_eq!(snap.clear_calls, 1);
            assert_eq!(snap.cache_len, 0);
        }
    }
}
