//! # Cache Trait Hierarchy
//!
//! Two traits split the cache surface along its synchronization boundary:
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │              Cache<K, V>                │   policy-agnostic contract
//!   │                                         │   (&self, internally locked)
//!   │  get(&, &K) → Option<V>                 │
//!   │  put(&, K, V)                           │
//!   └──────────────────▲──────────────────────┘
//!                      │ implemented by
//!   ┌──────────────────┴──────────────────────┐
//!   │  ConcurrentCache<E>  /  PolicyCache     │
//!   └──────────────────┬──────────────────────┘
//!                      │ wraps
//!   ┌──────────────────▼──────────────────────┐
//!   │           EvictionPolicy                │   single-threaded engine
//!   │                                         │   (&mut self for mutation)
//!   │  get / peek / contains                  │
//!   │  put / remove / pop_victim / peek_victim│
//!   │  resize / len / capacity / clear        │
//!   └──────────────────▲──────────────────────┘
//!            ┌─────────┴─────────┐
//!        LruCore<K, V>       LfuCore<K, V>
//! ```
//!
//! ## Policy Comparison
//!
//! | Policy | Eviction Basis                        | Victim              |
//! |--------|---------------------------------------|---------------------|
//! | LRU    | Last access time                      | Back of recency list|
//! | LFU    | Use count, then recency within a tier | Back of tier list   |
//!
//! ## Thread Safety
//!
//! - Engines are **NOT thread-safe**; every mutation takes `&mut self`.
//! - [`ConcurrentCache`](crate::concurrent::ConcurrentCache) puts one engine
//!   behind a single `parking_lot::RwLock` and implements [`Cache`].

use crate::capacity::{Capacity, IntoCapacity};
use crate::error::CacheError;
#[cfg(feature = "metrics")]
use crate::metrics::CacheMetricsSnapshot;

/// Policy-agnostic cache contract.
///
/// Lets callers pick LRU or LFU at construction time and then depend only on
/// `get`/`put`. Both methods take `&self`: implementors synchronize
/// internally, and values are returned by clone because no reference can
/// outlive the internal lock. Use `Arc<V>` as the value type for cheap clones.
///
/// # Example
///
/// ```
/// use tiercache::traits::Cache;
/// use tiercache::{LfuCache, LruCache};
///
/// fn warm<C: Cache<u64, String>>(cache: &C) {
///     cache.put(1, "one".to_string());
///     cache.put(2, "two".to_string());
/// }
///
/// let lru: LruCache<u64, String> = LruCache::new(8);
/// let lfu: LfuCache<u64, String> = LfuCache::new(8);
/// warm(&lru);
/// warm(&lfu);
/// assert_eq!(lru.get(&1), Some("one".to_string()));
/// assert_eq!(lfu.get(&2), Some("two".to_string()));
/// ```
pub trait Cache<K, V> {
    /// Looks up `key`, updating the policy's ordering state on a hit.
    fn get(&self, key: &K) -> Option<V>;

    /// Inserts or replaces `key`, evicting one entry first if the cache is full.
    fn put(&self, key: K, value: V);
}

/// Single-threaded eviction policy engine.
///
/// Owns the index and the ordering structure of one cache instance. A hit
/// through [`get`](Self::get) counts as a mutation because it reorders the
/// entry; [`peek`](Self::peek) and [`contains`](Self::contains) never do.
///
/// # Example
///
/// ```
/// use tiercache::policy::lru::LruCore;
/// use tiercache::traits::EvictionPolicy;
///
/// let mut cache = LruCore::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get(&"a");
/// cache.put("c", 3);
///
/// assert!(!cache.contains(&"b"));
/// assert_eq!(cache.peek_victim(), Some((&"a", &1)));
/// ```
pub trait EvictionPolicy {
    type Key;
    type Value;

    /// Builds an empty engine bounded by `capacity`.
    fn with_capacity(capacity: Capacity) -> Self
    where
        Self: Sized;

    /// Validates `capacity` and builds an empty engine.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] for zero or negative values.
    fn try_with_capacity<C>(capacity: C) -> Result<Self, CacheError>
    where
        Self: Sized,
        C: IntoCapacity,
    {
        Ok(Self::with_capacity(capacity.into_capacity()?))
    }

    /// Returns the value for `key`, promoting it under the active policy.
    fn get(&mut self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns the value for `key` without touching the ordering.
    fn peek(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Checks if `key` is live without touching the ordering.
    fn contains(&self, key: &Self::Key) -> bool;

    /// Inserts or replaces `key`, returning the replaced value.
    ///
    /// Replacing promotes the entry exactly as a `get` would. Inserting a new
    /// key into a full cache evicts the current victim first.
    fn put(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Removes `key`, returning its value.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Evicts and returns the lowest-priority entry.
    fn pop_victim(&mut self) -> Option<(Self::Key, Self::Value)>;

    /// Returns the entry [`pop_victim`](Self::pop_victim) would evict next.
    fn peek_victim(&self) -> Option<(&Self::Key, &Self::Value)>;

    /// Sets a new capacity and evicts victims until the cache fits.
    ///
    /// Returns the number of evicted entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] for zero or negative values;
    /// neither the capacity nor the contents change in that case.
    fn resize<C>(&mut self, capacity: C) -> Result<usize, CacheError>
    where
        C: IntoCapacity;

    /// Returns the current number of live entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of live entries.
    fn capacity(&self) -> usize;

    /// Removes every entry. Capacity is unchanged.
    fn clear(&mut self);

    /// Copies out the engine's counters.
    #[cfg(feature = "metrics")]
    fn metrics_snapshot(&self) -> CacheMetricsSnapshot;
}
