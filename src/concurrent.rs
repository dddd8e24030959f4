//! Thread-safe cache wrapper.
//!
//! [`ConcurrentCache`] puts one [`EvictionPolicy`] engine behind a single
//! `parking_lot::RwLock`. Because a hit reorders the engine, `get` is a
//! writer; only the pure inspections share the lock.
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────┐
//!   │ ConcurrentCache<E>  (Clone = Arc::clone)                   │
//!   │                                                            │
//!   │   inner: Arc<RwLock<E>>                                    │
//!   │                                                            │
//!   │   write(): get, put, remove, resize, clear                 │
//!   │   read():  peek, contains, len, capacity, is_empty         │
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each accessor takes exactly one guard and releases it on return.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::capacity::IntoCapacity;
use crate::error::CacheError;
#[cfg(feature = "metrics")]
use crate::metrics::CacheMetricsSnapshot;
use crate::policy::lfu::LfuCore;
use crate::policy::lru::LruCore;
use crate::traits::{Cache, EvictionPolicy};

/// Thread-safe LRU cache.
pub type LruCache<K, V> = ConcurrentCache<LruCore<K, V>>;

/// Thread-safe LFU cache.
pub type LfuCache<K, V> = ConcurrentCache<LfuCore<K, V>>;

/// Shares one eviction engine between threads.
///
/// Cloning is cheap and yields a handle to the same cache.
///
/// # Example
///
/// ```
/// use std::thread;
/// use tiercache::LruCache;
///
/// let cache: LruCache<u32, String> = LruCache::new(100);
/// let writer = cache.clone();
///
/// thread::spawn(move || writer.put(1, "one".to_string()))
///     .join()
///     .unwrap();
///
/// assert_eq!(cache.get(&1), Some("one".to_string()));
/// ```
pub struct ConcurrentCache<E> {
    inner: Arc<RwLock<E>>,
}

impl<E> Clone for ConcurrentCache<E> {
    fn clone(&self) -> Self {
        ConcurrentCache {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: EvictionPolicy> fmt::Debug for ConcurrentCache<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

impl<E: EvictionPolicy> ConcurrentCache<E> {
    /// Creates an empty cache.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or negative. Use
    /// [`try_new`](Self::try_new) to handle that case.
    ///
    /// # Example
    ///
    /// ```
    /// use tiercache::LfuCache;
    ///
    /// let cache: LfuCache<u32, String> = LfuCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new<C: IntoCapacity>(capacity: C) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty cache, rejecting capacities below one.
    ///
    /// # Example
    ///
    /// ```
    /// use tiercache::LruCache;
    /// use tiercache::error::CacheError;
    ///
    /// let err = LruCache::<u32, u32>::try_new(-1).unwrap_err();
    /// assert_eq!(err, CacheError::InvalidCapacity { requested: -1 });
    /// ```
    pub fn try_new<C: IntoCapacity>(capacity: C) -> Result<Self, CacheError> {
        Ok(Self::from_engine(E::try_with_capacity(capacity)?))
    }

    /// Wraps an existing engine, keeping its contents.
    pub fn from_engine(engine: E) -> Self {
        ConcurrentCache {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Looks up `key`, promoting it, and returns a clone of its value.
    ///
    /// Takes the write lock.
    pub fn get(&self, key: &E::Key) -> Option<E::Value>
    where
        E::Value: Clone,
    {
        let mut cache = self.inner.write();
        cache.get(key).cloned()
    }

    /// Inserts or replaces `key`, returning the replaced value.
    pub fn put(&self, key: E::Key, value: E::Value) -> Option<E::Value> {
        let mut cache = self.inner.write();
        cache.put(key, value)
    }

    /// Removes `key`, returning its value.
    pub fn remove(&self, key: &E::Key) -> Option<E::Value> {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    /// Changes the capacity, evicting down to it. Returns the evicted count.
    ///
    /// # Example
    ///
    /// ```
    /// use tiercache::LruCache;
    ///
    /// let cache: LruCache<u32, u32> = LruCache::new(4);
    /// for i in 0..4 {
    ///     cache.put(i, i);
    /// }
    /// assert_eq!(cache.resize(2), Ok(2));
    /// assert!(cache.resize(0).is_err());
    /// assert_eq!(cache.len(), 2);
    /// ```
    pub fn resize<C: IntoCapacity>(&self, capacity: C) -> Result<usize, CacheError> {
        let mut cache = self.inner.write();
        cache.resize(capacity)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        let mut cache = self.inner.write();
        cache.clear();
    }

    /// Returns a clone of the value for `key` without promoting it.
    pub fn peek(&self, key: &E::Key) -> Option<E::Value>
    where
        E::Value: Clone,
    {
        let cache = self.inner.read();
        cache.peek(key).cloned()
    }

    pub fn contains(&self, key: &E::Key) -> bool {
        let cache = self.inner.read();
        cache.contains(key)
    }

    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    pub fn is_empty(&self) -> bool {
        let cache = self.inner.read();
        cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    /// Runs `f` against the engine under the read lock.
    ///
    /// Useful for engine-specific inspection such as
    /// [`LfuCore::frequency`] or `check_invariants`.
    pub fn with_engine<R>(&self, f: impl FnOnce(&E) -> R) -> R {
        let cache = self.inner.read();
        f(&cache)
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        let cache = self.inner.read();
        cache.metrics_snapshot()
    }
}

impl<E> Cache<E::Key, E::Value> for ConcurrentCache<E>
where
    E: EvictionPolicy,
    E::Value: Clone,
{
    fn get(&self, key: &E::Key) -> Option<E::Value> {
        ConcurrentCache::get(self, key)
    }

    fn put(&self, key: E::Key, value: E::Value) {
        ConcurrentCache::put(self, key, value);
    }
}
