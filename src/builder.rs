//! Policy selection at construction time.
//!
//! Provides a simple API to pick LRU or LFU from a value (for example one read
//! from a config file) while the caller only ever sees [`PolicyCache`] and the
//! [`Cache`] contract.
//!
//! ## Example
//!
//! ```rust
//! use tiercache::builder::{CacheBuilder, CachePolicy};
//! use tiercache::traits::Cache;
//!
//! let cache = CacheBuilder::new(100)
//!     .policy(CachePolicy::Lfu)
//!     .build::<u64, String>()
//!     .unwrap();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some("hello".to_string()));
//! assert_eq!(cache.policy(), CachePolicy::Lfu);
//! ```
//!
//! With the `serde` feature, [`CacheConfig`] deserializes from e.g.
//! `{"capacity": 512, "policy": "lfu"}`.

use std::fmt;
#[cfg(feature = "concurrency")]
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "concurrency")]
use tracing::debug;

use crate::capacity::{Capacity, IntoCapacity};
#[cfg(feature = "concurrency")]
use crate::concurrent::{LfuCache, LruCache};
use crate::error::CacheError;
#[cfg(feature = "concurrency")]
use crate::traits::Cache;

/// Available eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CachePolicy {
    /// Least Recently Used eviction.
    #[default]
    Lru,
    /// Least Frequently Used eviction, least recent first within a use count.
    Lfu,
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CachePolicy::Lru => f.write_str("lru"),
            CachePolicy::Lfu => f.write_str("lfu"),
        }
    }
}

/// Plain cache settings, suitable for embedding in an application config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CacheConfig {
    /// Maximum number of live entries. Validated when the cache is built.
    pub capacity: usize,
    /// Eviction policy; defaults to LRU when omitted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: CachePolicy,
}

/// Builder for a policy-selected cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: Result<Capacity, CacheError>,
    policy: CachePolicy,
}

impl CacheBuilder {
    /// Starts a builder with the given capacity and the LRU policy.
    ///
    /// The capacity is validated here but reported by [`build`](Self::build).
    pub fn new<C: IntoCapacity>(capacity: C) -> Self {
        CacheBuilder {
            capacity: capacity.into_capacity(),
            policy: CachePolicy::default(),
        }
    }

    /// Starts a builder from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Self {
        CacheBuilder::new(config.capacity).policy(config.policy)
    }

    /// Selects the eviction policy.
    pub fn policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the settings this builder would build with.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if the capacity was rejected.
    pub fn config(&self) -> Result<CacheConfig, CacheError> {
        Ok(CacheConfig {
            capacity: self.capacity?.get(),
            policy: self.policy,
        })
    }

    /// Builds a thread-safe cache with the selected policy.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if the capacity is below one.
    #[cfg(feature = "concurrency")]
    pub fn build<K, V>(self) -> Result<PolicyCache<K, V>, CacheError>
    where
        K: Eq + Hash + Clone,
    {
        let capacity = self.capacity?;
        debug!(policy = %self.policy, capacity = capacity.get(), "building cache");
        let inner = match self.policy {
            CachePolicy::Lru => PolicyInner::Lru(LruCache::try_new(capacity)?),
            CachePolicy::Lfu => PolicyInner::Lfu(LfuCache::try_new(capacity)?),
        };
        Ok(PolicyCache { inner })
    }
}

/// Thread-safe cache whose policy was chosen at runtime.
///
/// Clones share the same underlying cache.
#[cfg(feature = "concurrency")]
pub struct PolicyCache<K, V> {
    inner: PolicyInner<K, V>,
}

#[cfg(feature = "concurrency")]
enum PolicyInner<K, V> {
    Lru(LruCache<K, V>),
    Lfu(LfuCache<K, V>),
}

#[cfg(feature = "concurrency")]
impl<K, V> PolicyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Returns the policy this cache evicts by.
    pub fn policy(&self) -> CachePolicy {
        match &self.inner {
            PolicyInner::Lru(_) => CachePolicy::Lru,
            PolicyInner::Lfu(_) => CachePolicy::Lfu,
        }
    }

    /// Looks up `key`, promoting it, and returns a clone of its value.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        match &self.inner {
            PolicyInner::Lru(lru) => lru.get(key),
            PolicyInner::Lfu(lfu) => lfu.get(key),
        }
    }

    /// Inserts or replaces `key`, returning the replaced value.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        match &self.inner {
            PolicyInner::Lru(lru) => lru.put(key, value),
            PolicyInner::Lfu(lfu) => lfu.put(key, value),
        }
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        match &self.inner {
            PolicyInner::Lru(lru) => lru.remove(key),
            PolicyInner::Lfu(lfu) => lfu.remove(key),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        match &self.inner {
            PolicyInner::Lru(lru) => lru.contains(key),
            PolicyInner::Lfu(lfu) => lfu.contains(key),
        }
    }

    /// Changes the capacity, returning how many entries were evicted.
    pub fn resize<C: IntoCapacity>(&self, capacity: C) -> Result<usize, CacheError> {
        match &self.inner {
            PolicyInner::Lru(lru) => lru.resize(capacity),
            PolicyInner::Lfu(lfu) => lfu.resize(capacity),
        }
    }

    pub fn clear(&self) {
        match &self.inner {
            PolicyInner::Lru(lru) => lru.clear(),
            PolicyInner::Lfu(lfu) => lfu.clear(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.inner {
            PolicyInner::Lru(lru) => lru.len(),
            PolicyInner::Lfu(lfu) => lfu.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        match &self.inner {
            PolicyInner::Lru(lru) => lru.capacity(),
            PolicyInner::Lfu(lfu) => lfu.capacity(),
        }
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> crate::metrics::CacheMetricsSnapshot {
        match &self.inner {
            PolicyInner::Lru(lru) => lru.metrics_snapshot(),
            PolicyInner::Lfu(lfu) => lfu.metrics_snapshot(),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for PolicyCache<K, V> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            PolicyInner::Lru(lru) => PolicyInner::Lru(lru.clone()),
            PolicyInner::Lfu(lfu) => PolicyInner::Lfu(lfu.clone()),
        };
        PolicyCache { inner }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for PolicyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyCache")
            .field("policy", &self.policy())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> Cache<K, V> for PolicyCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&self, key: &K) -> Option<V> {
        PolicyCache::get(self, key)
    }

    fn put(&self, key: K, value: V) {
        PolicyCache::put(self, key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_lru() {
        let builder = CacheBuilder::new(8);
        assert_eq!(
            builder.config(),
            Ok(CacheConfig {
                capacity: 8,
                policy: CachePolicy::Lru,
            })
        );
    }

    #[test]
    fn builder_reports_invalid_capacity() {
        let builder = CacheBuilder::new(-3).policy(CachePolicy::Lfu);
        assert_eq!(
            builder.config(),
            Err(CacheError::InvalidCapacity { requested: -3 })
        );
    }

    #[test]
    fn policy_display_matches_config_names() {
        assert_eq!(CachePolicy::Lru.to_string(), "lru");
        assert_eq!(CachePolicy::Lfu.to_string(), "lfu");
    }

    #[cfg(feature = "concurrency")]
    mod built_caches {
        use super::*;

        #[test]
        fn test_all_policies_basic_ops() {
            for policy in [CachePolicy::Lru, CachePolicy::Lfu] {
                let cache = CacheBuilder::new(10).policy(policy).build::<u64, String>().unwrap();
                assert_eq!(cache.policy(), policy);

                assert_eq!(cache.put(1, "one".to_string()), None);
                assert_eq!(cache.get(&1), Some("one".to_string()));
                assert!(cache.contains(&1));
                assert_eq!(cache.len(), 1);

                assert_eq!(cache.put(1, "ONE".to_string()), Some("one".to_string()));
                assert_eq!(cache.remove(&1), Some("ONE".to_string()));
                assert!(cache.is_empty());
            }
        }

        #[test]
        fn test_capacity_enforcement() {
            for policy in [CachePolicy::Lru, CachePolicy::Lfu] {
                let cache = CacheBuilder::new(3).policy(policy).build::<u32, u32>().unwrap();
                for i in 0..20 {
                    cache.put(i, i);
                    assert!(cache.len() <= 3, "{policy}");
                }
                assert_eq!(cache.resize(1), Ok(2));
                assert_eq!(cache.capacity(), 1);
                cache.clear();
                assert!(cache.is_empty());
            }
        }

        #[test]
        fn test_policies_differ_on_eviction() {
            let lru = CacheBuilder::new(2).build::<u32, u32>().unwrap();
            let lfu = CacheBuilder::new(2)
                .policy(CachePolicy::Lfu)
                .build::<u32, u32>()
                .unwrap();
            for cache in [&lru, &lfu] {
                cache.put(1, 1);
                cache.get(&1);
                cache.get(&1);
                cache.put(2, 2);
                cache.get(&2);
                cache.put(3, 3);
            }

            // LRU drops the older 1, LFU keeps the more used 1 and drops 2.
            assert!(!lru.contains(&1) && lru.contains(&2));
            assert!(lfu.contains(&1) && !lfu.contains(&2));
        }

        #[test]
        fn test_build_rejects_zero() {
            let err = CacheBuilder::new(0usize).build::<u32, u32>().unwrap_err();
            assert_eq!(err, CacheError::InvalidCapacity { requested: 0 });
        }

        #[test]
        fn test_from_config() {
            let config = CacheConfig {
                capacity: 4,
                policy: CachePolicy::Lfu,
            };
            let cache = CacheBuilder::from_config(&config)
                .build::<&str, u8>()
                .unwrap();
            assert_eq!(cache.policy(), CachePolicy::Lfu);
            assert_eq!(cache.capacity(), 4);
            assert!(format!("{cache:?}").contains("Lfu"));
        }
    }

    #[cfg(feature = "serde")]
    mod serde_config {
        use super::*;

        #[test]
        fn test_deserialize_lowercase_policy() {
            let config: CacheConfig =
                serde_json::from_str(r#"{"capacity": 512, "policy": "lfu"}"#).unwrap();
            assert_eq!(
                config,
                CacheConfig {
                    capacity: 512,
                    policy: CachePolicy::Lfu,
                }
            );
        }

        #[test]
        fn test_policy_defaults_when_omitted() {
            let config: CacheConfig = serde_json::from_str(r#"{"capacity": 2}"#).unwrap();
            assert_eq!(config.policy, CachePolicy::Lru);
        }

        #[test]
        fn test_unknown_policy_is_rejected() {
            let result = serde_json::from_str::<CacheConfig>(r#"{"capacity": 2, "policy": "arc"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn test_round_trip_text() {
            let config = CacheConfig {
                capacity: 9,
                policy: CachePolicy::Lru,
            };
            let text = serde_json::to_string(&config).unwrap();
            assert_eq!(text, r#"{"capacity":9,"policy":"lru"}"#);
        }
    }
}
