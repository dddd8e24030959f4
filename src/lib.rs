//! tiercache: bounded in-memory key/value caches with LRU and LFU eviction.
//!
//! Two single-threaded engines, [`LruCore`] and [`LfuCore`], keep their whole
//! ordering in an arena-backed intrusive list with an `FxHashMap` index, so
//! `get`, `put` and eviction are O(1). [`ConcurrentCache`] shares one engine
//! between threads behind a `parking_lot::RwLock`, and [`CacheBuilder`] picks
//! the policy at runtime.
//!
//! ```
//! use tiercache::{LfuCache, LruCache};
//!
//! let lru: LruCache<&str, u32> = LruCache::new(2);
//! lru.put("a", 1);
//! lru.put("b", 2);
//! lru.get(&"a");
//! lru.put("c", 3);
//! assert!(!lru.contains(&"b"));
//!
//! let lfu: LfuCache<&str, u32> = LfuCache::new(2);
//! lfu.put("a", 1);
//! lfu.get(&"a");
//! lfu.put("b", 2);
//! lfu.put("c", 3);
//! assert!(lfu.contains(&"a"));
//! assert!(!lfu.contains(&"b"));
//! ```
//!
//! ## Features
//!
//! | Feature       | Default | Enables                                        |
//! |---------------|---------|------------------------------------------------|
//! | `concurrency` | yes     | [`ConcurrentCache`], `LruCache`, `LfuCache`, `PolicyCache` |
//! | `metrics`     | no      | Hit/miss/eviction counters and snapshots       |
//! | `serde`       | no      | `Serialize`/`Deserialize` for [`CacheConfig`]  |
//!
//! The crate logs through `tracing` and never installs a subscriber.

pub mod builder;
pub mod capacity;
#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use builder::{CacheBuilder, CacheConfig, CachePolicy};
#[cfg(feature = "concurrency")]
pub use builder::PolicyCache;
pub use capacity::{Capacity, IntoCapacity};
#[cfg(feature = "concurrency")]
pub use concurrent::{ConcurrentCache, LfuCache, LruCache};
pub use error::{CacheError, InvariantError};
pub use policy::{LfuCore, LruCore};
pub use traits::{Cache, EvictionPolicy};
