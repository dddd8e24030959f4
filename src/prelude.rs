//! Common imports.
//!
//! ```
//! use tiercache::prelude::*;
//!
//! let mut engine = LruCore::new(4);
//! engine.put(1, "one");
//! assert_eq!(engine.get(&1), Some(&"one"));
//! ```

pub use crate::builder::{CacheBuilder, CacheConfig, CachePolicy};
#[cfg(feature = "concurrency")]
pub use crate::builder::PolicyCache;
pub use crate::capacity::{Capacity, IntoCapacity};
#[cfg(feature = "concurrency")]
pub use crate::concurrent::{ConcurrentCache, LfuCache, LruCache};
pub use crate::error::{CacheError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::CacheMetricsSnapshot;
pub use crate::policy::{LfuCore, LruCore};
pub use crate::traits::{Cache, EvictionPolicy};
