//! Eviction policy engines.
//!
//! | Module  | Engine       | Victim                                   |
//! |---------|--------------|------------------------------------------|
//! | [`lru`] | [`LruCore`]  | Least recently used entry                |
//! | [`lfu`] | [`LfuCore`]  | Lowest use count, least recent in a tie  |
//!
//! Both implement [`EvictionPolicy`](crate::traits::EvictionPolicy) and are
//! single-threaded; wrap them in
//! [`ConcurrentCache`](crate::concurrent::ConcurrentCache) to share them.

pub mod lfu;
pub mod lru;

pub use lfu::LfuCore;
pub use lru::LruCore;
