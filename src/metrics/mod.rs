//! Hit, miss and eviction counters for the policy engines.
//!
//! Compiled only with the `metrics` feature. Engines record into a
//! [`CacheMetrics`] they own; callers read a copied-out
//! [`CacheMetricsSnapshot`] (taken under the read lock when the engine sits
//! behind a [`ConcurrentCache`](crate::concurrent::ConcurrentCache)).
//!
//! ```text
//!   get/put/resize ──► CoreMetricsRecorder (&mut, inside the engine)
//!                                 │
//!                                 ▼
//!   metrics_snapshot() ──► CacheMetricsSnapshot (Copy, plus len/capacity gauges)
//! ```

pub mod snapshot;

pub use snapshot::CacheMetricsSnapshot;

/// Common counters for any cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_resize(&mut self);
    fn record_clear(&mut self);
}

#[derive(Debug, Default, Clone)]
pub struct CacheMetrics {
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub evicted_entries: u64,
    pub resize_calls: u64,
    pub clear_calls: u64,
}

impl CacheMetrics {
    /// Copies the counters out, attaching the engine's current gauges.
    pub fn snapshot(&self, cache_len: usize, capacity: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.get_hits + self.get_misses,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_new + self.insert_updates,
            insert_new: self.insert_new,
            insert_updates: self.insert_updates,
            evicted_entries: self.evicted_entries,
            resize_calls: self.resize_calls,
            clear_calls: self.clear_calls,
            cache_len,
            capacity,
        }
    }
}

impl CoreMetricsRecorder for CacheMetrics {
    fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_resize(&mut self) {
        self.resize_calls += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}
