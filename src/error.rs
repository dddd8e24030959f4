//! Error types for the tiercache library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned when a capacity below one is supplied to a
//!   constructor or to `resize`.
//! - [`InvariantError`]: Returned by `check_invariants` when the ordering
//!   structure and the index disagree.
//!
//! A lookup miss is not an error; it is reported as `None`.
//!
//! ## Example Usage
//!
//! ```
//! use tiercache::error::CacheError;
//! use tiercache::policy::lru::LruCore;
//!
//! let cache: Result<LruCore<u64, i32>, CacheError> = LruCore::try_new(100);
//! assert!(cache.is_ok());
//!
//! let bad = LruCore::<u64, i32>::try_new(0);
//! assert_eq!(bad.unwrap_err(), CacheError::InvalidCapacity { requested: 0 });
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Error returned by fallible cache operations.
///
/// Construction and resize validate the requested capacity before touching
/// any state, so an `Err` always leaves the cache exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// The requested capacity was zero or negative.
    #[error("invalid capacity: {requested} (must be at least 1)")]
    InvalidCapacity {
        /// The rejected value, widened so negative inputs survive intact.
        requested: i128,
    },
}

impl CacheError {
    pub(crate) fn invalid_capacity(requested: impl Into<i128>) -> Self {
        CacheError::InvalidCapacity {
            requested: requested.into(),
        }
    }
}

impl From<std::convert::Infallible> for CacheError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by `check_invariants` on the policy engines
/// (e.g. [`LfuCore::check_invariants`](crate::policy::lfu::LfuCore::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- CacheError -------------------------------------------------------

    #[test]
    fn invalid_capacity_display_names_the_value() {
        let err = CacheError::invalid_capacity(0u32);
        assert_eq!(err.to_string(), "invalid capacity: 0 (must be at least 1)");

        let err = CacheError::invalid_capacity(-1i64);
        assert_eq!(err.to_string(), "invalid capacity: -1 (must be at least 1)");
    }

    #[test]
    fn invalid_capacity_eq_by_requested_value() {
        assert_eq!(
            CacheError::invalid_capacity(0u64),
            CacheError::InvalidCapacity { requested: 0 }
        );
        assert_ne!(
            CacheError::invalid_capacity(0u64),
            CacheError::invalid_capacity(-1i32)
        );
    }

    #[test]
    fn cache_error_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CacheError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("tier head mismatch");
        assert_eq!(err.to_string(), "tier head mismatch");
        assert_eq!(err.message(), "tier head mismatch");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("dangling slot");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("dangling slot"));
    }
}
