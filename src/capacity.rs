//! Validated entry-count capacity.
//!
//! Every cache bound is a [`Capacity`]: a count of entries that is at least
//! one. Conversions from raw integers go through [`Capacity::new`] or the
//! `TryFrom` impls, which reject zero and negative values with
//! [`CacheError::InvalidCapacity`].
//!
//! ```
//! use tiercache::Capacity;
//! use tiercache::error::CacheError;
//!
//! assert_eq!(Capacity::new(8).unwrap().get(), 8);
//! assert!(Capacity::new(0).is_err());
//! assert_eq!(
//!     Capacity::try_from(-1i64).unwrap_err(),
//!     CacheError::InvalidCapacity { requested: -1 }
//! );
//! ```

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::CacheError;

/// Maximum number of live entries a cache may hold. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Validates `value` as a capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `value` is zero.
    pub fn new(value: usize) -> Result<Self, CacheError> {
        NonZeroUsize::new(value)
            .map(Capacity)
            .ok_or_else(|| CacheError::invalid_capacity(value as u64))
    }

    /// Returns the capacity as a plain entry count.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Number of slots worth reserving up front for this capacity.
    pub(crate) fn prealloc_hint(self) -> usize {
        self.get().min(PREALLOC_LIMIT)
    }
}

const PREALLOC_LIMIT: usize = 1 << 16;

impl From<NonZeroUsize> for Capacity {
    fn from(value: NonZeroUsize) -> Self {
        Capacity(value)
    }
}

impl From<Capacity> for usize {
    fn from(value: Capacity) -> Self {
        value.get()
    }
}

impl TryFrom<usize> for Capacity {
    type Error = CacheError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Capacity::new(value)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = CacheError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let raw = usize::try_from(value).map_err(|_| CacheError::invalid_capacity(value))?;
        Capacity::new(raw)
    }
}

impl TryFrom<i32> for Capacity {
    type Error = CacheError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Capacity::try_from(i64::from(value))
    }
}

/// Conversion into a validated [`Capacity`].
///
/// Implemented for every type `Capacity` can be fallibly built from, so
/// constructors and `resize` accept `usize`, signed integers, `NonZeroUsize`
/// and `Capacity` alike. Bare integer literals resolve to `i32`.
pub trait IntoCapacity {
    /// Validates `self` as a capacity.
    fn into_capacity(self) -> Result<Capacity, CacheError>;
}

impl<T> IntoCapacity for T
where
    T: TryInto<Capacity>,
    CacheError: From<T::Error>,
{
    fn into_capacity(self) -> Result<Capacity, CacheError> {
        self.try_into().map_err(CacheError::from)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
