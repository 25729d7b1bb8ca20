//! Error types for linear-containers.
//!
//! Only argument violations are errors. Out-of-range indices and removals
//! from an empty container are reported through `bool` / `Option` return
//! values and never reach this type.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Hard failures raised by container constructors and `resize`.
///
/// Every variant is an "invalid argument" condition: the caller asked for
/// something the container cannot represent, and nothing was allocated or
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested capacity is not positive.
    #[error("invalid argument: capacity must be positive, got {0}")]
    InvalidCapacity(usize),

    /// `resize` was asked for a capacity that is not larger than the current one.
    #[error("invalid argument: new capacity {requested} does not exceed current capacity {current}")]
    CapacityNotIncreased { current: usize, requested: usize },

    /// Seed values do not fit in the requested capacity.
    #[error("invalid argument: {len} values do not fit in capacity {capacity}")]
    TooManyValues { len: usize, capacity: usize },
}

impl Error {
    /// All current variants are argument violations.
    ///
    /// Kept as a method so callers can branch on the error class without
    /// matching every variant.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidCapacity(_)
                | Error::CapacityNotIncreased { .. }
                | Error::TooManyValues { .. }
        )
    }
}
