//! Validated buffer capacity.

use std::fmt;
use std::num::NonZeroUsize;

use super::config::{CAPACITY_GROWTH, INIT_CAPACITY};
use super::error::{Error, Result};

/// Number of cells in a buffer-backed container.
///
/// A zero capacity is rejected at construction, so every `Capacity` is
/// positive. Containers store their cell count as a plain `usize` and only
/// go through this type when accepting a capacity from the caller.
///
/// # Example
/// ```
/// use linear_containers::Capacity;
///
/// let capacity = Capacity::new(3).unwrap();
/// assert_eq!(capacity.get(), 3);
/// assert_eq!(capacity.grown().get(), 8);
/// assert!(Capacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Capacity used by the containers' `Default` impls.
    pub const DEFAULT: Capacity = match NonZeroUsize::new(INIT_CAPACITY) {
        Some(n) => Capacity(n),
        None => panic!("INIT_CAPACITY must be positive"),
    };

    /// Validate a caller-supplied capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        match NonZeroUsize::new(capacity) {
            Some(n) => Ok(Capacity(n)),
            None => {
                tracing::warn!(capacity, "rejected non-positive capacity");
                Err(Error::InvalidCapacity(capacity))
            }
        }
    }

    /// Number of cells.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Capacity after one growth step.
    #[inline]
    pub fn grown(self) -> Self {
        Capacity(self.0.saturating_add(CAPACITY_GROWTH))
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cells", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_new() {
        assert_eq!(Capacity::new(1).unwrap().get(), 1);
        assert_eq!(Capacity::new(0), Err(Error::InvalidCapacity(0)));
    }

    #[test]
    fn test_capacity_default() {
        assert_eq!(Capacity::default().get(), INIT_CAPACITY);
    }

    #[test]
    fn test_capacity_grown() {
        let capacity = Capacity::new(3).unwrap();
        assert_eq!(capacity.grown().get(), 3 + CAPACITY_GROWTH);
        assert_eq!(capacity.grown().grown().get(), 3 + 2 * CAPACITY_GROWTH);
    }

    #[test]
    fn test_capacity_display() {
        assert_eq!(format!("{}", Capacity::new(7).unwrap()), "7 cells");
    }
}
