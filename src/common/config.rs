//! Configuration constants for the buffer-backed containers.

/// Capacity used by `Default` for [`ArrayStack`](crate::ArrayStack) and
/// [`DynamicArray`](crate::DynamicArray).
pub const INIT_CAPACITY: usize = 10;

/// Number of cells added when a full buffer must accept another element.
///
/// Growth is additive, not multiplicative: a buffer created with capacity
/// `c` holds `c`, `c + 5`, `c + 10`, ... cells as it fills up.
pub const CAPACITY_GROWTH: usize = 5;
