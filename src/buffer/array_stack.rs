//! ArrayStack - LIFO over a growable buffer.

use std::fmt;

use super::cells::Cells;
use crate::common::{Capacity, Result, Value};
use crate::traits::Stack;

/// Stack stored in one contiguous block of cells.
///
/// Pushing onto a full stack grows the block by
/// [`CAPACITY_GROWTH`](crate::common::config::CAPACITY_GROWTH) cells.
/// Popping is logical only: the vacated cell keeps its old value, which is
/// visible through [`cells`](Self::cells).
///
/// # Example
/// ```
/// use linear_containers::ArrayStack;
///
/// let mut stack = ArrayStack::new(3).unwrap();
/// for value in [1, 2, 3, 4] {
///     stack.push(value);
/// }
/// assert_eq!(stack.capacity(), 8);
/// assert_eq!(stack.peek(), Some(4));
/// assert_eq!(&stack.cells()[..4], &[1, 2, 3, 4]);
/// ```
pub struct ArrayStack {
    cells: Cells,
}

impl ArrayStack {
    /// Create an empty stack with `capacity` zeroed cells.
    ///
    /// # Errors
    /// [`Error::InvalidCapacity`](crate::Error::InvalidCapacity) when
    /// `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::with_capacity(Capacity::new(capacity)?))
    }

    /// Create an empty stack from an already validated capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            cells: Cells::with_capacity(capacity),
        }
    }

    /// Create a stack holding `values` (bottom first) in a block of `capacity` cells.
    ///
    /// # Errors
    /// `InvalidCapacity` for a zero capacity, `TooManyValues` when
    /// `values` does not fit.
    pub fn from_values(values: &[Value], capacity: usize) -> Result<Self> {
        Ok(Self {
            cells: Cells::from_values(values, Capacity::new(capacity)?)?,
        })
    }

    /// Push `value`, growing the block if it is full. O(1) amortized.
    pub fn push(&mut self, value: Value) {
        self.cells.push(value);
    }

    /// Remove and return the top element, or `None` when empty.
    pub fn pop(&mut self) -> Option<Value> {
        self.cells.pop()
    }

    #[inline]
    pub fn peek(&self) -> Option<Value> {
        self.cells.last()
    }

    /// Forget all elements. Capacity and cell contents are unchanged.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Grow the block to exactly `new_capacity` cells.
    ///
    /// # Errors
    /// [`Error::CapacityNotIncreased`](crate::Error::CapacityNotIncreased)
    /// when `new_capacity` is not larger than the current capacity. The
    /// stack is unchanged in that case.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        self.cells.resize(new_capacity)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.size() == 0
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.capacity()
    }

    /// Elements from bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        self.cells.as_slice()
    }

    /// The whole allocated block, including cells past the top.
    pub fn cells(&self) -> &[Value] {
        self.cells.cells()
    }
}

impl Default for ArrayStack {
    fn default() -> Self {
        Self::with_capacity(Capacity::DEFAULT)
    }
}

impl fmt::Debug for ArrayStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("values", &self.cells)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl Stack for ArrayStack {
    fn push(&mut self, value: Value) {
        ArrayStack::push(self, value);
    }

    fn pop(&mut self) -> Option<Value> {
        ArrayStack::pop(self)
    }

    fn clear(&mut self) {
        ArrayStack::clear(self);
    }

    fn peek(&self) -> Option<Value> {
        ArrayStack::peek(self)
    }

    fn size(&self) -> usize {
        ArrayStack::size(self)
    }
}
