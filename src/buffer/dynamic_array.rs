//! DynamicArray - indexable sequence over a growable buffer.

use std::fmt;

use super::cells::Cells;
use crate::common::{Capacity, Result, Value};
use crate::traits::List;

/// Array whose elements sit next to each other in one block of cells.
///
/// Growth works exactly like [`ArrayStack`](super::ArrayStack): a full array
/// gains [`CAPACITY_GROWTH`](crate::common::config::CAPACITY_GROWTH) cells
/// before accepting another element.
///
/// # Complexity
/// | Operation            | Cost                |
/// |----------------------|---------------------|
/// | `get` / `set`        | O(1)                |
/// | `add`                | O(1) amortized      |
/// | `insert` / `remove`  | O(n)                |
/// | `index_of`           | O(n)                |
pub struct DynamicArray {
    cells: Cells,
}

impl DynamicArray {
    /// Create an empty array with `capacity` zeroed cells.
    ///
    /// # Errors
    /// [`Error::InvalidCapacity`](crate::Error::InvalidCapacity) when
    /// `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::with_capacity(Capacity::new(capacity)?))
    }

    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            cells: Cells::with_capacity(capacity),
        }
    }

    /// Create an array holding `values` in a block of `capacity` cells.
    ///
    /// # Errors
    /// `InvalidCapacity` for a zero capacity, `TooManyValues` when
    /// `values` does not fit.
    pub fn from_values(values: &[Value], capacity: usize) -> Result<Self> {
        Ok(Self {
            cells: Cells::from_values(values, Capacity::new(capacity)?)?,
        })
    }

    pub fn add(&mut self, value: Value) {
        self.cells.push(value);
    }

    /// Insert `value` at `index` in `[0, size]`.
    ///
    /// Returns `false` without touching the array when `index > size`.
    #[must_use]
    pub fn insert(&mut self, index: usize, value: Value) -> bool {
        self.cells.insert(index, value)
    }

    #[must_use]
    pub fn set(&mut self, index: usize, value: Value) -> bool {
        self.cells.set(index, value)
    }

    /// Remove and return the element at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        self.cells.remove(index)
    }

    /// Forget all elements. Capacity and cell contents are unchanged.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.cells.get(index)
    }

    pub fn index_of(&self, value: Value) -> Option<usize> {
        self.cells.position(value)
    }

    pub fn contains(&self, value: Value) -> bool {
        self.index_of(value).is_some()
    }

    /// Grow the block to exactly `new_capacity` cells.
    ///
    /// # Errors
    /// [`Error::CapacityNotIncreased`](crate::Error::CapacityNotIncreased)
    /// when `new_capacity` is not larger than the current capacity.
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

    pub fn as_slice(&self) -> &[Value] {
        self.cells.as_slice()
    }

    /// The whole allocated block, including cells past `size`.
    pub fn cells(&self) -> &[Value] {
        self.cells.cells()
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::with_capacity(Capacity::DEFAULT)
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("values", &self.cells)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl List for DynamicArray {
    fn add(&mut self, value: Value) {
        DynamicArray::add(self, value);
    }

    fn insert(&mut self, index: usize, value: Value) -> bool {
        DynamicArray::insert(self, index, value)
    }

    fn set(&mut self, index: usize, value: Value) -> bool {
        DynamicArray::set(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Option<Value> {
        DynamicArray::remove(self, index)
    }

    fn clear(&mut self) {
        DynamicArray::clear(self);
    }

    fn get(&self, index: usize) -> Option<Value> {
        DynamicArray::get(self, index)
    }

    fn index_of(&self, value: Value) -> Option<usize> {
        DynamicArray::index_of(self, value)
    }

    fn size(&self) -> usize {
        DynamicArray::size(self)
    }
}
