//! Cells - the growable block behind the buffer-backed containers.
//!
//! [`Cells`] owns one contiguous, zero-filled allocation plus the length of
//! its occupied prefix. [`ArrayStack`](super::ArrayStack) and
//! [`DynamicArray`](super::DynamicArray) are thin policies over it.
//!
//! # Layout
//! ```text
//!   0                size            capacity
//!   ├─────────────────┼──────────────────┤
//!   │  logical values │  spare cells     │
//!   └─────────────────┴──────────────────┘
//! ```
//! Spare cells are zero when first allocated. After a pop, remove or clear
//! they keep whatever was last written there.

use std::fmt;

use crate::common::bounds;
use crate::common::config::CAPACITY_GROWTH;
use crate::common::{Capacity, Error, Result, Value};

pub(crate) struct Cells {
    /// The allocated block. `data.len()` is the capacity.
    data: Box<[Value]>,

    /// Number of occupied cells at the front of `data`.
    size: usize,
}

impl Cells {
    /// Allocate `capacity` zeroed cells.
    pub(crate) fn with_capacity(capacity: Capacity) -> Self {
        Self {
            data: zeroed(capacity.get()),
            size: 0,
        }
    }

    /// Allocate `capacity` zeroed cells and copy `values` into the front.
    pub(crate) fn from_values(values: &[Value], capacity: Capacity) -> Result<Self> {
        if values.len() > capacity.get() {
            tracing::warn!(
                len = values.len(),
                capacity = capacity.get(),
                "seed values exceed capacity"
            );
            return Err(Error::TooManyValues {
                len: values.len(),
                capacity: capacity.get(),
            });
        }

        let mut cells = Self::with_capacity(capacity);
        cells.data[..values.len()].copy_from_slice(values);
        cells.size = values.len();
        Ok(cells)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.size == self.data.len()
    }

    /// Occupied prefix.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[Value] {
        &self.data[..self.size]
    }

    /// Whole allocated block, spare cells included.
    #[inline]
    pub(crate) fn cells(&self) -> &[Value] {
        &self.data
    }

    pub(crate) fn get(&self, index: usize) -> Option<Value> {
        bounds::element_index(index, self.size).map(|index| self.data[index])
    }

    pub(crate) fn last(&self) -> Option<Value> {
        self.size.checked_sub(1).map(|index| self.data[index])
    }

    pub(crate) fn position(&self, value: Value) -> Option<usize> {
        self.as_slice().iter().position(|&cell| cell == value)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub(crate) fn set(&mut self, index: usize, value: Value) -> bool {
        match bounds::element_index(index, self.size) {
            Some(index) => {
                self.data[index] = value;
                true
            }
            None => false,
        }
    }

    /// Append, growing by [`CAPACITY_GROWTH`] when full.
    pub(crate) fn push(&mut self, value: Value) {
        if self.is_full() {
            self.grow_with_gap(self.size);
        }
        self.data[self.size] = value;
        self.size += 1;
    }

    /// Logical removal of the last element. The cell keeps its value.
    pub(crate) fn pop(&mut self) -> Option<Value> {
        let value = self.last()?;
        self.size -= 1;
        Some(value)
    }

    /// Insert at `index` in `[0, size]`, shifting the tail right.
    pub(crate) fn insert(&mut self, index: usize, value: Value) -> bool {
        let Some(index) = bounds::insert_position(index, self.size) else {
            return false;
        };

        if self.is_full() {
            // The new block is written with the hole already in place.
            self.grow_with_gap(index);
        } else {
            self.data.copy_within(index..self.size, index + 1);
        }
        self.data[index] = value;
        self.size += 1;
        true
    }

    /// Remove the element at `index` in `[0, size)`, shifting the tail left.
    pub(crate) fn remove(&mut self, index: usize) -> Option<Value> {
        let index = bounds::element_index(index, self.size)?;
        let value = self.data[index];
        self.data.copy_within(index + 1..self.size, index);
        self.size -= 1;
        Some(value)
    }

    pub(crate) fn clear(&mut self) {
        self.size = 0;
    }

    /// Reallocate to exactly `new_capacity` cells, keeping the occupied prefix.
    pub(crate) fn resize(&mut self, new_capacity: usize) -> Result<()> {
        let current = self.capacity();
        if new_capacity <= current {
            tracing::warn!(current, requested = new_capacity, "resize rejected");
            return Err(Error::CapacityNotIncreased {
                current,
                requested: new_capacity,
            });
        }

        let mut data = zeroed(new_capacity);
        data[..self.size].copy_from_slice(self.as_slice());
        self.data = data;

        tracing::debug!(
            old_capacity = current,
            new_capacity,
            size = self.size,
            "buffer resized"
        );
        Ok(())
    }

    /// Grow by one step, leaving cell `gap` free for the caller to fill.
    ///
    /// Elements before `gap` keep their positions and elements at or after
    /// it move one cell right, all in the same copy into the new block.
    /// `size` is left unchanged.
    fn grow_with_gap(&mut self, gap: usize) {
        debug_assert!(gap <= self.size);

        let old_capacity = self.capacity();
        let new_capacity = old_capacity + CAPACITY_GROWTH;
        let mut data = zeroed(new_capacity);
        data[..gap].copy_from_slice(&self.data[..gap]);
        data[gap + 1..=self.size].copy_from_slice(&self.data[gap..self.size]);
        self.data = data;

        tracing::debug!(
            old_capacity,
            new_capacity,
            size = self.size,
            "buffer grown"
        );
    }
}

impl fmt::Debug for Cells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

fn zeroed(capacity: usize) -> Box<[Value]> {
    vec![0; capacity].into_boxed_slice()
}
