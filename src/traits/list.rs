//! Sequence interface.

use crate::common::Value;

/// Indexable, ordered sequence.
///
/// Index-based operations never panic. An index outside the valid range
/// yields `false` / `None` and leaves the list untouched:
/// - `get`, `set`, `remove` accept `[0, size)`
/// - `insert` accepts `[0, size]`, where `size` appends
pub trait List {
    /// Append `value` at the end.
    fn add(&mut self, value: Value);

    /// Insert `value` so that it ends up at `index`.
    #[must_use]
    fn insert(&mut self, index: usize, value: Value) -> bool;

    /// Overwrite the element at `index`.
    #[must_use]
    fn set(&mut self, index: usize, value: Value) -> bool;

    /// Remove and return the element at `index`.
    fn remove(&mut self, index: usize) -> Option<Value>;

    /// Remove every element.
    fn clear(&mut self);

    /// Element at `index`.
    fn get(&self, index: usize) -> Option<Value>;

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: Value) -> Option<usize>;

    /// Number of elements.
    fn size(&self) -> usize;

    fn contains(&self, value: Value) -> bool {
        self.index_of(value).is_some()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
