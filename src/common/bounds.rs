//! Index range checks shared by the indexable containers.
//!
//! Two ranges matter:
//! - element positions `[0, size)` for `get`, `set` and `remove`
//! - insertion positions `[0, size]`, where `size` means "append"

/// Returns `Some(index)` when `index` addresses an existing element.
#[inline]
pub(crate) fn element_index(index: usize, size: usize) -> Option<usize> {
    if index < size {
        Some(index)
    } else {
        tracing::trace!(index, size, "index out of range [0, size)");
        None
    }
}

/// Returns `Some(index)` when `index` is a valid insertion position.
#[inline]
pub(crate) fn insert_position(index: usize, size: usize) -> Option<usize> {
    if index <= size {
        Some(index)
    } else {
        tracing::trace!(index, size, "insert position out of range [0, size]");
        None
    }
}
