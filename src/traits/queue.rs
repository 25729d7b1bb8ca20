//! FIFO interface.

use crate::common::Value;

/// "First in, first out" container.
pub trait Queue {
    /// Append `value` at the back.
    fn enqueue(&mut self, value: Value);

    /// Remove the front element.
    ///
    /// Returns `None` (and changes nothing) when the queue is empty.
    fn dequeue(&mut self) -> Option<Value>;

    /// Remove every element.
    fn clear(&mut self);

    /// Front element, or `None` when empty.
    fn front(&self) -> Option<Value>;

    /// Back element, or `None` when empty.
    fn back(&self) -> Option<Value>;

    /// Number of elements.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
