//! LIFO interface.

use crate::common::Value;

/// "Last in, first out" container.
pub trait Stack {
    /// Put `value` on top of the stack.
    fn push(&mut self, value: Value);

    /// Remove the top element.
    ///
    /// Returns `None` (and changes nothing) when the stack is empty.
    fn pop(&mut self) -> Option<Value>;

    /// Remove every element.
    fn clear(&mut self);

    /// Top element, or `None` when the stack is empty.
    fn peek(&self) -> Option<Value>;

    /// Number of elements.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
