//! LinkedQueue - FIFO over singly linked nodes.

use std::fmt;

use super::chain::Chain;
use crate::common::Value;
use crate::traits::Queue;

/// Queue that enqueues at the tail and dequeues from the head. All
/// operations except `clear` are O(1).
pub struct LinkedQueue {
    chain: Chain,
}

impl LinkedQueue {
    pub fn new() -> Self {
        Self { chain: Chain::new() }
    }

    /// Build a queue holding `values`, first value at the front.
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            chain: Chain::from_values(values),
        }
    }

    pub fn enqueue(&mut self, value: Value) {
        self.chain.push_back(value);
    }

    /// Remove and return the front value, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<Value> {
        self.chain.pop_front()
    }

    /// Release every node.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    #[inline]
    pub fn front(&self) -> Option<Value> {
        self.chain.front()
    }

    #[inline]
    pub fn back(&self) -> Option<Value> {
        self.chain.back()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.size() == 0
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.chain.size()
    }

    /// Values from front to back.
    pub fn to_vec(&self) -> Vec<Value> {
        self.chain.to_vec()
    }
}

impl Default for LinkedQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkedQueue").field(&self.chain).finish()
    }
}

impl Queue for LinkedQueue {
    fn enqueue(&mut self, value: Value) {
        LinkedQueue::enqueue(self, value);
    }

    fn dequeue(&mut self) -> Option<Value> {
        LinkedQueue::dequeue(self)
    }

    fn clear(&mut self) {
        LinkedQueue::clear(self);
    }

    fn front(&self) -> Option<Value> {
        LinkedQueue::front(self)
    }

    fn back(&self) -> Option<Value> {
        LinkedQueue::back(self)
    }

    fn size(&self) -> usize {
        LinkedQueue::size(self)
    }
}
