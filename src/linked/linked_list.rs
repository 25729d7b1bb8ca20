//! LinkedList - indexable sequence over singly linked nodes.

use std::fmt;

use super::chain::Chain;
use super::node::Node;
use crate::common::Value;
use crate::traits::List;

/// Singly linked list with head and tail cursors.
///
/// # Complexity
/// | Operation                         | Cost |
/// |-----------------------------------|------|
/// | `add`, `front`, `back`            | O(1) |
/// | `insert(0, _)`, `insert(size, _)` | O(1) |
/// | `remove(0)`                       | O(1) |
/// | everything else index-based       | O(n) |
///
/// # Example
/// ```
/// use linear_containers::LinkedList;
///
/// let mut list = LinkedList::from_values(&[10, 20, 30]);
/// assert_eq!(list.remove(1), Some(20));
/// assert_eq!(list.size(), 2);
/// assert_eq!(list.get(0), Some(10));
/// assert_eq!(list.get(1), Some(30));
/// ```
pub struct LinkedList {
    chain: Chain,
}

impl LinkedList {
    pub fn new() -> Self {
        Self { chain: Chain::new() }
    }

    /// Build a list holding `values` in order.
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            chain: Chain::from_values(values),
        }
    }

    /// Append `value` after the tail. O(1).
    pub fn add(&mut self, value: Value) {
        self.chain.push_back(value);
    }

    /// Insert `value` at `index` in `[0, size]`.
    ///
    /// Returns `false` without touching the list when `index > size`.
    #[must_use]
    pub fn insert(&mut self, index: usize, value: Value) -> bool {
        self.chain.insert(index, value)
    }

    #[must_use]
    pub fn set(&mut self, index: usize, value: Value) -> bool {
        self.chain.set(index, value)
    }

    /// Unlink and return the value at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        self.chain.remove(index)
    }

    /// Release every node.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.find_node(index).map(Node::value)
    }

    pub fn index_of(&self, value: Value) -> Option<usize> {
        self.chain.position(value)
    }

    pub fn contains(&self, value: Value) -> bool {
        self.index_of(value).is_some()
    }

    /// The node at `index`, or `None` outside `[0, size)`.
    pub fn find_node(&self, index: usize) -> Option<&Node> {
        self.chain.find(index)
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

    /// Values from head to tail.
    pub fn to_vec(&self) -> Vec<Value> {
        self.chain.to_vec()
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkedList").field(&self.chain).finish()
    }
}

impl List for LinkedList {
    fn add(&mut self, value: Value) {
        LinkedList::add(self, value);
    }

    fn insert(&mut self, index: usize, value: Value) -> bool {
        LinkedList::insert(self, index, value)
    }

    fn set(&mut self, index: usize, value: Value) -> bool {
        LinkedList::set(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Option<Value> {
        LinkedList::remove(self, index)
    }

    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    fn get(&self, index: usize) -> Option<Value> {
        LinkedList::get(self, index)
    }

    fn index_of(&self, value: Value) -> Option<usize> {
        LinkedList::index_of(self, value)
    }

    fn size(&self) -> usize {
        LinkedList::size(self)
    }
}
