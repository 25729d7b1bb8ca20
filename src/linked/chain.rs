//! Chain - the singly linked storage behind `LinkedList` and `LinkedQueue`.
//!
//! Keeps `head`, `tail` and an explicit `size` counter. `head` owns the
//! first node and every node owns its successor; `tail` is a cursor to the
//! last node for O(1) appends.
//!
//! Invariants, checked by `assert_consistent` in the tests:
//! - `size == 0` iff `head` and `tail` are both `None`
//! - following `next` from `head` reaches `tail` in exactly `size - 1` steps
//!   and `tail.next` is `None`

use std::fmt;
use std::marker::PhantomData;

use super::node::{alloc, reclaim, Link, Node};
use crate::common::bounds;
use crate::common::Value;

pub(crate) struct Chain {
    head: Link,
    tail: Link,
    size: usize,

    /// The chain owns boxed nodes for drop-check purposes.
    _owns: PhantomData<Box<Node>>,
}

impl Chain {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
            _owns: PhantomData,
        }
    }

    pub(crate) fn from_values(values: &[Value]) -> Self {
        let mut chain = Self::new();
        for &value in values {
            chain.push_back(value);
        }
        chain
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn front(&self) -> Option<Value> {
        self.first().map(Node::value)
    }

    pub(crate) fn back(&self) -> Option<Value> {
        // SAFETY: `tail` points to a live node owned by this chain.
        self.tail.map(|tail| unsafe { tail.as_ref().value() })
    }

    /// Borrow the node at `index` in `[0, size)`.
    pub(crate) fn find(&self, index: usize) -> Option<&Node> {
        // SAFETY: the node is owned by this chain and the borrow is tied to
        // `&self`, so it cannot be reclaimed while borrowed.
        self.node(index).map(|node| unsafe { &*node.as_ptr() })
    }

    /// Position of the first node holding `value`.
    pub(crate) fn position(&self, value: Value) -> Option<usize> {
        let mut cursor = self.first();
        let mut index = 0;
        while let Some(node) = cursor {
            if node.value() == value {
                return Some(index);
            }
            cursor = node.next();
            index += 1;
        }
        None
    }

    pub(crate) fn to_vec(&self) -> Vec<Value> {
        let mut values = Vec::with_capacity(self.size);
        let mut cursor = self.first();
        while let Some(node) = cursor {
            values.push(node.value());
            cursor = node.next();
        }
        values
    }

    fn first(&self) -> Option<&Node> {
        // SAFETY: `head` points to a live node owned by this chain; the
        // borrow is tied to `&self`.
        self.head.map(|head| unsafe { &*head.as_ptr() })
    }

    /// Link to the node at `index`.
    ///
    /// Every index-based operation goes through here: it validates `index`
    /// against `[0, size)` and walks from `head`. The last index is answered
    /// from `tail` without walking.
    fn node(&self, index: usize) -> Link {
        let index = bounds::element_index(index, self.size)?;
        if index == self.size - 1 {
            return self.tail;
        }

        let mut cursor = self.head;
        for _ in 0..index {
            // SAFETY: `index < size`, so every node on the way is live.
            cursor = unsafe { cursor?.as_ref().next };
        }
        cursor
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub(crate) fn push_back(&mut self, value: Value) {
        let link = alloc(Node::new(value));
        match self.tail {
            // SAFETY: `tail` is live and its `next` is `None`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(link) },
            None => self.head = Some(link),
        }
        self.tail = Some(link);
        self.size += 1;
    }

    pub(crate) fn push_front(&mut self, value: Value) {
        let mut node = Node::new(value);
        node.next = self.head;
        let link = alloc(node);
        if self.tail.is_none() {
            self.tail = Some(link);
        }
        self.head = Some(link);
        self.size += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<Value> {
        let head = self.head?;
        // SAFETY: `head` is owned by this chain and is unlinked right below.
        let node = unsafe { reclaim(head) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        Some(node.value())
    }

    /// Insert at `index` in `[0, size]`.
    pub(crate) fn insert(&mut self, index: usize, value: Value) -> bool {
        let Some(index) = bounds::insert_position(index, self.size) else {
            return false;
        };

        if index == 0 {
            self.push_front(value);
        } else if index == self.size {
            self.push_back(value);
        } else {
            let Some(mut prev) = self.node(index - 1) else {
                return false;
            };
            // SAFETY: `prev` is a live interior node; the new node takes over
            // ownership of its successor.
            unsafe {
                let mut node = Node::new(value);
                node.next = prev.as_ref().next;
                prev.as_mut().next = Some(alloc(node));
            }
            self.size += 1;
        }
        true
    }

    pub(crate) fn set(&mut self, index: usize, value: Value) -> bool {
        match self.node(index) {
            Some(mut node) => {
                // SAFETY: `node` is live and no other borrow of it exists.
                unsafe { node.as_mut().set_value(value) };
                true
            }
            None => false,
        }
    }

    /// Remove the node at `index` in `[0, size)`.
    pub(crate) fn remove(&mut self, index: usize) -> Option<Value> {
        let index = bounds::element_index(index, self.size)?;
        if index == 0 {
            return self.pop_front();
        }

        let mut prev = self.node(index - 1)?;
        // SAFETY: `index < size`, so `prev.next` is live. It is unlinked
        // before being reclaimed.
        let node = unsafe {
            let target = prev.as_ref().next?;
            let node = reclaim(target);
            prev.as_mut().next = node.next;
            node
        };
        if node.next.is_none() {
            self.tail = Some(prev);
        }
        self.size -= 1;
        Some(node.value())
    }

    /// Release every node, front to back.
    pub(crate) fn clear(&mut self) {
        let mut cursor = self.head.take();
        self.tail = None;
        let released = std::mem::take(&mut self.size);

        while let Some(link) = cursor {
            // SAFETY: each node is reached once through its owning `next`.
            let node = unsafe { reclaim(link) };
            cursor = node.next;
        }

        if released > 0 {
            tracing::trace!(released, "released node chain");
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        match (self.head, self.tail) {
            (None, None) => assert_eq!(self.size, 0),
            (Some(head), Some(tail)) => {
                let mut cursor = head;
                for _ in 1..self.size {
                    // SAFETY: test-only walk over live nodes.
                    cursor = unsafe { cursor.as_ref().next }.expect("chain shorter than size");
                }
                assert_eq!(cursor, tail, "tail is not size - 1 steps from head");
                assert!(unsafe { tail.as_ref().next }.is_none(), "tail has a successor");
            }
            _ => panic!("head and tail disagree on emptiness"),
        }
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}
