//! Node types for the linked containers.
//!
//! Nodes live on the heap and are addressed through `NonNull` links. The
//! containers own them: a node is allocated by [`alloc`] when a value is
//! inserted and handed back to [`reclaim`] exactly once, when the value is
//! removed or the container is cleared.
//!
//! `next` is the owning edge of a chain. Releasing a chain means walking
//! `next` from the head and reclaiming each node in turn. `prev` links and
//! the containers' tail cursors never own anything and are never reclaimed
//! through.

use std::fmt;
use std::ptr::NonNull;

use crate::common::Value;

/// Optional link to a [`Node`].
pub(crate) type Link = Option<NonNull<Node>>;

/// Optional link to a [`DoubleNode`].
pub(crate) type DoubleLink = Option<NonNull<DoubleNode>>;

/// A node of a singly linked chain.
pub struct Node {
    value: Value,
    pub(crate) next: Link,
}

impl Node {
    /// Create a detached node.
    pub fn new(value: Value) -> Self {
        Self { value, next: None }
    }

    #[inline]
    pub fn value(&self) -> Value {
        self.value
    }

    #[inline]
    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// The following node, if any.
    pub fn next(&self) -> Option<&Node> {
        // SAFETY: a linked node is owned by the same container as `self`,
        // and the returned borrow cannot outlive the borrow of `self`.
        self.next.map(|next| unsafe { next.as_ref() })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// A node of a doubly linked chain.
///
/// `prev` is a back-reference only; the predecessor's `next` owns `self`.
pub(crate) struct DoubleNode {
    pub(crate) value: Value,
    pub(crate) next: DoubleLink,
    pub(crate) prev: DoubleLink,
}

impl DoubleNode {
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }
}

/// Move `node` to the heap and return a link to it.
pub(crate) fn alloc<T>(node: T) -> NonNull<T> {
    NonNull::from(Box::leak(Box::new(node)))
}

/// Take ownership of a node back from its link.
///
/// # Safety
/// `link` must come from [`alloc`], must not have been reclaimed before,
/// and must not be dereferenced through any other link afterwards.
pub(crate) unsafe fn reclaim<T>(link: NonNull<T>) -> Box<T> {
    // SAFETY: guaranteed by the caller.
    unsafe { Box::from_raw(link.as_ptr()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let node = Node::new(5);
        assert_eq!(node.value(), 5);
        assert!(node.next().is_none());
    }

    #[test]
    fn test_alloc_reclaim() {
        let first = alloc(Node::new(1));
        let mut second = Node::new(2);
        second.next = Some(first);
        let second = alloc(second);

        // SAFETY: both links come from `alloc` and are reclaimed once.
        unsafe {
            assert_eq!(second.as_ref().next().map(Node::value), Some(1));
            let second = reclaim(second);
            assert_eq!(second.value(), 2);
            let first = reclaim(first);
            assert_eq!(first.value(), 1);
        }
    }

    #[test]
    fn test_double_node_new() {
        let node = DoubleNode::new(3);
        assert_eq!(node.value, 3);
        assert!(node.next.is_none());
        assert!(node.prev.is_none());
    }
}
