//! LinkedDeque - double-ended queue over doubly linked nodes.

use std::fmt;
use std::marker::PhantomData;

use super::node::{alloc, reclaim, DoubleLink, DoubleNode};
use crate::common::Value;
use crate::traits::Queue;

/// Queue that also accepts values at the front and gives them up at the back.
///
/// Every node owns its successor through `next` and points back at its
/// predecessor through a non-owning `prev`. All operations except `clear`
/// are O(1).
///
/// # Example
/// ```
/// use linear_containers::LinkedDeque;
///
/// let mut deque = LinkedDeque::new();
/// deque.enqueue(1);
/// deque.enqueue(2);
/// deque.enqueue_front(0);
/// assert_eq!((deque.front(), deque.back(), deque.size()), (Some(0), Some(2), 3));
///
/// assert_eq!(deque.dequeue_back(), Some(2));
/// assert_eq!((deque.back(), deque.size()), (Some(1), 2));
/// ```
pub struct LinkedDeque {
    front: DoubleLink,
    back: DoubleLink,
    size: usize,
    _owns: PhantomData<Box<DoubleNode>>,
}

impl LinkedDeque {
    pub fn new() -> Self {
        Self {
            front: None,
            back: None,
            size: 0,
            _owns: PhantomData,
        }
    }

    /// Build a deque holding `values`, first value at the front.
    pub fn from_values(values: &[Value]) -> Self {
        let mut deque = Self::new();
        for &value in values {
            deque.enqueue(value);
        }
        deque
    }

    /// Append `value` at the back.
    pub fn enqueue(&mut self, value: Value) {
        let mut node = DoubleNode::new(value);
        node.prev = self.back;
        let link = alloc(node);
        match self.back {
            // SAFETY: `back` is live and its `next` is `None`.
            Some(mut back) => unsafe { back.as_mut().next = Some(link) },
            None => self.front = Some(link),
        }
        self.back = Some(link);
        self.size += 1;
    }

    /// Prepend `value` at the front.
    pub fn enqueue_front(&mut self, value: Value) {
        let mut node = DoubleNode::new(value);
        node.next = self.front;
        let link = alloc(node);
        match self.front {
            // SAFETY: `front` is live and its `prev` is `None`.
            Some(mut front) => unsafe { front.as_mut().prev = Some(link) },
            None => self.back = Some(link),
        }
        self.front = Some(link);
        self.size += 1;
    }

    /// Remove and return the front value, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<Value> {
        let front = self.front?;
        // SAFETY: `front` is owned by this deque and is unlinked right below.
        let node = unsafe { reclaim(front) };
        self.front = node.next;
        match self.front {
            // SAFETY: the new front is live; its `prev` pointed at the
            // reclaimed node.
            Some(mut front) => unsafe { front.as_mut().prev = None },
            None => self.back = None,
        }
        self.size -= 1;
        Some(node.value)
    }

    /// Remove and return the back value, or `None` when empty.
    pub fn dequeue_back(&mut self) -> Option<Value> {
        let back = self.back?;
        // SAFETY: `back` is owned by this deque (through its predecessor's
        // `next`, or `front`) and is unlinked right below.
        let node = unsafe { reclaim(back) };
        self.back = node.prev;
        match self.back {
            // SAFETY: the new back is live; its `next` owned the reclaimed node.
            Some(mut back) => unsafe { back.as_mut().next = None },
            None => self.front = None,
        }
        self.size -= 1;
        Some(node.value)
    }

    /// Release every node, front to back.
    pub fn clear(&mut self) {
        let mut cursor = self.front.take();
        self.back = None;
        let released = std::mem::take(&mut self.size);

        while let Some(link) = cursor {
            // SAFETY: each node is reached once through its owning `next`.
            let node = unsafe { reclaim(link) };
            cursor = node.next;
        }

        if released > 0 {
            tracing::trace!(released, "released deque nodes");
        }
    }

    pub fn front(&self) -> Option<Value> {
        // SAFETY: `front` points to a live node owned by this deque.
        self.front.map(|front| unsafe { front.as_ref().value })
    }

    pub fn back(&self) -> Option<Value> {
        // SAFETY: `back` points to a live node owned by this deque.
        self.back.map(|back| unsafe { back.as_ref().value })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Values from front to back, following `next`.
    pub fn to_vec(&self) -> Vec<Value> {
        self.collect(self.front, |node| node.next)
    }

    /// Values from back to front, following `prev`.
    pub fn to_vec_reversed(&self) -> Vec<Value> {
        self.collect(self.back, |node| node.prev)
    }

    fn collect(&self, start: DoubleLink, step: impl Fn(&DoubleNode) -> DoubleLink) -> Vec<Value> {
        let mut values = Vec::with_capacity(self.size);
        let mut cursor = start;
        while let Some(link) = cursor {
            // SAFETY: links reachable from `front`/`back` are live.
            let node = unsafe { link.as_ref() };
            values.push(node.value);
            cursor = step(node);
        }
        values
    }
}

impl Default for LinkedDeque {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedDeque {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for LinkedDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkedDeque").field(&self.to_vec()).finish()
    }
}

impl Queue for LinkedDeque {
    fn enqueue(&mut self, value: Value) {
        LinkedDeque::enqueue(self, value);
    }

    fn dequeue(&mut self) -> Option<Value> {
        LinkedDeque::dequeue(self)
    }

    fn clear(&mut self) {
        LinkedDeque::clear(self);
    }

    fn front(&self) -> Option<Value> {
        LinkedDeque::front(self)
    }

    fn back(&self) -> Option<Value> {
        LinkedDeque::back(self)
    }

    fn size(&self) -> usize {
        LinkedDeque::size(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Forward and backward walks must see the same sequence.
    fn assert_links(deque: &LinkedDeque) {
        let forward = deque.to_vec();
        let mut backward = deque.to_vec_reversed();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), deque.size());
        assert_eq!(deque.front.is_none(), deque.back.is_none());
    }

    #[test]
    fn test_enqueue_front_and_dequeue_back() {
        let mut deque = LinkedDeque::new();
        deque.enqueue(1);
        deque.enqueue(2);
        deque.enqueue_front(0);
        assert_eq!(deque.front(), Some(0));
        assert_eq!(deque.back(), Some(2));
        assert_eq!(deque.size(), 3);
        assert_links(&deque);

        assert_eq!(deque.dequeue_back(), Some(2));
        assert_eq!(deque.back(), Some(1));
        assert_eq!(deque.size(), 2);
        assert_links(&deque);
    }

    #[test]
    fn test_enqueue_front_into_empty() {
        let mut deque = LinkedDeque::new();
        deque.enqueue_front(7);
        assert_eq!(deque.front(), Some(7));
        assert_eq!(deque.back(), Some(7));
        assert_links(&deque);
    }

    #[test]
    fn test_drain_from_both_ends() {
        let mut deque = LinkedDeque::from_values(&[1, 2, 3, 4]);
        assert_eq!(deque.dequeue(), Some(1));
        assert_eq!(deque.dequeue_back(), Some(4));
        assert_links(&deque);
        assert_eq!(deque.dequeue_back(), Some(3));
        assert_eq!(deque.dequeue(), Some(2));
        assert_links(&deque);
        assert!(deque.is_empty());
        assert_eq!(deque.front(), None);
        assert_eq!(deque.back(), None);
    }

    #[test]
    fn test_dequeue_empty() {
        let mut deque = LinkedDeque::new();
        assert_eq!(deque.dequeue(), None);
        assert_eq!(deque.dequeue_back(), None);
        assert_eq!(deque.size(), 0);
    }

    #[test]
    fn test_clear() {
        let mut deque = LinkedDeque::from_values(&[1, 2, 3]);
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.front(), None);
        assert_eq!(deque.back(), None);
        assert_links(&deque);

        deque.enqueue_front(9);
        assert_eq!(deque.to_vec(), vec![9]);
    }

    #[test]
    fn test_reversed_walk() {
        let deque = LinkedDeque::from_values(&[1, 2, 3]);
        assert_eq!(deque.to_vec_reversed(), vec![3, 2, 1]);
        assert_eq!(format!("{:?}", deque), "LinkedDeque([1, 2, 3])");
    }
}
