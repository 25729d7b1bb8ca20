//! Node-based containers.
//!
//! # Components
//! - [`LinkedList`] - indexable singly linked list
//! - [`LinkedQueue`] - FIFO over singly linked nodes
//! - [`LinkedDeque`] - double-ended queue over doubly linked nodes
//! - [`Node`] - singly linked node, as returned by
//!   [`LinkedList::find_node`]

mod chain;
mod linked_deque;
mod linked_list;
mod linked_queue;
mod node;

pub use linked_deque::LinkedDeque;
pub use linked_list::LinkedList;
pub use linked_queue::LinkedQueue;
pub use node::Node;
