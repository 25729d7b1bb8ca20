//! linear-containers - classic linear data structures over `i32` values.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Interfaces (traits/)                    │
//! │             Stack (LIFO)   List (indexed)   Queue (FIFO)     │
//! └──────────────────────────────────────────────────────────────┘
//!          ↑                    ↑                     ↑
//! ┌──────────────────────────┐   ┌───────────────────────────────┐
//! │ Buffer-backed (buffer/)  │   │ Node-based (linked/)          │
//! │  ArrayStack  DynamicArray│   │  LinkedList  LinkedQueue      │
//! │        └── Cells ──┘     │   │      └─ Chain ─┘ LinkedDeque  │
//! │  contiguous block, +5    │   │  owning `next`, non-owning    │
//! │  cells per growth step   │   │  `tail` / `prev` cursors      │
//! └──────────────────────────┘   └───────────────────────────────┘
//!          ↓                                   ↓
//! ┌──────────────────────────────────────────────────────────────┐
//! │          Shared primitives (common/)                         │
//! │   Value, Capacity, Error, config constants, bounds checks    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Value, Capacity, Error, config)
//! - [`traits`] - The `Stack`, `List` and `Queue` interfaces
//! - [`buffer`] - Containers over a growable contiguous block
//! - [`linked`] - Containers over heap-allocated nodes
//!
//! # Failure model
//! Invalid capacity arguments are hard failures returned as
//! [`Error`]. Out-of-range indices and removals from an empty container are
//! soft failures: the operation returns `false` or `None` and the container
//! is left exactly as it was.
//!
//! # Quick Start
//! ```
//! use linear_containers::{ArrayStack, DynamicArray, LinkedQueue};
//!
//! let mut stack = ArrayStack::new(3).unwrap();
//! stack.push(1);
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//!
//! let mut array = DynamicArray::default();
//! array.add(10);
//! assert!(array.insert(0, 5));
//! assert_eq!(array.get(1), Some(10));
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue(1);
//! assert_eq!(queue.front(), Some(1));
//! ```

pub mod buffer;
pub mod common;
pub mod linked;
pub mod traits;

// Re-export commonly used items at crate root for convenience
pub use common::config::{CAPACITY_GROWTH, INIT_CAPACITY};
pub use common::{Capacity, Error, Result, Value};

pub use buffer::{ArrayStack, DynamicArray};
pub use linked::{LinkedDeque, LinkedList, LinkedQueue, Node};
pub use traits::{List, Queue, Stack};
