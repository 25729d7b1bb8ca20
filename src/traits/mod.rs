//! Container interfaces.
//!
//! - [`Stack`] - last in, first out
//! - [`Queue`] - first in, first out
//! - [`List`] - indexable, insertable sequence
//!
//! Every container also exposes the same operations as inherent methods,
//! so the traits are only needed for code that is generic over the
//! implementation.

mod list;
mod queue;
mod stack;

pub use list::List;
pub use queue::Queue;
pub use stack::Stack;
