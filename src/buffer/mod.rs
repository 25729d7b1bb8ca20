//! Buffer-backed containers.
//!
//! Both containers keep their elements in one contiguous, zero-filled block
//! that grows by a fixed number of cells when full.
//!
//! # Components
//! - [`ArrayStack`] - LIFO stack
//! - [`DynamicArray`] - indexable list

mod array_stack;
mod cells;
mod dynamic_array;

pub use array_stack::ArrayStack;
pub use dynamic_array::DynamicArray;
