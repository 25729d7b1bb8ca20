//! Common types and utilities shared across the containers.
//!
//! This module contains:
//! - Configuration constants
//! - Error types
//! - The validated [`Capacity`] newtype
//! - Index range checks

pub(crate) mod bounds;
mod capacity;
pub mod config;
pub mod error;

pub use capacity::Capacity;
pub use error::{Error, Result};

/// Element type stored by every container.
pub type Value = i32;
