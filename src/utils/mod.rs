//! Shared utilities
//!
//! Path manipulation helpers used across configuration and metadata handling

pub mod path;

pub use path::*;
