//! System abstraction for environment and filesystem operations
//!
//! This module provides a unified trait for the external system interactions
//! the driver performs, allowing for easy testing with mock implementations.

use std::env::VarError;
use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations (environment + filesystem)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env` and `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Get an environment variable
    fn env_var(&self, key: &str) -> Result<String, VarError>;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Canonicalize a path (resolve to absolute path)
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}
