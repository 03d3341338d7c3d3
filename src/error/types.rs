//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for pkgprep operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DriverError {
    /// Configuration Error - missing or invalid configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Metadata Error - package info retrieval or parsing failed
    #[error("Metadata error: {message}")]
    Metadata { message: String },

    /// Preprocess Error - a preprocessing command failed
    #[error("Preprocess error: {message}")]
    Preprocess { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl DriverError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Metadata { .. } => 2,
            Self::Preprocess { .. } => 3,
            Self::Filesystem { .. } => 4,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a metadata error
    #[inline]
    pub fn metadata<S: Into<String>>(message: S) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Create a preprocess error
    #[inline]
    pub fn preprocess<S: Into<String>>(message: S) -> Self {
        Self::Preprocess {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}
