//! Error types for the checked surfaces of the crate.
//!
//! Sorting and indexing treat bad input as a programming error and panic.
//! `DiskError` is only produced where counts come from outside, such as the
//! benchmark command line.

use thiserror::Error;

/// Errors reported by checked constructors and the benchmark binary.
#[derive(Error, Debug)]
pub enum DiskError {
    /// A row was requested with zero light disks
    #[error("a disk row needs at least one light disk")]
    EmptyRow,

    /// The row length `2 * light_count` does not fit in a usize
    #[error("{light_count} light disks is too many for one row")]
    TooManyDisks { light_count: usize },

    /// Invalid benchmark configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Failure while writing results as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Type alias for Results using DiskError
pub type Result<T> = std::result::Result<T, DiskError>;

impl DiskError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
