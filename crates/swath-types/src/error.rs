//! Error types for the Swath engine.
//!
//! All crates return `SwathResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Swath engine.
#[derive(Debug, Error)]
pub enum SwathError {
    /// Grid description is malformed (zero resolution with pins,
    /// pin coordinates outside the lattice, …).
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Configuration value is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, SwathError>`.
pub type SwathResult<T> = Result<T, SwathError>;
