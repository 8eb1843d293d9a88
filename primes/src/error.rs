//! Error types for prime sequence generation.

use std::io;

use thiserror::Error;

/// Result type for prime generation operations.
pub type Result<T> = std::result::Result<T, PrimesError>;

/// Errors that can occur while generating or loading a prime sequence.
#[derive(Debug, Error)]
pub enum PrimesError {
    /// A prime count below 1 was requested.
    #[error("requested prime count must be at least 1, got {0}")]
    InvalidCount(i32),

    /// A file-backed load ran out of values before the requested count was read.
    #[error("file holds only {available} primes, {requested} were requested")]
    InsufficientData {
        /// Number of primes the caller asked for.
        requested: i32,
        /// Number of primes the file actually contained.
        available: usize,
    },

    /// The prime file could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
