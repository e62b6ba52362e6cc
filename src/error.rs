//! Error types for the Ladle library.
//!
//! This module provides error handling for all Ladle operations. All errors
//! are represented by the [`LadleError`] enum, which provides detailed
//! information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use ladle::error::{LadleError, Result};
//!
//! fn check_catalog(entries: &[String]) -> Result<()> {
//!     if entries.is_empty() {
//!         return Err(LadleError::invalid_argument("catalog must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_catalog(&[]).is_err());
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Ladle operations.
///
/// This enum represents all possible errors that can occur in the Ladle
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum LadleError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Caller-supplied input rejected up front
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal invariant broken; indicates a bug rather than bad input
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Catalog content errors (blank names, malformed records, etc.)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LadleError.
pub type Result<T> = std::result::Result<T, LadleError>;

impl LadleError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LadleError::InvalidArgument(msg.into())
    }

    /// Create a new invariant violation error.
    pub fn invariant<S: Into<String>>(msg: S) -> Self {
        LadleError::InvariantViolation(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        LadleError::Catalog(msg.into())
    }
}
