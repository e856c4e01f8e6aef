//! Error types for the Onoma library.
//!
//! All failures are represented by the [`OnomaError`] enum. Expected failure
//! modes (invalid input, missing resource files) are recovered inside the
//! pipeline and never propagate past [`crate::suggest::NameValidator::validate`];
//! only unexpected failures cross the crate boundary.
//!
//! # Examples
//!
//! ```
//! use onoma::error::{OnomaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OnomaError::invalid_name("too short"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Onoma operations.
#[derive(Error, Debug)]
pub enum OnomaError {
    /// I/O errors (corpus or reference table file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input rejected by the validation gate (too short or contains digits).
    /// Recovered locally and surfaced as an analysis error marker.
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// Reference table errors (malformed rows, bad gender or popularity).
    #[error("Reference table error: {0}")]
    Reference(String),

    /// Analysis-related errors (tokenization, normalization, vectorization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Fan-out sub-queries did not all complete before the deadline.
    #[error("Partial suggestion result: {0}")]
    PartialSuggestion(String),

    /// Thread join errors.
    #[error("Thread join error: {0}")]
    ThreadJoin(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OnomaError.
pub type Result<T> = std::result::Result<T, OnomaError>;

impl OnomaError {
    /// Create a new invalid name error.
    pub fn invalid_name<S: Into<String>>(msg: S) -> Self {
        OnomaError::InvalidName(msg.into())
    }

    /// Create a new reference table error.
    pub fn reference<S: Into<String>>(msg: S) -> Self {
        OnomaError::Reference(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        OnomaError::Analysis(msg.into())
    }

    /// Create a new partial suggestion error.
    pub fn partial<S: Into<String>>(msg: S) -> Self {
        OnomaError::PartialSuggestion(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OnomaError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        OnomaError::Other(format!("Internal error: {}", msg.into()))
    }
}
