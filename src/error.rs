//! Error types for the wordladder library.
//!
//! The search core never fails: an unreachable word is simply absent from the
//! resulting [`PathMap`](crate::ladder::PathMap). Errors only come from the
//! layers around it, such as loading a dictionary, looking up a word the
//! caller asked for, or reconstructing a path that does not exist.
//!
//! # Examples
//!
//! ```
//! use wordladder::error::{LadderError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LadderError::word_not_found("bare"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordladder operations.
#[derive(Error, Debug)]
pub enum LadderError {
    /// I/O errors (reading dictionaries, console prompts)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// A requested word is not part of the dictionary
    #[error("Word not found: {0}")]
    WordNotFound(String),

    /// The target cannot be reached from the source
    #[error("No path from '{from}' to '{to}'")]
    NoPath { from: String, to: String },

    /// Invalid argument or configuration
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A state the search should never produce
    #[error("Internal error: {0}")]
    Internal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LadderError.
pub type Result<T> = std::result::Result<T, LadderError>;

impl LadderError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LadderError::Dictionary(msg.into())
    }

    /// Create a new word-not-found error.
    pub fn word_not_found<S: Into<String>>(word: S) -> Self {
        LadderError::WordNotFound(word.into())
    }

    /// Create a new no-path error.
    pub fn no_path<S: Into<String>, T: Into<String>>(source: S, target: T) -> Self {
        LadderError::NoPath {
            from: source.into(),
            to: target.into(),
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LadderError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LadderError::InvalidArgument(format!("invalid configuration: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        LadderError::Internal(msg.into())
    }

    /// Whether this error only reports that no ladder exists.
    pub fn is_no_path(&self) -> bool {
        matches!(self, LadderError::NoPath { .. })
    }
}
