//! Error types for the Lexometer library.
//!
//! All fallible library operations return [`Result`], whose error side is
//! the [`LexometerError`] enum. The binary wraps these in `anyhow` to add
//! command context.
//!
//! # Examples
//!
//! ```
//! use lexometer::error::{LexometerError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexometerError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexometer operations.
#[derive(Error, Debug)]
pub enum LexometerError {
    /// I/O errors (word lists, document files, output files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A ratio was evaluated with a zero denominator.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// The document has no tokens or no sentences after tokenization.
    #[error("Degenerate document: {0}")]
    DegenerateDocument(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid arguments and other errors
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexometerError.
pub type Result<T> = std::result::Result<T, LexometerError>;

impl LexometerError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexometerError::Config(msg.into())
    }

    /// Create a new arithmetic error.
    pub fn arithmetic<S: Into<String>>(msg: S) -> Self {
        LexometerError::Arithmetic(msg.into())
    }

    /// Create a new degenerate document error.
    pub fn degenerate<S: Into<String>>(msg: S) -> Self {
        LexometerError::DegenerateDocument(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexometerError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
