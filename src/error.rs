//! Unified error types for chatlens.
//!
//! A single [`ChatlensError`] enum covers all error cases in the library,
//! following the pattern used by crates like `reqwest` and `csv`.
//!
//! Note that the two core operations are deliberately *not* fallible:
//! parsing returns an empty vector for unrecognizable input and the stats
//! engine returns `None` for empty input. Errors here come from the edges —
//! reading files, malformed filter dates, ingestion runs that produce
//! nothing at all.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading input files.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid date string in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided.
        input: String,
        /// Expected format description.
        expected: &'static str,
    },

    /// An ingestion run produced no messages from any source.
    ///
    /// Individual file failures are tolerated; this fires only when every
    /// source failed or parsed to zero messages.
    #[error("No messages could be parsed from {sources} source file(s)")]
    NoMessages {
        /// How many sources were attempted.
        sources: usize,
    },
}

impl ChatlensError {
    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a no-messages ingestion error.
    pub fn no_messages(sources: usize) -> Self {
        ChatlensError::NoMessages { sources }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if this is a no-messages ingestion error.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatlensError::NoMessages { .. })
    }
}
