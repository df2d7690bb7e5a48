//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! The pipeline is pure and deterministic, so there is no retry story:
//! every error is either an input-contract violation ([`InvalidOrdering`],
//! [`InsufficientData`]) or an integration bug ([`Precondition`]) and is
//! surfaced to the caller immediately.
//!
//! [`InvalidOrdering`]: ChatstatsError::InvalidOrdering
//! [`InsufficientData`]: ChatstatsError::InsufficientData
//! [`Precondition`]: ChatstatsError::Precondition

use std::io;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// This type is broadly used across the library for any operation that
/// may produce an error.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::MessageEvent;
///
/// fn my_function() -> Result<Vec<MessageEvent>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
///
/// This enum represents all possible errors that can occur when using
/// chatstats. Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// Event timestamps are not sorted in ascending order.
    ///
    /// Every derivation assumes a non-decreasing timestamp sequence, so this
    /// aborts the whole pipeline. The variant records the first offending
    /// index together with both timestamps involved.
    #[error("events out of order at index {index}: {next} is earlier than {prev}")]
    InvalidOrdering {
        /// Index of the event that moved backwards in time
        index: usize,
        /// Timestamp of the preceding event
        prev: DateTime<Utc>,
        /// Timestamp of the offending event
        next: DateTime<Utc>,
    },

    /// A component was invoked before its required upstream columns existed,
    /// or with columns of mismatched length.
    ///
    /// This signals a caller/integration bug, not a data problem.
    #[error("precondition violated: {message}")]
    Precondition {
        /// Description of the violated precondition
        message: String,
    },

    /// The dataset is below the caller's minimum viable size.
    ///
    /// This is a soft failure: the core itself tolerates datasets of size 0
    /// or 1, and the floor is a caller policy (e.g. a CLI flag). Hosts can
    /// turn this into a friendly message instead of a crash.
    #[error("not enough events for analysis: got {actual}, need at least {required}")]
    InsufficientData {
        /// Minimum number of events required by the caller
        required: usize,
        /// Number of events actually present
        actual: usize,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An input file doesn't match the expected structure.
    ///
    /// This occurs when an event file is missing required columns or holds
    /// timestamps that cannot be parsed as RFC 3339.
    #[error("Invalid {format} input: {message}")]
    InvalidFormat {
        /// The format that was expected (e.g. "JSON events", "CSV events")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading/writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an ordering error for the event at `index`.
    pub fn invalid_ordering(index: usize, prev: DateTime<Utc>, next: DateTime<Utc>) -> Self {
        ChatstatsError::InvalidOrdering { index, prev, next }
    }

    /// Creates a precondition error.
    pub fn precondition(message: impl Into<String>) -> Self {
        ChatstatsError::Precondition {
            message: message.into(),
        }
    }

    /// Creates an insufficient-data error.
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        ChatstatsError::InsufficientData { required, actual }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an ordering error.
    pub fn is_invalid_ordering(&self) -> bool {
        matches!(self, ChatstatsError::InvalidOrdering { .. })
    }

    /// Returns `true` if this is a precondition error.
    pub fn is_precondition(&self) -> bool {
        matches!(self, ChatstatsError::Precondition { .. })
    }

    /// Returns `true` if this is an insufficient-data error.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, ChatstatsError::InsufficientData { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
