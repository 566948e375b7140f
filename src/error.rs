//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Collection;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the backing file (settings, audit log)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A persisted or input record failed its field/type checks
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// A 1-based position outside the collection
    #[error("{}", index_message(.collection, .index, .len))]
    IndexOutOfRange {
        collection: Collection,
        index: usize,
        len: usize,
    },

    /// Backing-file read, write or parse failure
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Audit log write failure; the data file itself was saved
    #[error("Audit log error: {0}")]
    Audit(String),
}

fn index_message(collection: &Collection, index: &usize, len: &usize) -> String {
    if *len == 0 {
        format!("Invalid selection {}: the {} list is empty", index, collection)
    } else {
        format!(
            "Invalid selection {}: choose a {} entry between 1 and {}",
            index, collection, len
        )
    }
}

impl LedgerError {
    /// Create an out-of-range error for a 1-based index
    pub fn index_out_of_range(collection: Collection, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            collection,
            index,
            len,
        }
    }

    /// Check if this is an out-of-range selection
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is a persistence failure
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Check if this is a malformed record
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord(_))
    }

    /// Check if this is an audit log failure
    pub fn is_audit(&self) -> bool {
        matches!(self, Self::Audit(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type LedgerResult<T> = Result<T, LedgerError>;
