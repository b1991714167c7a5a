//! Errors raised by opaque prediction-record accessors.
//!
//! These never escape an extractor: a failed accessor degrades the record
//! to its plain string rendering instead of surfacing the error.

use thiserror::Error;

/// Failure while coercing an opaque backend record into a JSON value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The record's result accessor could not produce a value
    #[error("result accessor failed: {reason}")]
    Result { reason: String },

    /// The record's dictionary conversion could not produce a value
    #[error("dictionary conversion failed: {reason}")]
    Dict { reason: String },
}

impl AccessError {
    /// Create a result-accessor failure
    pub fn result(reason: impl Into<String>) -> Self {
        Self::Result {
            reason: reason.into(),
        }
    }

    /// Create a dictionary-conversion failure
    pub fn dict(reason: impl Into<String>) -> Self {
        Self::Dict {
            reason: reason.into(),
        }
    }
}
