//! Error types for the facts pipeline.
//!
//! This module defines [`FactsError`] which covers all error cases that can
//! occur when resolving, fetching, or transforming company facts.

use thiserror::Error;

/// Errors that can occur in the facts pipeline.
#[derive(Error, Debug)]
pub enum FactsError {
    /// The ticker is not present in the identifier table.
    #[error("ticker not found: {0}")]
    TickerNotFound(String),

    /// The facts document could not be retrieved.
    ///
    /// Network failures, non-success responses, and malformed response
    /// bodies are all normalized to this variant at the fetch boundary.
    #[error("facts document unavailable for CIK {cik}: {reason}")]
    Unavailable {
        /// CIK the fetch was attempted for.
        cik: String,
        /// Human-readable failure description.
        reason: String,
    },

    /// A syntactically valid document produced no recognized observations.
    #[error("no facts available for {0}")]
    NoData(String),

    /// Malformed upstream data, e.g. an unparsable period-end date.
    #[error("parse error: {0}")]
    Parse(String),

    /// An invalid parameter was provided by the caller.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`FactsError`].
pub type Result<T> = std::result::Result<T, FactsError>;
