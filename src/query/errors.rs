//! # Query Errors
//!
//! Error codes:
//! - PARSE_QUERY_ENCODING_FAILED
//! - PARSE_RESPONSE_DECODING_FAILED
//! - PARSE_TRANSPORT_FAILED (pass-through)
//! - PARSE_CONFIG_INVALID

use thiserror::Error;

use crate::command::TransportError;

/// Result type for query and command operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query layer errors
#[derive(Debug, Error)]
pub enum QueryError {
    /// A constraint value could not be serialized
    #[error("Cannot encode constraint on field '{field}': {reason}")]
    Encoding { field: String, reason: String },

    /// The response body did not match the expected envelope
    #[error("Cannot decode response as {expected}: {reason}")]
    Decoding {
        expected: &'static str,
        reason: String,
    },

    /// Transport failure, passed through unchanged
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Client configuration rejected
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl QueryError {
    /// Create an encoding error for a field
    pub fn encoding(field: impl Into<String>, reason: impl Into<String>) -> Self {
        QueryError::Encoding {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a decoding error naming the expected envelope
    pub fn decoding(expected: &'static str, reason: impl Into<String>) -> Self {
        QueryError::Decoding {
            expected,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        QueryError::Config(reason.into())
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::Encoding { .. } => "PARSE_QUERY_ENCODING_FAILED",
            QueryError::Decoding { .. } => "PARSE_RESPONSE_DECODING_FAILED",
            QueryError::Transport(_) => "PARSE_TRANSPORT_FAILED",
            QueryError::Config(_) => "PARSE_CONFIG_INVALID",
        }
    }
}
