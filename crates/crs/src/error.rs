//! Error types for CRS field handling.
//!
//! Normalization itself never fails: unrecognized keys are dropped and absent
//! values read as empty. Errors only surface at the edges, when decoding
//! serialized input or when building a record outside the allow-list.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The error type for CRS field operations.
#[derive(Error, Debug)]
pub enum CrsError {
    /// Serialized input could not be decoded into a flat parameter mapping.
    #[error("invalid input format: {message}")]
    InvalidInputFormat { message: String },

    /// A field record was requested for a name outside the allow-list.
    #[error("unknown CRS field: {name}")]
    UnknownField { name: String },

    /// A record map lacks a required key.
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Encoding a record or collection failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CrsError {
    /// Creates an [`CrsError::InvalidInputFormat`] from any displayable cause.
    pub fn invalid_input(message: impl std::fmt::Display) -> Self {
        CrsError::InvalidInputFormat {
            message: message.to_string(),
        }
    }
}

/// Result type alias for CRS field operations.
pub type CrsResult<T> = Result<T, CrsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = CrsError::invalid_input("expected a JSON object");
        assert_eq!(
            err.to_string(),
            "invalid input format: expected a JSON object"
        );
    }

    #[test]
    fn test_unknown_field_display() {
        let err = CrsError::UnknownField {
            name: "color".to_string(),
        };
        assert_eq!(err.to_string(), "unknown CRS field: color");
    }
}
