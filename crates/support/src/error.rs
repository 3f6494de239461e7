//! Error types for the ORS support helpers.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use ors_crs::CrsError;
use thiserror::Error;

/// The primary error type for support operations.
#[derive(Error, Debug)]
pub enum SupportError {
    /// CRS field errors
    #[error(transparent)]
    Crs(#[from] CrsError),

    /// HTTP transport errors
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Input could not be turned into the requested model.
    #[error("invalid format: {message}")]
    InvalidFormat { message: String },

    /// JSON encoding or decoding failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SupportError {
    /// Creates an [`SupportError::InvalidFormat`] from any displayable cause.
    pub fn invalid_format(message: impl std::fmt::Display) -> Self {
        SupportError::InvalidFormat {
            message: message.to_string(),
        }
    }
}

/// Errors raised by the HTTP transport.
///
/// An empty response body is not an error. HTTP error statuses are not
/// errors either: the body is returned to the caller.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// The client could not be built or the request failed.
    #[error("request failed: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type alias for support operations.
pub type SupportResult<T> = Result<T, SupportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let err = SupportError::invalid_format("missing key 'id'");
        assert_eq!(err.to_string(), "invalid format: missing key 'id'");
    }

    #[test]
    fn test_crs_error_is_transparent() {
        let err: SupportError = CrsError::UnknownField {
            name: "color".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown CRS field: color");
    }

    #[test]
    fn test_invalid_url_display() {
        let err = TransportError::InvalidUrl {
            url: "not a url".to_string(),
        };
        assert_eq!(err.to_string(), "invalid URL: not a url");
    }
}
