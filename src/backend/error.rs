//! Backend error types
//!
//! Everything that can go wrong on the way to the journal backend and back.

use thiserror::Error;

/// Errors that can occur when talking to the journal backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection could not be established
    #[error("Journal backend unavailable")]
    Unavailable,

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Any other transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not JSON or did not match the expected shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl BackendError {
    /// Map a reqwest send error onto the transport kinds
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_connect() {
            BackendError::Unavailable
        } else {
            BackendError::Request(err)
        }
    }

    /// True for failures that happened before a usable response arrived
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BackendError::Unavailable | BackendError::Timeout | BackendError::Request(_)
        )
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::MalformedPayload(err.to_string())
    }
}

/// Result type alias for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: boom");

        let err = BackendError::MalformedPayload("missing field `sentiment`".to_string());
        assert_eq!(err.to_string(), "Malformed payload: missing field `sentiment`");
    }

    #[test]
    fn test_transport_classification() {
        assert!(BackendError::Unavailable.is_transport());
        assert!(BackendError::Timeout.is_transport());
        assert!(!BackendError::MalformedPayload(String::new()).is_transport());
        assert!(!BackendError::Api {
            status: 404,
            message: String::new()
        }
        .is_transport());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: BackendError = json_err.into();
        assert!(matches!(err, BackendError::MalformedPayload(_)));
    }
}
