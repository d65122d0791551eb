//! Error types for vidgen.
//!
//! A single error type with explicit variants for input validation,
//! generation backend failures and durable storage. A request that never
//! got a response is still a backend failure, with the transport cause kept
//! as its source.

use std::fmt;
use thiserror::Error;

/// The unified error type for vidgen operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors (empty prompt, unknown style, bad URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The generation request failed, by status or in transport.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Durable storage errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A generation request is already in flight.
    #[error("a video is already being generated")]
    Busy,
}

impl Error {
    /// Returns true if this error is the empty-prompt validation failure.
    pub fn is_empty_prompt(&self) -> bool {
        matches!(self, Error::InvalidInput(InvalidInputError::EmptyPrompt))
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Backend(BackendError::transport(err))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// The prompt is empty or whitespace only.
    #[error("Please enter a video idea")]
    EmptyPrompt,

    /// Unknown video style.
    #[error("invalid style '{value}': expected one of {expected}")]
    Style { value: String, expected: String },

    /// Unsupported duration.
    #[error("invalid duration '{value}': expected 15, 30 or 60 seconds")]
    Duration { value: String },

    /// Invalid generation endpoint URL.
    #[error("invalid endpoint URL '{value}': {reason}")]
    EndpointUrl { value: String, reason: String },

    /// Invalid storage key.
    #[error("invalid storage key '{value}': {reason}")]
    StorageKey { value: String, reason: String },
}

/// A failed generation request.
///
/// Either the backend answered with a non-success status (`status` is set),
/// answered with an undecodable body, or never answered (`transport` is set).
#[derive(Debug)]
pub struct BackendError {
    /// HTTP status code, if a response was received.
    pub status: Option<u16>,
    /// Status description (reason phrase).
    pub reason: Option<String>,
    /// Error message from the response body, if any.
    pub message: Option<String>,
    /// Why no response was received, if the request failed in transport.
    pub transport: Option<TransportError>,
}

impl BackendError {
    /// Create an error for a non-success HTTP status.
    pub fn status(status: u16, reason: Option<String>, message: Option<String>) -> Self {
        Self {
            status: Some(status),
            reason,
            message,
            transport: None,
        }
    }

    /// Create an error for a success response whose body could not be decoded.
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self {
            status: None,
            reason: Some("invalid response body".to_string()),
            message: Some(message.into()),
            transport: None,
        }
    }

    /// Create an error for a request that got no response.
    pub fn transport(err: TransportError) -> Self {
        Self {
            status: None,
            reason: None,
            message: None,
            transport: Some(err),
        }
    }

    /// Returns true if the request failed before any response arrived.
    pub fn is_transport(&self) -> bool {
        self.transport.is_some()
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, &self.transport) {
            (Some(status), _) => write!(f, "HTTP {}", status)?,
            (None, Some(transport)) => return write!(f, "{}", transport),
            (None, None) => write!(f, "response")?,
        }
        if let Some(ref reason) = self.reason {
            write!(f, " {}", reason)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.transport
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out in the transport layer.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Durable storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot failed.
    #[error("I/O error on '{key}': {message}")]
    Io { key: String, message: String },

    /// The stored value is not the expected shape.
    #[error("could not parse '{key}': {message}")]
    Parse { key: String, message: String },

    /// The value could not be serialized.
    #[error("could not serialize '{key}': {message}")]
    Serialize { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display_includes_status_and_reason() {
        let err = BackendError::status(500, Some("Internal Server Error".to_string()), None);
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");
    }

    #[test]
    fn backend_error_display_includes_message() {
        let err = BackendError::status(
            429,
            Some("Too Many Requests".to_string()),
            Some("slow down".to_string()),
        );
        assert_eq!(err.to_string(), "HTTP 429 Too Many Requests: slow down");
    }

    #[test]
    fn transport_failure_is_a_backend_error() {
        let err: Error = TransportError::Connection {
            message: "connection refused".to_string(),
        }
        .into();

        match err {
            Error::Backend(ref backend) => {
                assert!(backend.is_transport());
                assert_eq!(backend.status, None);
                assert!(std::error::Error::source(backend).is_some());
            }
            ref other => panic!("expected backend error, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "backend error: connection failed: connection refused"
        );
    }

    #[test]
    fn status_errors_are_not_transport_failures() {
        let err = BackendError::status(500, None, None);
        assert!(!err.is_transport());
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn empty_prompt_is_detected() {
        let err: Error = InvalidInputError::EmptyPrompt.into();
        assert!(err.is_empty_prompt());
        assert!(!Error::Busy.is_empty_prompt());
    }
}
