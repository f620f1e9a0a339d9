//! Remote API error types
//!
//! Error definitions for the management API collaborator, with a structured
//! not-found variant so callers never have to inspect message text.

use thiserror::Error;

/// Error returned by the remote management API collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed virtual host does not exist in the environment.
    ///
    /// Transports must map an HTTP 404 to this variant; the reconciliation
    /// core treats it as a state-drift signal, not a transport failure.
    #[error("virtual host '{name}' not found in environment '{env}'")]
    NotFound { name: String, env: String },

    /// The API rejected the call with a non-404 status.
    #[error("remote call failed with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to reach the management API.
    #[error("connection failed: {message}")]
    ConnectionFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid or expired credentials.
    #[error("authentication failed: invalid credentials")]
    AuthenticationFailed,

    /// Response body could not be decoded into the wire types.
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl ApiError {
    /// Check whether this error reports a missing remote resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Check if this error is transient and a retry by the transport layer
    /// could succeed. The reconciliation core never retries either way.
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::ConnectionFailed { .. })
    }

    // Convenience constructors

    /// Create a not-found error for the given resource identity.
    pub fn not_found(name: impl Into<String>, env: impl Into<String>) -> Self {
        ApiError::NotFound {
            name: name.into(),
            env: env.into(),
        }
    }

    /// Create an HTTP status error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }

    /// Create a connection failed error.
    pub fn connection_failed(message: impl Into<String>) -> Self {
        ApiError::ConnectionFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection failed error with source.
    pub fn connection_failed_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ApiError::ConnectionFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        ApiError::Serialization {
            message: message.into(),
        }
    }
}

/// Result type for remote API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = ApiError::not_found("vh1", "test");
        assert!(err.is_not_found());
        assert!(!err.is_transient());

        let err = ApiError::http(500, "boom");
        assert!(!err.is_not_found());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::connection_failed("timed out").is_transient());
        assert!(!ApiError::AuthenticationFailed.is_transient());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::not_found("vh1", "test");
        assert_eq!(
            err.to_string(),
            "virtual host 'vh1' not found in environment 'test'"
        );

        let err = ApiError::http(401, "Unauthorized");
        assert_eq!(
            err.to_string(),
            "remote call failed with status 401: Unauthorized"
        );
    }

    #[test]
    fn test_error_with_source() {
        let source_err = std::io::Error::other("underlying error");
        let err = ApiError::connection_failed_with_source("failed", source_err);

        assert!(err.is_transient());
        if let ApiError::ConnectionFailed { source, .. } = &err {
            assert!(source.is_some());
        } else {
            panic!("Expected ConnectionFailed variant");
        }
    }
}
