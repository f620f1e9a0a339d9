//! Reconciliation error types
//!
//! Every fatal error names the failing operation and the underlying cause
//! in a single line. No variant is ever auto-corrected: a record that fails
//! to map stays untouched, and a remote failure leaves no partial writes.

use thiserror::Error;

use gatesync_api::ApiError;

use crate::lifecycle::Operation;

/// Error produced by the reconciliation core.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The local record cannot become a valid remote payload.
    #[error("cannot map field '{field}': {message}")]
    Mapping { field: String, message: String },

    /// The resource does not exist remotely where existence is required
    /// (import). During read the same condition is a recoverable drift
    /// signal and never surfaces as an error.
    #[error("virtual host '{name}' not found in environment '{env}'")]
    NotFound { name: String, env: String },

    /// A remote call failed; wrapped verbatim with operation context.
    #[error("{operation} failed: {source}")]
    Remote {
        operation: Operation,
        #[source]
        source: ApiError,
    },

    /// Malformed import token; expected `{name}_{env}`.
    #[error("malformed import token '{token}', expected '{{name}}_{{env}}'")]
    ImportToken { token: String },
}

impl ReconcileError {
    /// Create a mapping error for the given field.
    pub fn mapping(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReconcileError::Mapping {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wrap a remote API error with operation context.
    pub fn remote(operation: Operation, source: ApiError) -> Self {
        ReconcileError::Remote { operation, source }
    }

    /// Check whether this error reports a missing remote resource.
    pub fn is_not_found(&self) -> bool {
        match self {
            ReconcileError::NotFound { .. } => true,
            ReconcileError::Remote { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Result type for reconciliation operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_display() {
        let err = ReconcileError::mapping("port", "'abc' is not a non-negative integer");
        assert_eq!(
            err.to_string(),
            "cannot map field 'port': 'abc' is not a non-negative integer"
        );
    }

    #[test]
    fn test_remote_error_carries_operation_context() {
        let err = ReconcileError::remote(Operation::Create, ApiError::http(500, "boom"));
        assert_eq!(
            err.to_string(),
            "create failed: remote call failed with status 500: boom"
        );
    }

    #[test]
    fn test_import_token_error_display() {
        let err = ReconcileError::ImportToken {
            token: "no-separator".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed import token 'no-separator', expected '{name}_{env}'"
        );
    }

    #[test]
    fn test_not_found_classification() {
        let err = ReconcileError::NotFound {
            name: "vh1".to_string(),
            env: "test".to_string(),
        };
        assert!(err.is_not_found());

        let err = ReconcileError::remote(Operation::Read, ApiError::not_found("vh1", "test"));
        assert!(err.is_not_found());

        let err = ReconcileError::mapping("port", "missing");
        assert!(!err.is_not_found());
    }
}
