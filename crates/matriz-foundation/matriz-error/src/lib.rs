//! # Matriz Platform Error Handling
//!
//! This crate provides a unified error type for the Matriz SST platform.
//! It uses `thiserror` for ergonomic error definitions and is shared by
//! every service crate so HTTP status mapping stays consistent.
//!
//! ## Features
//!
//! - **Comprehensive Error Variants**: Covers the error categories the
//!   platform services produce (database, validation, upstream HTTP, export)
//! - **Axum Integration**: Feature-gated `IntoResponse` that maps variants to
//!   HTTP statuses with a JSON `{error, message}` body
//! - **Error Categorization**: Helper methods to classify errors (retriable,
//!   client errors)
//!
//! ## Usage
//!
//! ```rust
//! use matriz_error::{MatrizError, Result};
//!
//! fn operation() -> Result<String> {
//!     Err(MatrizError::Database("connection failed".to_string()))
//! }
//! ```

use thiserror::Error;

/// The main error type for the Matriz platform.
///
/// This enum covers the error categories that occur across the platform
/// services. It implements `std::error::Error` via thiserror and, with the
/// `axum` feature, converts directly into an HTTP response.
#[derive(Error, Debug)]
pub enum MatrizError {
    /// Configuration-related errors (invalid config, missing fields, etc.)
    #[error("configuration error: {0}")]
    Config(String),

    /// Database errors (connection failures, query errors, etc.)
    #[error("database error: {0}")]
    Database(String),

    /// IO errors (file operations, network IO, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors (JSON, CSV, etc.)
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Risk-evaluation errors from the GTC-45 scoring domain
    #[error("evaluation error: {0}")]
    Evaluacion(String),

    /// Document export errors (CSV/XLSX generation)
    #[error("export error: {0}")]
    Export(String),

    /// Authentication/authorization errors
    #[error("authentication error: {0}")]
    Auth(String),

    /// Network errors (upstream HTTP failures, connection errors, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// Timeout errors (operation deadlines exceeded)
    #[error("timeout: {0}")]
    Timeout(String),

    /// Resource not found errors
    #[error("{resource_type} not found: {resource_id}")]
    NotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Resource already exists errors
    #[error("{resource_type} already exists: {resource_id}")]
    AlreadyExists {
        resource_type: String,
        resource_id: String,
    },

    /// Invalid input validation errors
    #[error("invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Permission denied errors
    #[error("permission denied: cannot {action} on {resource}")]
    PermissionDenied { action: String, resource: String },

    /// Internal errors (bugs, unexpected states, etc.)
    #[error("internal error: {0}")]
    Internal(String),

    /// Unknown/uncategorized errors
    #[error("unknown error: {0}")]
    Unknown(String),
}

/// Type alias for Results using MatrizError
pub type Result<T> = std::result::Result<T, MatrizError>;

// Conversion from serde_json::Error
impl From<serde_json::Error> for MatrizError {
    fn from(err: serde_json::Error) -> Self {
        MatrizError::Serialization(err.to_string())
    }
}

// Optional feature: sqlx database errors
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for MatrizError {
    fn from(err: sqlx::Error) -> Self {
        MatrizError::Database(err.to_string())
    }
}

// Optional feature: CSV writer errors
#[cfg(feature = "csv")]
impl From<csv::Error> for MatrizError {
    fn from(err: csv::Error) -> Self {
        MatrizError::Serialization(format!("CSV error: {err}"))
    }
}

// Optional feature: HTTP client errors
#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for MatrizError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MatrizError::Timeout(err.to_string())
        } else if err.is_connect() {
            MatrizError::Network(format!("connection error: {err}"))
        } else {
            MatrizError::Network(err.to_string())
        }
    }
}

// Optional feature: Axum HTTP response conversion
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for MatrizError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;

        let (status, error_type) = match &self {
            MatrizError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            MatrizError::AlreadyExists { .. } => (StatusCode::CONFLICT, "already_exists"),
            MatrizError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            MatrizError::Evaluacion(_) => (StatusCode::BAD_REQUEST, "evaluation_error"),
            MatrizError::Config(_) => (StatusCode::BAD_REQUEST, "config_error"),
            MatrizError::Serialization(_) => (StatusCode::BAD_REQUEST, "serialization_error"),
            MatrizError::Auth(_) => (StatusCode::UNAUTHORIZED, "auth_error"),
            MatrizError::PermissionDenied { .. } => (StatusCode::FORBIDDEN, "permission_denied"),
            MatrizError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            MatrizError::Network(_) => (StatusCode::BAD_GATEWAY, "network_error"),
            MatrizError::Database(_) | MatrizError::Export(_) | MatrizError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "unknown_error"),
        };

        let body = Json(serde_json::json!({
            "error": error_type,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl MatrizError {
    /// Determines if this error is retriable.
    ///
    /// Retriable errors are transient failures that may succeed on retry,
    /// such as network errors, timeouts, or database hiccups.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            MatrizError::Network(_) | MatrizError::Timeout(_) | MatrizError::Database(_)
        )
    }

    /// Determines if this error is a client error (4xx-equivalent).
    ///
    /// Client errors indicate that the request was invalid and should not
    /// be retried without modification.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MatrizError::Config(_)
                | MatrizError::InvalidInput { .. }
                | MatrizError::Evaluacion(_)
                | MatrizError::NotFound { .. }
                | MatrizError::AlreadyExists { .. }
                | MatrizError::PermissionDenied { .. }
                | MatrizError::Auth(_)
                | MatrizError::Serialization(_)
        )
    }

    // ==========================================
    // Convenience constructors
    // ==========================================

    /// Creates a not found error
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        MatrizError::NotFound {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }

    /// Creates an already exists error
    #[must_use]
    pub fn already_exists(
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        MatrizError::AlreadyExists {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }

    /// Creates an invalid input error
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MatrizError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a permission denied error
    #[must_use]
    pub fn permission_denied(action: impl Into<String>, resource: impl Into<String>) -> Self {
        MatrizError::PermissionDenied {
            action: action.into(),
            resource: resource.into(),
        }
    }

    /// Creates a configuration error
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        MatrizError::Config(msg.into())
    }

    /// Creates a database error
    #[must_use]
    pub fn database(msg: impl Into<String>) -> Self {
        MatrizError::Database(msg.into())
    }

    /// Creates an evaluation error
    #[must_use]
    pub fn evaluacion(msg: impl Into<String>) -> Self {
        MatrizError::Evaluacion(msg.into())
    }

    /// Creates an export error
    #[must_use]
    pub fn export(msg: impl Into<String>) -> Self {
        MatrizError::Export(msg.into())
    }

    /// Creates a network error
    #[must_use]
    pub fn network(msg: impl Into<String>) -> Self {
        MatrizError::Network(msg.into())
    }

    /// Creates a timeout error
    #[must_use]
    pub fn timeout(msg: impl Into<String>) -> Self {
        MatrizError::Timeout(msg.into())
    }

    /// Creates an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        MatrizError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_implements_std_error() {
        let err = MatrizError::Internal("test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<MatrizError>();
        assert_sync::<MatrizError>();
    }

    #[test]
    fn test_result_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert!(returns_result().is_ok());
    }

    #[test]
    fn test_retriable_errors() {
        assert!(MatrizError::Network("refused".into()).is_retriable());
        assert!(MatrizError::Timeout("deadline".into()).is_retriable());
        assert!(!MatrizError::Auth("invalid".into()).is_retriable());
    }

    #[test]
    fn test_client_errors() {
        assert!(MatrizError::not_found("empresa", "123").is_client_error());
        assert!(MatrizError::invalid_input("nd", "out of range").is_client_error());
        assert!(MatrizError::evaluacion("nd=5 is not a valid level").is_client_error());
        assert!(!MatrizError::Internal("bug".into()).is_client_error());
    }

    #[test]
    fn test_display_not_found() {
        let err = MatrizError::not_found("cargo", "abc");
        assert_eq!(err.to_string(), "cargo not found: abc");
    }

    #[test]
    fn test_display_invalid_input() {
        let err = MatrizError::invalid_input("ne", "must be one of 1, 2, 3, 4");
        assert_eq!(
            err.to_string(),
            "invalid input for field 'ne': must be one of 1, 2, 3, 4"
        );
    }
}
