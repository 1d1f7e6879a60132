//! Error handling for FormDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy. Field validation failures
//! are not errors; they travel as [`crate::validation::FieldErrors`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main error type for FormDesk application
#[derive(Error, Debug)]
pub enum FormDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed multipart payload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Upload storage error: {0}")]
    Upload(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for FormDesk operations
pub type Result<T> = std::result::Result<T, FormDeskError>;

impl FormDeskError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            FormDeskError::Config(_) => false,
            FormDeskError::ConfigLoad(_) => false,
            FormDeskError::Io(_) => true,
            FormDeskError::Serialization(_) => false,
            FormDeskError::Multipart(_) => true,
            FormDeskError::Upload(_) => true,
            FormDeskError::RateLimitExceeded => true,
            FormDeskError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FormDeskError::Config(_) => ErrorSeverity::Critical,
            FormDeskError::ConfigLoad(_) => ErrorSeverity::Critical,
            FormDeskError::RateLimitExceeded => ErrorSeverity::Warning,
            FormDeskError::Multipart(_) => ErrorSeverity::Warning,
            FormDeskError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// HTTP status used when the error escapes a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            FormDeskError::Multipart(e) => e.status(),
            FormDeskError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            FormDeskError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FormDeskError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, severity = %self.severity(), "Request failed");
            return (status, "Internal server error").into_response();
        }

        (status, self.to_string()).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(FormDeskError::RateLimitExceeded.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            FormDeskError::InvalidInput("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            FormDeskError::Upload("disk full".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_severity_and_recovery() {
        let config_error = FormDeskError::Config("missing port".to_string());
        assert_eq!(config_error.severity(), ErrorSeverity::Critical);
        assert!(!config_error.is_recoverable());

        assert_eq!(FormDeskError::RateLimitExceeded.severity(), ErrorSeverity::Warning);
        assert!(FormDeskError::RateLimitExceeded.is_recoverable());
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }
}
