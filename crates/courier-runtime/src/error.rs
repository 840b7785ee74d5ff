//! Error types for topic and queue operations.

use chrono::Duration;
use thiserror::Error;

/// Comprehensive error type for all courier operations
///
/// The option-resolution core never fails on its own; every variant here
/// originates either from identifier validation or from the transport
/// collaborator, and transport errors are surfaced to the caller unchanged.
#[derive(Debug, Error)]
pub enum CourierError {
    #[error("Topic not found: {topic}")]
    TopicNotFound { topic: String },

    #[error("Queue not found: {queue}")]
    QueueNotFound { queue: String },

    #[error("Message not found or receipt expired: {receipt}")]
    MessageNotFound { receipt: String },

    #[error("Operation timed out after {duration:?}")]
    Timeout { duration: Duration },

    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Permission denied for operation: {operation}")]
    PermissionDenied { operation: String },

    #[error("Provider error ({provider}): {code} - {message}")]
    ProviderError {
        provider: String,
        code: String,
        message: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
}

impl CourierError {
    /// Check if error is transient and a later attempt could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::TopicNotFound { .. } => false,
            Self::QueueNotFound { .. } => false,
            Self::MessageNotFound { .. } => false,
            Self::Timeout { .. } => true,
            Self::ConnectionFailed { .. } => true,
            Self::AuthenticationFailed { .. } => false,
            Self::PermissionDenied { .. } => false,
            Self::ProviderError { .. } => true, // Most service-side errors are transient
            Self::ValidationError(_) => false,
        }
    }

    /// Check if error is a deadline expiry from the bounded call scope
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Validation errors for identifiers and request fields
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    Required { field: String },

    #[error("Invalid format for {field}: {message}")]
    InvalidFormat { field: String, message: String },

    #[error("Value out of range for {field}: {message}")]
    OutOfRange { field: String, message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
