//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Every component error of the portal converts into this type before it is
/// surfaced as a user-visible notification.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create a not authenticated error
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_message() {
        let err = AppError::new(ErrorCode::AlreadyBooked);
        assert_eq!(err.message, "You already have an active or pending booking.");
        assert!(err.details.is_none());
    }

    #[test]
    fn storage_keeps_message() {
        let err = AppError::storage("snapshot.redb is locked");
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.to_string(), "snapshot.redb is locked");
    }

    #[test]
    fn details_accumulate() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "bad input")
            .with_detail("field", "email")
            .with_detail("attempt", 2);
        let details = err.details.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["attempt"], 2);
    }
}
