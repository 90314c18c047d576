//! Notification payloads emitted by the portal core
//!
//! The core never renders notifications; it hands them to whoever subscribes
//! (a toast layer in the browser, stdout in the demo binary).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// User-visible notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }
}

impl From<&AppError> for Notification {
    fn from(err: &AppError) -> Self {
        Self::error(err.message.clone())
    }
}

impl From<AppError> for Notification {
    fn from(err: AppError) -> Self {
        Self::error(err.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn kind_serializes_lowercase() {
        let n = Notification::warning("Request from Priya Singh declined");
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["kind"], "warning");
        assert_eq!(json["message"], "Request from Priya Singh declined");
    }

    #[test]
    fn app_error_becomes_error_notification() {
        let n = Notification::from(AppError::new(ErrorCode::InvalidCredentials));
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "Invalid credentials");
    }
}
