//! Shared types for Hostel Hub
//!
//! Domain models for the student and administrator dashboards, the unified
//! error type and the notification payload emitted to the UI.

pub mod error;
pub mod message;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use message::{Notification, NotificationKind};
