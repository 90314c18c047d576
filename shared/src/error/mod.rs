//! Unified error system for Hostel Hub
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Room catalog errors
//! - 3xxx: Student booking errors
//! - 4xxx: Request queue errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::RoomOccupied);
//!
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Please enter a valid email address")
//!     .with_detail("field", "email");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
