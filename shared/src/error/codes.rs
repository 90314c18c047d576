//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Room catalog errors
//! - 3xxx: Student booking errors
//! - 4xxx: Request queue errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,

    // ==================== 2xxx: Room ====================
    /// Room number does not exist in the catalog
    RoomNotFound = 2001,
    /// Room is already occupied
    RoomOccupied = 2002,

    // ==================== 3xxx: Booking ====================
    /// Student already holds a booking
    AlreadyBooked = 3001,

    // ==================== 4xxx: Request queue ====================
    /// Pending request not found
    RequestNotFound = 4001,
    /// Pending request id already used
    DuplicateRequest = 4002,
    /// Room number already present in the allotment ledger
    RoomAlreadyAllotted = 4003,
    /// No request id left to assign
    RequestIdsExhausted = 4004,
    /// No ledger room number left under a block prefix
    RoomNumbersExhausted = 4005,

    // ==================== 9xxx: System ====================
    /// Snapshot store error
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",

            // Auth
            ErrorCode::NotAuthenticated => "Please login to continue",
            ErrorCode::InvalidCredentials => "Invalid credentials",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomOccupied => "Room is already occupied",

            // Booking
            ErrorCode::AlreadyBooked => "You already have an active or pending booking.",

            // Request queue
            ErrorCode::RequestNotFound => "Booking request not found",
            ErrorCode::DuplicateRequest => "Booking request already exists",
            ErrorCode::RoomAlreadyAllotted => "Room is already allotted",
            ErrorCode::RequestIdsExhausted => "No request id available",
            ErrorCode::RoomNumbersExhausted => "No room number available",

            // System
            ErrorCode::StorageError => "Storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),

            // Room
            2001 => Ok(ErrorCode::RoomNotFound),
            2002 => Ok(ErrorCode::RoomOccupied),

            // Booking
            3001 => Ok(ErrorCode::AlreadyBooked),

            // Request queue
            4001 => Ok(ErrorCode::RequestNotFound),
            4002 => Ok(ErrorCode::DuplicateRequest),
            4003 => Ok(ErrorCode::RoomAlreadyAllotted),
            4004 => Ok(ErrorCode::RequestIdsExhausted),
            4005 => Ok(ErrorCode::RoomNumbersExhausted),

            // System
            9002 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
