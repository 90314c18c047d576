use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::catalog::SelectionError;

/// Student booking errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("You already have an active or pending booking.")]
    AlreadyBooked,

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::AlreadyBooked => AppError::new(ErrorCode::AlreadyBooked),
            BookingError::Selection(e) => e.into(),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
