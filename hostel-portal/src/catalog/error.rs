use shared::error::{AppError, ErrorCode};
use shared::models::CatalogRoomNumber;
use thiserror::Error;

/// Room selection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Room {0} is already occupied")]
    AlreadyOccupied(CatalogRoomNumber),

    #[error("Room {0} not found")]
    NotFound(CatalogRoomNumber),
}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        let (code, number) = match &err {
            SelectionError::AlreadyOccupied(n) => (ErrorCode::RoomOccupied, n),
            SelectionError::NotFound(n) => (ErrorCode::RoomNotFound, n),
        };
        AppError::with_message(code, err.to_string()).with_detail("room_number", number.to_string())
    }
}

pub type SelectionResult<T> = Result<T, SelectionError>;
