use shared::error::{AppError, ErrorCode};
use shared::models::LedgerRoomNumber;
use thiserror::Error;

/// Request queue errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("Request {0} not found")]
    RequestNotFound(u32),

    #[error("Request {0} already exists")]
    DuplicateRequest(u32),

    #[error("Room {0} is already allotted")]
    RoomAlreadyAllotted(LedgerRoomNumber),

    #[error("No request id left to assign")]
    RequestIdsExhausted,

    #[error("No room number left in block {0}")]
    RoomNumbersExhausted(char),
}

impl From<QueueError> for AppError {
    fn from(err: QueueError) -> Self {
        let message = err.to_string();
        match err {
            QueueError::RequestNotFound(id) => {
                AppError::with_message(ErrorCode::RequestNotFound, message).with_detail("request_id", id)
            }
            QueueError::DuplicateRequest(id) => {
                AppError::with_message(ErrorCode::DuplicateRequest, message).with_detail("request_id", id)
            }
            QueueError::RoomAlreadyAllotted(room) => {
                AppError::with_message(ErrorCode::RoomAlreadyAllotted, message)
                    .with_detail("room_number", room.to_string())
            }
            QueueError::RequestIdsExhausted => {
                AppError::with_message(ErrorCode::RequestIdsExhausted, message)
            }
            QueueError::RoomNumbersExhausted(prefix) => {
                AppError::with_message(ErrorCode::RoomNumbersExhausted, message)
                    .with_detail("prefix", prefix.to_string())
            }
        }
    }
}

pub type QueueResult<T> = Result<T, QueueError>;
