use shared::error::AppError;
use thiserror::Error;

use crate::storage::StoreError;
use crate::utils::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Snapshot store error: {0}")]
    Store(#[from] StoreError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::invalid_credentials(),
            AuthError::Validation(e) => e.into(),
            AuthError::Store(e) => e.into(),
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
