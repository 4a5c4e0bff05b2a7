use thiserror::Error;

use crate::shared::infrastructure::persistence::RepositoryError;

/// Failures raised by a downstream store, whether serving a read or applying an event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    DuplicateKey(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    EventProcessing(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ServiceError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::InvalidInput(_) | ServiceError::EventProcessing(_) => 422,
            ServiceError::DuplicateKey(_) | ServiceError::Conflict(_) => 409,
            ServiceError::Unexpected(_) => 500,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::DuplicateKey(key) => {
                ServiceError::DuplicateKey(format!("Duplicate key, {key}"))
            }
            conflict @ RepositoryError::Conflict { .. } => {
                ServiceError::Conflict(conflict.to_string())
            }
            RepositoryError::Backend(message) => ServiceError::Unexpected(message),
        }
    }
}
