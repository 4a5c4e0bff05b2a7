use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("version conflict: expected {expected}, actual {actual}")]
    Conflict { expected: i32, actual: i32 },

    #[error("backend error: {0}")]
    Backend(String),
}
