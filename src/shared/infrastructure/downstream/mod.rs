use thiserror::Error;

use crate::shared::core::errors::ServiceError;

/// A failed call to a downstream store, as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    /// Response status, absent when no response came back at all.
    pub status: Option<u16>,
    pub body: Option<String>,
    pub description: String,
}

impl TransportFailure {
    pub fn response(status: u16, body: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            body: Some(body.into()),
            description: description.into(),
        }
    }

    pub fn transport(description: impl Into<String>) -> Self {
        Self {
            status: None,
            body: None,
            description: description.into(),
        }
    }
}

impl From<&ServiceError> for TransportFailure {
    fn from(error: &ServiceError) -> Self {
        Self {
            status: Some(error.status_code()),
            body: None,
            description: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DownstreamError {
    #[error("{message}")]
    NotFound { status: u16, message: String },

    #[error("{message}")]
    InvalidInput { status: u16, message: String },

    #[error("unexpected downstream failure: {message}")]
    Unexpected {
        status: Option<u16>,
        message: String,
    },
}

impl DownstreamError {
    pub fn message(&self) -> &str {
        match self {
            DownstreamError::NotFound { message, .. }
            | DownstreamError::InvalidInput { message, .. }
            | DownstreamError::Unexpected { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            DownstreamError::NotFound { status, .. }
            | DownstreamError::InvalidInput { status, .. } => Some(*status),
            DownstreamError::Unexpected { status, .. } => *status,
        }
    }
}

pub mod error_translator;
