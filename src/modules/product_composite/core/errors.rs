use thiserror::Error;

use crate::shared::infrastructure::event_channel::ChannelError;

/// Why a composite write did not go out.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishError {
    /// Rejected before any event was emitted.
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}
