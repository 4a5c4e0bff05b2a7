use async_trait::async_trait;
use thiserror::Error;

use crate::shared::core::errors::ServiceError;
use crate::shared::core::event::Event;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("channel {channel} unavailable: {reason}")]
    Unavailable { channel: String, reason: String },
}

/// Outbound side of a store channel. `send` only hands the event over to the
/// transport; it never waits for the store to apply it.
#[async_trait]
pub trait EventChannel<K, T>: Send + Sync
where
    K: Send + 'static,
    T: Send + 'static,
{
    async fn send(&self, event: Event<K, T>) -> Result<(), ChannelError>;
}

/// Inbound side: receives one event at a time from a channel consumer.
#[async_trait]
pub trait EventHandler<K, T>: Send + Sync
where
    K: Send + 'static,
    T: Send + 'static,
{
    async fn handle(&self, event: Event<K, T>) -> Result<(), ServiceError>;
}

pub mod in_memory;
pub mod http;
