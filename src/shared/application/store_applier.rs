// Applies store events coming off a channel to the store that owns the data.
//
// Purpose
// - One applier per downstream store, fed by that store's channel consumer.
//
// Responsibilities
// - CREATE inserts through the store; a duplicate key is an error, not a no-op.
// - DELETE removes through the store; deleting something absent succeeds.
// - Anything else is an event processing error handed back to the transport.
// - Only one event is applied at a time per applier, keeping per-key order.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::shared::core::errors::ServiceError;
use crate::shared::core::event::{Event, EventType};
use crate::shared::infrastructure::event_channel::EventHandler;

/// What a store has to offer for its events to be applied.
#[async_trait]
pub trait EventTarget<K, T>: Send + Sync
where
    K: Send + 'static,
    T: Send + 'static,
{
    async fn create(&self, data: T) -> Result<(), ServiceError>;
    async fn delete(&self, key: K) -> Result<(), ServiceError>;
}

pub struct StoreApplier<K, T> {
    store_name: String,
    target: Arc<dyn EventTarget<K, T>>,
    in_flight: Mutex<()>,
}

impl<K, T> StoreApplier<K, T>
where
    K: Debug + Send + 'static,
    T: Send + 'static,
{
    pub fn new(store_name: impl Into<String>, target: Arc<dyn EventTarget<K, T>>) -> Self {
        Self {
            store_name: store_name.into(),
            target,
            in_flight: Mutex::new(()),
        }
    }

    pub async fn apply(&self, event: Event<K, T>) -> Result<(), ServiceError> {
        let _guard = self.in_flight.lock().await;
        tracing::info!(
            store = %self.store_name,
            created_at = %event.created_at(),
            "processing event"
        );

        let (event_type, key, data) = event.into_parts();
        match (event_type, data) {
            (EventType::Create, Some(data)) => {
                tracing::info!(store = %self.store_name, key = ?key, "create");
                self.target.create(data).await?;
            }
            (EventType::Delete, None) => {
                tracing::info!(store = %self.store_name, key = ?key, "delete");
                self.target.delete(key).await?;
            }
            (EventType::Create, None) => {
                return Err(self.reject(format!("CREATE event for key {key:?} carries no data")));
            }
            (EventType::Delete, Some(_)) => {
                return Err(self.reject(format!("DELETE event for key {key:?} carries data")));
            }
            (EventType::Unknown(raw), _) => {
                return Err(self.reject(format!(
                    "Incorrect event type: {raw}, expected a CREATE or DELETE event"
                )));
            }
        }

        tracing::info!(store = %self.store_name, "event processed");
        Ok(())
    }

    fn reject(&self, message: String) -> ServiceError {
        tracing::warn!(store = %self.store_name, "{message}");
        ServiceError::EventProcessing(message)
    }
}

#[async_trait]
impl<K, T> EventHandler<K, T> for StoreApplier<K, T>
where
    K: Debug + Send + 'static,
    T: Send + 'static,
{
    async fn handle(&self, event: Event<K, T>) -> Result<(), ServiceError> {
        self.apply(event).await
    }
}
