use std::fmt::Debug;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::shared::application::store_applier::StoreApplier;
use crate::shared::infrastructure::event_channel::in_memory::{InMemoryEventReceiver, consume};

/// One consumer task per store channel; the task ends once every sender is dropped.
pub fn spawn_store_consumer<K, T>(
    receiver: InMemoryEventReceiver<K, T>,
    applier: Arc<StoreApplier<K, T>>,
) -> JoinHandle<()>
where
    K: Debug + Send + 'static,
    T: Send + 'static,
{
    tracing::info!(channel = receiver.name(), "spawning store consumer");
    tokio::spawn(consume(receiver, applier))
}
