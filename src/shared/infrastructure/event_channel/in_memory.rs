use std::fmt::Debug;
use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::shared::core::event::Event;
use crate::shared::infrastructure::event_channel::{ChannelError, EventChannel, EventHandler};

/// Process-local channel. Sends never block; they fail once the receiving end is gone.
pub struct InMemoryEventChannel<K, T> {
    name: String,
    sender: UnboundedSender<Event<K, T>>,
}

pub struct InMemoryEventReceiver<K, T> {
    name: String,
    receiver: UnboundedReceiver<Event<K, T>>,
}

pub fn in_memory_channel<K, T>(
    name: impl Into<String>,
) -> (InMemoryEventChannel<K, T>, InMemoryEventReceiver<K, T>) {
    let name = name.into();
    let (sender, receiver) = unbounded_channel();
    (
        InMemoryEventChannel {
            name: name.clone(),
            sender,
        },
        InMemoryEventReceiver { name, receiver },
    )
}

impl<K, T> InMemoryEventChannel<K, T> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait::async_trait]
impl<K, T> EventChannel<K, T> for InMemoryEventChannel<K, T>
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    async fn send(&self, event: Event<K, T>) -> Result<(), ChannelError> {
        self.sender
            .send(event)
            .map_err(|_| ChannelError::Unavailable {
                channel: self.name.clone(),
                reason: "consumer is gone".to_string(),
            })
    }
}

impl<K, T> InMemoryEventReceiver<K, T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn recv(&mut self) -> Option<Event<K, T>> {
        self.receiver.recv().await
    }

    /// Everything currently queued, without waiting for more.
    pub fn drain(&mut self) -> Vec<Event<K, T>> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    pub fn close(&mut self) {
        self.receiver.close();
    }
}

/// Feeds queued events to `handler` strictly one after another until every sender is dropped.
/// A failed event is reported and skipped; retrying it is left to the transport.
pub async fn consume<K, T>(
    mut receiver: InMemoryEventReceiver<K, T>,
    handler: Arc<dyn EventHandler<K, T>>,
) where
    K: Debug + Send + 'static,
    T: Send + 'static,
{
    tracing::info!(channel = %receiver.name, "consumer started");
    while let Some(event) = receiver.recv().await {
        let event_type = event.event_type();
        let key = format!("{:?}", event.key());
        if let Err(error) = handler.handle(event).await {
            tracing::error!(
                channel = %receiver.name,
                event_type = ?event_type,
                key = %key,
                error = %error,
                "failed to process event"
            );
        }
    }
    tracing::info!(channel = %receiver.name, "consumer stopped");
}

#[cfg(test)]
mod in_memory_event_channel_tests {
    use super::*;
    use crate::shared::core::errors::ServiceError;
    use rstest::rstest;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        seen: Mutex<Vec<i32>>,
    }

    #[async_trait::async_trait]
    impl EventHandler<i32, String> for RecordingHandler {
        async fn handle(&self, event: Event<i32, String>) -> Result<(), ServiceError> {
            let key = *event.key();
            self.seen.lock().await.push(key);
            if key == 2 {
                return Err(ServiceError::EventProcessing("boom".into()));
            }
            Ok(())
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_events_in_order() {
        let (channel, mut receiver) = in_memory_channel::<i32, String>("products");
        channel.send(Event::create(1, "a".into())).await.unwrap();
        channel.send(Event::delete(1)).await.unwrap();
        let events = receiver.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].data(), Some(&"a".to_string()));
        assert!(events[1].data().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_send_when_the_consumer_is_gone() {
        let (channel, receiver) = in_memory_channel::<i32, String>("reviews");
        drop(receiver);
        let result = channel.send(Event::delete(1)).await;
        assert!(matches!(
            result,
            Err(ChannelError::Unavailable { channel, .. }) if channel == "reviews"
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_consuming_after_a_failed_event() {
        let (channel, receiver) = in_memory_channel::<i32, String>("products");
        let handler = Arc::new(RecordingHandler::default());
        for key in 1..=3 {
            channel.send(Event::create(key, "x".into())).await.unwrap();
        }
        drop(channel);
        consume(receiver, handler.clone()).await;
        assert_eq!(*handler.seen.lock().await, vec![1, 2, 3]);
    }
}
