use std::sync::Arc;

use crate::modules::product_composite::adapters::outbound::event_publisher::EventPublisher;
use crate::modules::product_composite::core::errors::PublishError;

pub struct DeleteProductAggregateHandler {
    publisher: Arc<EventPublisher>,
}

impl DeleteProductAggregateHandler {
    pub fn new(publisher: Arc<EventPublisher>) -> Self {
        Self { publisher }
    }

    /// Emits the deletes without checking whether the product exists.
    pub async fn handle(&self, product_id: i32) -> Result<(), PublishError> {
        if product_id < 1 {
            return Err(PublishError::InvalidInput(format!(
                "Invalid productId: {product_id}"
            )));
        }
        let events = self.publisher.publish_delete(product_id).await?;
        tracing::info!(product_id, events, "composite product delete accepted");
        Ok(())
    }
}
