use std::sync::Arc;

use crate::modules::product_composite::adapters::outbound::event_publisher::EventPublisher;
use crate::modules::product_composite::core::aggregate::ProductAggregate;
use crate::modules::product_composite::core::errors::PublishError;

pub struct CreateProductAggregateHandler {
    publisher: Arc<EventPublisher>,
}

impl CreateProductAggregateHandler {
    pub fn new(publisher: Arc<EventPublisher>) -> Self {
        Self { publisher }
    }

    /// Accepts the write once every event is handed over. The stores apply
    /// them later, so the submitted aggregate is returned as-is.
    pub async fn handle(
        &self,
        aggregate: ProductAggregate,
    ) -> Result<ProductAggregate, PublishError> {
        validate(&aggregate)?;
        let events = self.publisher.publish_create(&aggregate).await?;
        tracing::info!(
            product_id = aggregate.product_id,
            events,
            "composite product create accepted"
        );
        Ok(aggregate)
    }
}

fn validate(aggregate: &ProductAggregate) -> Result<(), PublishError> {
    if aggregate.product_id < 1 {
        return Err(PublishError::InvalidInput(format!(
            "Invalid productId: {}",
            aggregate.product_id
        )));
    }
    if let Some(summary) = aggregate
        .recommendations
        .iter()
        .find(|summary| summary.recommendation_id < 1)
    {
        return Err(PublishError::InvalidInput(format!(
            "Invalid recommendationId: {}",
            summary.recommendation_id
        )));
    }
    if let Some(summary) = aggregate.reviews.iter().find(|summary| summary.review_id < 1) {
        return Err(PublishError::InvalidInput(format!(
            "Invalid reviewId: {}",
            summary.review_id
        )));
    }
    Ok(())
}
