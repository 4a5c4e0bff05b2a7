// Write side of the composite: turns one aggregate write into store events.
//
// Purpose
// - Hand per-store events to the three store channels.
//
// Responsibilities
// - CREATE: one product event, one event per recommendation, one per review.
// - DELETE: one event per channel, whether or not anything exists downstream.
// - Every event is keyed by the product id so a store sees one product's events in order.
// - Stop at the first failed send. Sends already accepted stay accepted.

use std::sync::Arc;

use crate::modules::product_composite::core::aggregate::ProductAggregate;
use crate::modules::product_composite::core::errors::PublishError;
use crate::modules::products::core::product::Product;
use crate::modules::recommendations::core::recommendation::Recommendation;
use crate::modules::reviews::core::review::Review;
use crate::shared::core::event::Event;
use crate::shared::infrastructure::event_channel::{ChannelError, EventChannel};

pub struct EventPublisher {
    products: Arc<dyn EventChannel<i32, Product>>,
    recommendations: Arc<dyn EventChannel<i32, Recommendation>>,
    reviews: Arc<dyn EventChannel<i32, Review>>,
}

impl EventPublisher {
    pub fn new(
        products: Arc<dyn EventChannel<i32, Product>>,
        recommendations: Arc<dyn EventChannel<i32, Recommendation>>,
        reviews: Arc<dyn EventChannel<i32, Review>>,
    ) -> Self {
        Self {
            products,
            recommendations,
            reviews,
        }
    }

    /// Returns the number of events handed over.
    pub async fn publish_create(&self, aggregate: &ProductAggregate) -> Result<usize, PublishError> {
        let product_id = aggregate.product_id;
        let mut accepted = 0;

        let result = async {
            self.products
                .send(Event::create(product_id, aggregate.product()))
                .await?;
            accepted += 1;

            for recommendation in aggregate.recommendation_payloads() {
                self.recommendations
                    .send(Event::create(product_id, recommendation))
                    .await?;
                accepted += 1;
            }

            for review in aggregate.review_payloads() {
                self.reviews.send(Event::create(product_id, review)).await?;
                accepted += 1;
            }
            Ok::<(), ChannelError>(())
        }
        .await;

        self.finish("create", product_id, accepted, result)
    }

    pub async fn publish_delete(&self, product_id: i32) -> Result<usize, PublishError> {
        let mut accepted = 0;

        let result = async {
            self.products.send(Event::delete(product_id)).await?;
            accepted += 1;
            self.recommendations.send(Event::delete(product_id)).await?;
            accepted += 1;
            self.reviews.send(Event::delete(product_id)).await?;
            accepted += 1;
            Ok::<(), ChannelError>(())
        }
        .await;

        self.finish("delete", product_id, accepted, result)
    }

    fn finish(
        &self,
        operation: &str,
        product_id: i32,
        accepted: usize,
        result: Result<(), ChannelError>,
    ) -> Result<usize, PublishError> {
        match result {
            Ok(()) => {
                tracing::debug!(operation, product_id, events = accepted, "published");
                Ok(accepted)
            }
            Err(error) => {
                tracing::error!(
                    operation,
                    product_id,
                    accepted,
                    error = %error,
                    "publish aborted, accepted events are not rolled back"
                );
                Err(PublishError::Channel(error))
            }
        }
    }
}
