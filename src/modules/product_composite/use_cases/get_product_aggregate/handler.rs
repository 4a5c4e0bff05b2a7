use std::sync::Arc;
use std::time::Duration;

use crate::modules::product_composite::adapters::outbound::core_services::{
    ProductReader, RecommendationReader, ReviewReader,
};
use crate::modules::product_composite::core::aggregate::ProductAggregate;
use crate::shared::infrastructure::downstream::DownstreamError;

pub struct GetProductAggregateHandler {
    composite_address: String,
    products: Arc<dyn ProductReader>,
    recommendations: Arc<dyn RecommendationReader>,
    reviews: Arc<dyn ReviewReader>,
    read_timeout: Duration,
}

impl GetProductAggregateHandler {
    pub fn new(
        composite_address: impl Into<String>,
        products: Arc<dyn ProductReader>,
        recommendations: Arc<dyn RecommendationReader>,
        reviews: Arc<dyn ReviewReader>,
        read_timeout: Duration,
    ) -> Self {
        Self {
            composite_address: composite_address.into(),
            products,
            recommendations,
            reviews,
            read_timeout,
        }
    }

    /// Reads the three stores concurrently and waits for all of them, bounded by
    /// the configured read timeout.
    pub async fn handle(&self, product_id: i32) -> Result<ProductAggregate, DownstreamError> {
        self.handle_within(product_id, self.read_timeout).await
    }

    /// A failed product read fails the whole read. A failed recommendation or
    /// review read is logged and leaves that side empty. If the reads do not
    /// settle within `read_timeout` they are dropped and the read fails as
    /// unexpected.
    pub async fn handle_within(
        &self,
        product_id: i32,
        read_timeout: Duration,
    ) -> Result<ProductAggregate, DownstreamError> {
        tracing::debug!(product_id, "get composite product");

        let reads = async {
            tokio::join!(
                self.products.get_product(product_id),
                self.recommendations.get_recommendations(product_id),
                self.reviews.get_reviews(product_id),
            )
        };
        let (product, recommendations, reviews) =
            match tokio::time::timeout(read_timeout, reads).await {
                Ok(settled) => settled,
                Err(_) => {
                    tracing::warn!(
                        product_id,
                        timeout_ms = read_timeout.as_millis() as u64,
                        "downstream reads timed out"
                    );
                    return Err(DownstreamError::Unexpected {
                        status: None,
                        message: format!(
                            "Timed out after {} ms reading productId: {product_id}",
                            read_timeout.as_millis()
                        ),
                    });
                }
            };

        let product = product.inspect_err(|error| {
            tracing::debug!(product_id, error = %error, "product read failed");
        })?;
        let recommendations = recommendations.unwrap_or_else(|error| {
            tracing::warn!(
                product_id,
                status = ?error.status(),
                error = %error,
                "getting recommendations failed, returning none"
            );
            Vec::new()
        });
        let reviews = reviews.unwrap_or_else(|error| {
            tracing::warn!(
                product_id,
                status = ?error.status(),
                error = %error,
                "getting reviews failed, returning none"
            );
            Vec::new()
        });

        Ok(ProductAggregate::assemble(
            &self.composite_address,
            product,
            recommendations,
            reviews,
        ))
    }
}

#[cfg(test)]
mod get_product_aggregate_handler_tests {
    use super::*;
    use crate::modules::recommendations::core::recommendation::Recommendation;
    use crate::modules::reviews::core::review::Review;
    use crate::tests::fixtures::readers::{StubReaders, invalid_input, not_found, unreachable};
    use rstest::rstest;

    fn handler(readers: StubReaders, read_timeout: Duration) -> GetProductAggregateHandler {
        let readers = Arc::new(readers);
        GetProductAggregateHandler::new(
            "composite-host",
            readers.clone(),
            readers.clone(),
            readers,
            read_timeout,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_assemble_the_aggregate_when_every_store_answers() {
        let aggregate = handler(StubReaders::answering(1), Duration::from_secs(3))
            .handle(1)
            .await
            .unwrap();

        assert_eq!(aggregate.product_id, 1);
        assert_eq!(aggregate.recommendations.len(), 1);
        assert_eq!(aggregate.reviews.len(), 1);
        let addresses = aggregate.service_addresses.unwrap();
        assert_eq!(addresses.composite, "composite-host");
        assert_eq!(addresses.product, "product-host");
        assert_eq!(addresses.recommendation, "recommendation-host");
        assert_eq!(addresses.review, "review-host");
    }

    #[rstest]
    #[case(Ok(vec![]), Ok(vec![]))]
    #[case(Err(unreachable("down")), Ok(vec![]))]
    #[case(Ok(vec![]), Err(not_found("nope")))]
    #[case(Err(invalid_input("bad")), Err(unreachable("down")))]
    #[tokio::test]
    async fn it_should_fail_with_not_found_whatever_the_other_stores_answer(
        #[case] recommendations: Result<Vec<Recommendation>, DownstreamError>,
        #[case] reviews: Result<Vec<Review>, DownstreamError>,
    ) {
        let readers = StubReaders::answering(13)
            .product(Err(not_found("No product found for productId: 13")))
            .recommendations(recommendations)
            .reviews(reviews);

        let result = handler(readers, Duration::from_secs(3)).handle(13).await;

        assert_eq!(result, Err(not_found("No product found for productId: 13")));
    }

    #[rstest]
    #[case(invalid_input("Invalid productId: -1"))]
    #[case(unreachable("connection refused"))]
    #[tokio::test]
    async fn it_should_surface_any_other_product_failure(#[case] error: DownstreamError) {
        let readers = StubReaders::answering(1).product(Err(error.clone()));
        let result = handler(readers, Duration::from_secs(3)).handle(1).await;
        assert_eq!(result, Err(error));
    }

    #[rstest]
    #[case(not_found("x"))]
    #[case(invalid_input("x"))]
    #[case(unreachable("x"))]
    #[tokio::test]
    async fn it_should_absorb_a_failed_dependent_read_into_an_empty_list(
        #[case] error: DownstreamError,
    ) {
        let readers = StubReaders::answering(1)
            .recommendations(Err(error.clone()))
            .reviews(Err(error));

        let aggregate = handler(readers, Duration::from_secs(3))
            .handle(1)
            .await
            .unwrap();

        assert_eq!(aggregate.name, "name");
        assert!(aggregate.recommendations.is_empty());
        assert!(aggregate.reviews.is_empty());
        let addresses = aggregate.service_addresses.unwrap();
        assert_eq!(addresses.recommendation, "");
        assert_eq!(addresses.review, "");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_reviews_when_only_the_recommendation_store_is_unreachable() {
        let readers =
            StubReaders::answering(2).recommendations(Err(unreachable("connection refused")));

        let aggregate = handler(readers, Duration::from_secs(3))
            .handle(2)
            .await
            .unwrap();

        assert_eq!(aggregate.product_id, 2);
        assert!(aggregate.recommendations.is_empty());
        assert_eq!(aggregate.reviews.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_issue_the_three_reads_concurrently() {
        // Three 300 ms reads only fit a 700 ms budget when they overlap.
        let readers = StubReaders::answering(1).delay(Duration::from_millis(300));
        let result = handler(readers, Duration::from_millis(700)).handle(1).await;
        assert!(result.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_as_unexpected_when_the_reads_time_out() {
        let readers = StubReaders::answering(1).delay(Duration::from_millis(500));

        let result = handler(readers, Duration::from_millis(50)).handle(1).await;

        assert!(matches!(
            result,
            Err(DownstreamError::Unexpected { status: None, ref message })
                if message.starts_with("Timed out after 50 ms")
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_honour_a_deadline_given_by_the_caller() {
        let readers = StubReaders::answering(1).delay(Duration::from_millis(200));
        let handler = handler(readers, Duration::from_secs(3));

        let result = handler.handle_within(1, Duration::from_millis(20)).await;
        assert!(matches!(
            result,
            Err(DownstreamError::Unexpected { status: None, ref message })
                if message.starts_with("Timed out after 20 ms")
        ));

        let aggregate = handler.handle_within(1, Duration::from_secs(1)).await.unwrap();
        assert_eq!(aggregate.product_id, 1);
    }
}
