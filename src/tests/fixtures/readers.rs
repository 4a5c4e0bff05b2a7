// Canned downstream readers for the composite read path.

use std::time::Duration;

use async_trait::async_trait;

use crate::modules::product_composite::adapters::outbound::core_services::{
    ProductReader, RecommendationReader, ReviewReader,
};
use crate::modules::products::core::product::Product;
use crate::modules::recommendations::core::recommendation::Recommendation;
use crate::modules::reviews::core::review::Review;
use crate::shared::infrastructure::downstream::DownstreamError;

#[derive(Clone)]
pub struct StubReaders {
    product: Result<Product, DownstreamError>,
    recommendations: Result<Vec<Recommendation>, DownstreamError>,
    reviews: Result<Vec<Review>, DownstreamError>,
    delay: Option<Duration>,
}

#[allow(dead_code)]
impl StubReaders {
    /// Product `product_id` with one recommendation and one review, all answering.
    pub fn answering(product_id: i32) -> Self {
        Self {
            product: Ok(Product {
                product_id,
                name: "name".into(),
                weight: 1,
                service_address: Some("product-host".into()),
            }),
            recommendations: Ok(vec![Recommendation {
                product_id,
                recommendation_id: 1,
                author: "a".into(),
                rate: 1,
                content: "c".into(),
                service_address: Some("recommendation-host".into()),
            }]),
            reviews: Ok(vec![Review {
                product_id,
                review_id: 1,
                author: "a".into(),
                subject: "s".into(),
                content: "c".into(),
                service_address: Some("review-host".into()),
            }]),
            delay: None,
        }
    }

    pub fn product(mut self, v: Result<Product, DownstreamError>) -> Self {
        self.product = v;
        self
    }

    pub fn recommendations(mut self, v: Result<Vec<Recommendation>, DownstreamError>) -> Self {
        self.recommendations = v;
        self
    }

    pub fn reviews(mut self, v: Result<Vec<Review>, DownstreamError>) -> Self {
        self.reviews = v;
        self
    }

    /// Every call sleeps this long before answering.
    pub fn delay(mut self, v: Duration) -> Self {
        self.delay = Some(v);
        self
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

pub fn not_found(message: &str) -> DownstreamError {
    DownstreamError::NotFound {
        status: 404,
        message: message.into(),
    }
}

pub fn invalid_input(message: &str) -> DownstreamError {
    DownstreamError::InvalidInput {
        status: 422,
        message: message.into(),
    }
}

pub fn unreachable(message: &str) -> DownstreamError {
    DownstreamError::Unexpected {
        status: None,
        message: message.into(),
    }
}

#[async_trait]
impl ProductReader for StubReaders {
    async fn get_product(&self, _product_id: i32) -> Result<Product, DownstreamError> {
        self.wait().await;
        self.product.clone()
    }
}

#[async_trait]
impl RecommendationReader for StubReaders {
    async fn get_recommendations(
        &self,
        _product_id: i32,
    ) -> Result<Vec<Recommendation>, DownstreamError> {
        self.wait().await;
        self.recommendations.clone()
    }
}

#[async_trait]
impl ReviewReader for StubReaders {
    async fn get_reviews(&self, _product_id: i32) -> Result<Vec<Review>, DownstreamError> {
        self.wait().await;
        self.reviews.clone()
    }
}
