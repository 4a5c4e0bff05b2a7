//! Read ports onto the three downstream stores. Every failure comes back
//! already classified by the error translator.

use async_trait::async_trait;

use crate::modules::products::core::product::Product;
use crate::modules::recommendations::core::recommendation::Recommendation;
use crate::modules::reviews::core::review::Review;
use crate::shared::infrastructure::downstream::DownstreamError;

#[async_trait]
pub trait ProductReader: Send + Sync {
    async fn get_product(&self, product_id: i32) -> Result<Product, DownstreamError>;
}

#[async_trait]
pub trait RecommendationReader: Send + Sync {
    async fn get_recommendations(
        &self,
        product_id: i32,
    ) -> Result<Vec<Recommendation>, DownstreamError>;
}

#[async_trait]
pub trait ReviewReader: Send + Sync {
    async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>, DownstreamError>;
}
