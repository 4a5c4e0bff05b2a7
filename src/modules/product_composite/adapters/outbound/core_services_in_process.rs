// Readers backed by store services hosted in the same process.
//
// Purpose
// - Let the composite read the stores without a network hop (in_process mode and tests).
//
// Responsibilities
// - Call the store service directly.
// - Push store errors through the same translation an HTTP failure would get.

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::product_composite::adapters::outbound::core_services::{
    ProductReader, RecommendationReader, ReviewReader,
};
use crate::modules::products::adapters::outbound::repository::ProductRepository;
use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::product_service::ProductService;
use crate::modules::recommendations::adapters::outbound::repository::RecommendationRepository;
use crate::modules::recommendations::core::recommendation::Recommendation;
use crate::modules::recommendations::use_cases::recommendation_service::RecommendationService;
use crate::modules::reviews::adapters::outbound::repository::ReviewRepository;
use crate::modules::reviews::core::review::Review;
use crate::modules::reviews::use_cases::review_service::ReviewService;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::downstream::error_translator::translate;
use crate::shared::infrastructure::downstream::{DownstreamError, TransportFailure};

fn downstream(error: ServiceError) -> DownstreamError {
    translate(TransportFailure::from(&error))
}

pub struct InProcessProductReader<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    service: Arc<ProductService<TRepository>>,
}

impl<TRepository> InProcessProductReader<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(service: Arc<ProductService<TRepository>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<TRepository> ProductReader for InProcessProductReader<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    async fn get_product(&self, product_id: i32) -> Result<Product, DownstreamError> {
        self.service.get_product(product_id).await.map_err(downstream)
    }
}

pub struct InProcessRecommendationReader<TRepository>
where
    TRepository: RecommendationRepository + 'static,
{
    service: Arc<RecommendationService<TRepository>>,
}

impl<TRepository> InProcessRecommendationReader<TRepository>
where
    TRepository: RecommendationRepository + 'static,
{
    pub fn new(service: Arc<RecommendationService<TRepository>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<TRepository> RecommendationReader for InProcessRecommendationReader<TRepository>
where
    TRepository: RecommendationRepository + 'static,
{
    async fn get_recommendations(
        &self,
        product_id: i32,
    ) -> Result<Vec<Recommendation>, DownstreamError> {
        self.service
            .get_recommendations(product_id)
            .await
            .map_err(downstream)
    }
}

pub struct InProcessReviewReader<TRepository>
where
    TRepository: ReviewRepository + 'static,
{
    service: Arc<ReviewService<TRepository>>,
}

impl<TRepository> InProcessReviewReader<TRepository>
where
    TRepository: ReviewRepository + 'static,
{
    pub fn new(service: Arc<ReviewService<TRepository>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<TRepository> ReviewReader for InProcessReviewReader<TRepository>
where
    TRepository: ReviewRepository + 'static,
{
    async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>, DownstreamError> {
        self.service.get_reviews(product_id).await.map_err(downstream)
    }
}
