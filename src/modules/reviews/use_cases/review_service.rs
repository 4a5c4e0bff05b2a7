use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::reviews::adapters::outbound::repository::ReviewRepository;
use crate::modules::reviews::core::review::{Review, ReviewEntity};
use crate::shared::application::store_applier::EventTarget;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::health::{ComponentHealth, HealthProbe};

pub struct ReviewService<TRepository>
where
    TRepository: ReviewRepository + 'static,
{
    service_address: String,
    repository: Arc<TRepository>,
}

impl<TRepository> ReviewService<TRepository>
where
    TRepository: ReviewRepository + 'static,
{
    pub fn new(service_address: impl Into<String>, repository: Arc<TRepository>) -> Self {
        Self {
            service_address: service_address.into(),
            repository,
        }
    }

    pub async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>, ServiceError> {
        if product_id < 1 {
            return Err(ServiceError::InvalidInput(format!(
                "Invalid productId: {product_id}"
            )));
        }

        let reviews: Vec<Review> = self
            .repository
            .find_by_product_id(product_id)
            .await?
            .into_iter()
            .map(|entity| Review {
                service_address: Some(self.service_address.clone()),
                ..Review::from(entity)
            })
            .collect();
        tracing::debug!(product_id, count = reviews.len(), "get reviews");
        Ok(reviews)
    }

    pub async fn create_review(&self, review: Review) -> Result<Review, ServiceError> {
        if review.product_id < 1 {
            return Err(ServiceError::InvalidInput(format!(
                "Invalid productId: {}",
                review.product_id
            )));
        }

        let saved = self.repository.save(ReviewEntity::from(review)).await?;
        tracing::debug!(
            product_id = saved.product_id,
            review_id = saved.review_id,
            "created review"
        );
        Ok(Review::from(saved))
    }

    pub async fn delete_reviews(&self, product_id: i32) -> Result<(), ServiceError> {
        tracing::debug!(product_id, "delete reviews");
        Ok(self.repository.delete_by_product_id(product_id).await?)
    }
}

#[async_trait]
impl<TRepository> EventTarget<i32, Review> for ReviewService<TRepository>
where
    TRepository: ReviewRepository + 'static,
{
    async fn create(&self, data: Review) -> Result<(), ServiceError> {
        self.create_review(data).await.map(|_| ())
    }

    async fn delete(&self, key: i32) -> Result<(), ServiceError> {
        self.delete_reviews(key).await
    }
}

#[async_trait]
impl<TRepository> HealthProbe for ReviewService<TRepository>
where
    TRepository: ReviewRepository + 'static,
{
    fn name(&self) -> &str {
        "review"
    }

    async fn check(&self) -> ComponentHealth {
        match self.repository.ping().await {
            Ok(()) => ComponentHealth::up(),
            Err(error) => ComponentHealth::down(error.to_string()),
        }
    }
}
