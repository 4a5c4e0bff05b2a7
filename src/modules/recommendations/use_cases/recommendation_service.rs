use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::recommendations::adapters::outbound::repository::RecommendationRepository;
use crate::modules::recommendations::core::recommendation::{
    Recommendation, RecommendationEntity,
};
use crate::shared::application::store_applier::EventTarget;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::health::{ComponentHealth, HealthProbe};

pub struct RecommendationService<TRepository>
where
    TRepository: RecommendationRepository + 'static,
{
    service_address: String,
    repository: Arc<TRepository>,
}

impl<TRepository> RecommendationService<TRepository>
where
    TRepository: RecommendationRepository + 'static,
{
    pub fn new(service_address: impl Into<String>, repository: Arc<TRepository>) -> Self {
        Self {
            service_address: service_address.into(),
            repository,
        }
    }

    /// An unknown product simply has no recommendations.
    pub async fn get_recommendations(
        &self,
        product_id: i32,
    ) -> Result<Vec<Recommendation>, ServiceError> {
        validate_product_id(product_id)?;

        let recommendations: Vec<Recommendation> = self
            .repository
            .find_by_product_id(product_id)
            .await?
            .into_iter()
            .map(|entity| Recommendation {
                service_address: Some(self.service_address.clone()),
                ..Recommendation::from(entity)
            })
            .collect();
        tracing::debug!(product_id, count = recommendations.len(), "get recommendations");
        Ok(recommendations)
    }

    pub async fn create_recommendation(
        &self,
        recommendation: Recommendation,
    ) -> Result<Recommendation, ServiceError> {
        validate_product_id(recommendation.product_id)?;

        let saved = self
            .repository
            .save(RecommendationEntity::from(recommendation))
            .await?;
        tracing::debug!(
            product_id = saved.product_id,
            recommendation_id = saved.recommendation_id,
            "created recommendation"
        );
        Ok(Recommendation::from(saved))
    }

    pub async fn delete_recommendations(&self, product_id: i32) -> Result<(), ServiceError> {
        tracing::debug!(product_id, "delete recommendations");
        Ok(self.repository.delete_by_product_id(product_id).await?)
    }
}

fn validate_product_id(product_id: i32) -> Result<(), ServiceError> {
    if product_id < 1 {
        return Err(ServiceError::InvalidInput(format!(
            "Invalid productId: {product_id}"
        )));
    }
    Ok(())
}

#[async_trait]
impl<TRepository> EventTarget<i32, Recommendation> for RecommendationService<TRepository>
where
    TRepository: RecommendationRepository + 'static,
{
    async fn create(&self, data: Recommendation) -> Result<(), ServiceError> {
        self.create_recommendation(data).await.map(|_| ())
    }

    async fn delete(&self, key: i32) -> Result<(), ServiceError> {
        self.delete_recommendations(key).await
    }
}

#[async_trait]
impl<TRepository> HealthProbe for RecommendationService<TRepository>
where
    TRepository: RecommendationRepository + 'static,
{
    fn name(&self) -> &str {
        "recommendation"
    }

    async fn check(&self) -> ComponentHealth {
        match self.repository.ping().await {
            Ok(()) => ComponentHealth::up(),
            Err(error) => ComponentHealth::down(error.to_string()),
        }
    }
}
