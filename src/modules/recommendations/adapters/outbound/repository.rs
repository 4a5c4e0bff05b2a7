use crate::modules::recommendations::core::recommendation::RecommendationEntity;
use crate::shared::infrastructure::persistence::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Every recommendation of the product, in insertion order.
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Vec<RecommendationEntity>, RepositoryError>;

    async fn save(
        &self,
        entity: RecommendationEntity,
    ) -> Result<RecommendationEntity, RepositoryError>;

    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError>;

    async fn ping(&self) -> Result<(), RepositoryError>;
}
