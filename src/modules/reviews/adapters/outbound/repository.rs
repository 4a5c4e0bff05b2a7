use crate::modules::reviews::core::review::ReviewEntity;
use crate::shared::infrastructure::persistence::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_product_id(&self, product_id: i32)
    -> Result<Vec<ReviewEntity>, RepositoryError>;

    async fn save(&self, entity: ReviewEntity) -> Result<ReviewEntity, RepositoryError>;

    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError>;

    async fn ping(&self) -> Result<(), RepositoryError>;
}
