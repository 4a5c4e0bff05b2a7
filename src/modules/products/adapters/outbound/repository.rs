use crate::modules::products::core::product::ProductEntity;
use crate::shared::infrastructure::persistence::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<ProductEntity>, RepositoryError>;

    /// Inserts a new entity or updates the stored one with the same document id.
    async fn save(&self, entity: ProductEntity) -> Result<ProductEntity, RepositoryError>;

    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError>;

    async fn ping(&self) -> Result<(), RepositoryError>;
}
