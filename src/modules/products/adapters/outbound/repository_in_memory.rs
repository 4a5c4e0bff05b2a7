// In memory implementation of the ProductRepository port.
//
// Purpose
// - Host the product store in-process and back the product tests.
//
// Responsibilities
// - Keep one entity per product id.
// - Reject a second entity for the same product id.
// - Enforce optimistic concurrency on update through the entity version.

use crate::modules::products::adapters::outbound::repository::ProductRepository;
use crate::modules::products::core::product::ProductEntity;
use crate::shared::infrastructure::persistence::RepositoryError;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<HashMap<i32, ProductEntity>>,
    is_offline: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend(
                "Product repository offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<ProductEntity>, RepositoryError> {
        self.check_online()?;
        Ok(self.rows.read().await.get(&product_id).cloned())
    }

    async fn save(&self, mut entity: ProductEntity) -> Result<ProductEntity, RepositoryError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        match (rows.get(&entity.product_id), entity.id) {
            (Some(stored), Some(id)) if stored.id == Some(id) => {
                if stored.version != entity.version {
                    return Err(RepositoryError::Conflict {
                        expected: entity.version,
                        actual: stored.version,
                    });
                }
                entity.version += 1;
            }
            (Some(_), _) => {
                return Err(RepositoryError::DuplicateKey(format!(
                    "Product Id: {}",
                    entity.product_id
                )));
            }
            (None, Some(_)) => {
                return Err(RepositoryError::Conflict {
                    expected: entity.version,
                    actual: 0,
                });
            }
            (None, None) => {
                entity.id = Some(Uuid::now_v7());
                entity.version = 1;
            }
        }
        rows.insert(entity.product_id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError> {
        self.check_online()?;
        self.rows.write().await.remove(&product_id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_online()
    }
}
