use crate::modules::reviews::adapters::outbound::repository::ReviewRepository;
use crate::modules::reviews::core::review::ReviewEntity;
use crate::shared::infrastructure::persistence::RepositoryError;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryReviewRepository {
    rows: RwLock<Vec<ReviewEntity>>,
    is_offline: bool,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend(
                "Review repository offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Vec<ReviewEntity>, RepositoryError> {
        self.check_online()?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut entity: ReviewEntity) -> Result<ReviewEntity, RepositoryError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let position = rows
            .iter()
            .position(|row| row.product_id == entity.product_id && row.review_id == entity.review_id);

        match (position, entity.id) {
            (Some(index), Some(id)) if rows[index].id == Some(id) => {
                let stored = &mut rows[index];
                if stored.version != entity.version {
                    return Err(RepositoryError::Conflict {
                        expected: entity.version,
                        actual: stored.version,
                    });
                }
                entity.version += 1;
                *stored = entity.clone();
            }
            (Some(_), _) => {
                return Err(RepositoryError::DuplicateKey(format!(
                    "Product Id: {}, Review Id: {}",
                    entity.product_id, entity.review_id
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
                rows.push(entity.clone());
            }
        }
        Ok(entity)
    }

    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError> {
        self.check_online()?;
        self.rows
            .write()
            .await
            .retain(|row| row.product_id != product_id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_online()
    }
}
