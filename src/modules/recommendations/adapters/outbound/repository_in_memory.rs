use crate::modules::recommendations::adapters::outbound::repository::RecommendationRepository;
use crate::modules::recommendations::core::recommendation::RecommendationEntity;
use crate::shared::infrastructure::persistence::RepositoryError;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Rows are kept in insertion order; `(product_id, recommendation_id)` is unique.
#[derive(Default)]
pub struct InMemoryRecommendationRepository {
    rows: RwLock<Vec<RecommendationEntity>>,
    is_offline: bool,
}

impl InMemoryRecommendationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend(
                "Recommendation repository offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecommendationRepository for InMemoryRecommendationRepository {
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Vec<RecommendationEntity>, RepositoryError> {
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

    async fn save(
        &self,
        mut entity: RecommendationEntity,
    ) -> Result<RecommendationEntity, RepositoryError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let position = rows.iter().position(|row| {
            row.product_id == entity.product_id
                && row.recommendation_id == entity.recommendation_id
        });

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
                    "Product Id: {}, Recommendation Id: {}",
                    entity.product_id, entity.recommendation_id
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

#[cfg(test)]
mod in_memory_recommendation_repository_tests {
    use super::*;
    use rstest::rstest;

    fn entity(product_id: i32, recommendation_id: i32) -> RecommendationEntity {
        RecommendationEntity {
            id: None,
            version: 0,
            product_id,
            recommendation_id,
            author: "a".into(),
            rating: 3,
            content: "c".into(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_rows_of_a_product_in_insertion_order() {
        let repository = InMemoryRecommendationRepository::new();
        repository.save(entity(1, 3)).await.unwrap();
        repository.save(entity(2, 1)).await.unwrap();
        repository.save(entity(1, 1)).await.unwrap();

        let ids: Vec<i32> = repository
            .find_by_product_id(1)
            .await
            .unwrap()
            .iter()
            .map(|row| row.recommendation_id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_duplicate_key() {
        let repository = InMemoryRecommendationRepository::new();
        repository.save(entity(1, 1)).await.unwrap();
        assert_eq!(
            repository.save(entity(1, 1)).await,
            Err(RepositoryError::DuplicateKey(
                "Product Id: 1, Recommendation Id: 1".into()
            ))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_every_row_of_the_product_only() {
        let repository = InMemoryRecommendationRepository::new();
        repository.save(entity(1, 1)).await.unwrap();
        repository.save(entity(1, 2)).await.unwrap();
        repository.save(entity(2, 1)).await.unwrap();

        repository.delete_by_product_id(1).await.unwrap();
        assert!(repository.find_by_product_id(1).await.unwrap().is_empty());
        assert_eq!(repository.find_by_product_id(2).await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_detect_a_stale_update() {
        let repository = InMemoryRecommendationRepository::new();
        let saved = repository.save(entity(1, 1)).await.unwrap();
        repository.save(saved.clone()).await.unwrap();
        assert_eq!(
            repository.save(saved).await,
            Err(RepositoryError::Conflict {
                expected: 1,
                actual: 2
            })
        );
    }
}
