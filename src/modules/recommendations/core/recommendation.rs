use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub product_id: i32,
    pub recommendation_id: i32,
    pub author: String,
    pub rate: i32,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationEntity {
    pub id: Option<Uuid>,
    pub version: i32,
    pub product_id: i32,
    pub recommendation_id: i32,
    pub author: String,
    pub rating: i32,
    pub content: String,
}

impl From<Recommendation> for RecommendationEntity {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            id: None,
            version: 0,
            product_id: recommendation.product_id,
            recommendation_id: recommendation.recommendation_id,
            author: recommendation.author,
            rating: recommendation.rate,
            content: recommendation.content,
        }
    }
}

impl From<RecommendationEntity> for Recommendation {
    fn from(entity: RecommendationEntity) -> Self {
        Self {
            product_id: entity.product_id,
            recommendation_id: entity.recommendation_id,
            author: entity.author,
            rate: entity.rating,
            content: entity.content,
            service_address: None,
        }
    }
}

#[cfg(test)]
mod recommendation_mapping_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_carry_the_rate_into_the_stored_rating() {
        let entity = RecommendationEntity::from(Recommendation {
            product_id: 1,
            recommendation_id: 2,
            author: "a".into(),
            rate: 4,
            content: "c".into(),
            service_address: Some("sa".into()),
        });
        assert_eq!(entity.rating, 4);
        assert_eq!(Recommendation::from(entity).rate, 4);
    }
}
