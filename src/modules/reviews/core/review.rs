use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub product_id: i32,
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntity {
    pub id: Option<Uuid>,
    pub version: i32,
    pub product_id: i32,
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
}

impl From<Review> for ReviewEntity {
    fn from(review: Review) -> Self {
        Self {
            id: None,
            version: 0,
            product_id: review.product_id,
            review_id: review.review_id,
            author: review.author,
            subject: review.subject,
            content: review.content,
        }
    }
}

impl From<ReviewEntity> for Review {
    fn from(entity: ReviewEntity) -> Self {
        Self {
            product_id: entity.product_id,
            review_id: entity.review_id,
            author: entity.author,
            subject: entity.subject,
            content: entity.content,
            service_address: None,
        }
    }
}
