// Shared test fixture for ProductAggregate.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::product_composite::core::aggregate::{
    ProductAggregate, RecommendationSummary, ReviewSummary,
};
use std::fs;

pub struct ProductAggregateBuilder {
    inner: ProductAggregate,
}

impl Default for ProductAggregateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProductAggregateBuilder {
    /// Product 1 with one recommendation and one review.
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/product_aggregate.json")
            .unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn product_id(mut self, v: i32) -> Self {
        self.inner.product_id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn recommendations(mut self, v: Vec<RecommendationSummary>) -> Self {
        self.inner.recommendations = v;
        self
    }

    pub fn with_recommendation(mut self, recommendation_id: i32) -> Self {
        self.inner.recommendations.push(RecommendationSummary {
            recommendation_id,
            author: format!("author-{recommendation_id}"),
            rate: recommendation_id,
            content: format!("content-{recommendation_id}"),
        });
        self
    }

    pub fn reviews(mut self, v: Vec<ReviewSummary>) -> Self {
        self.inner.reviews = v;
        self
    }

    pub fn with_review(mut self, review_id: i32) -> Self {
        self.inner.reviews.push(ReviewSummary {
            review_id,
            author: format!("author-{review_id}"),
            subject: format!("subject-{review_id}"),
            content: format!("content-{review_id}"),
        });
        self
    }

    pub fn build(self) -> ProductAggregate {
        self.inner
    }
}
