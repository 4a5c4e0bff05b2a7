use async_graphql::{ErrorExtensions, InputObject, SimpleObject};

use crate::modules::product_composite::core::aggregate::{
    ProductAggregate, RecommendationSummary, ReviewSummary, ServiceAddresses,
};
use crate::modules::product_composite::core::errors::PublishError;
use crate::shared::infrastructure::downstream::DownstreamError;

#[derive(SimpleObject, Clone)]
pub struct GqlProductAggregate {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    pub recommendations: Vec<GqlRecommendationSummary>,
    pub reviews: Vec<GqlReviewSummary>,
    pub service_addresses: Option<GqlServiceAddresses>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlRecommendationSummary {
    pub recommendation_id: i32,
    pub author: String,
    pub rate: i32,
    pub content: String,
}

#[derive(SimpleObject, Clone)]
pub struct GqlReviewSummary {
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
}

#[derive(SimpleObject, Clone)]
pub struct GqlServiceAddresses {
    pub composite: String,
    pub product: String,
    pub recommendation: String,
    pub review: String,
}

#[derive(InputObject)]
pub struct ProductAggregateInput {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    #[graphql(default)]
    pub recommendations: Vec<RecommendationSummaryInput>,
    #[graphql(default)]
    pub reviews: Vec<ReviewSummaryInput>,
}

#[derive(InputObject)]
pub struct RecommendationSummaryInput {
    pub recommendation_id: i32,
    pub author: String,
    pub rate: i32,
    pub content: String,
}

#[derive(InputObject)]
pub struct ReviewSummaryInput {
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
}

impl From<ProductAggregate> for GqlProductAggregate {
    fn from(v: ProductAggregate) -> Self {
        Self {
            product_id: v.product_id,
            name: v.name,
            weight: v.weight,
            recommendations: v
                .recommendations
                .into_iter()
                .map(|r| GqlRecommendationSummary {
                    recommendation_id: r.recommendation_id,
                    author: r.author,
                    rate: r.rate,
                    content: r.content,
                })
                .collect(),
            reviews: v
                .reviews
                .into_iter()
                .map(|r| GqlReviewSummary {
                    review_id: r.review_id,
                    author: r.author,
                    subject: r.subject,
                    content: r.content,
                })
                .collect(),
            service_addresses: v.service_addresses.map(|a: ServiceAddresses| GqlServiceAddresses {
                composite: a.composite,
                product: a.product,
                recommendation: a.recommendation,
                review: a.review,
            }),
        }
    }
}

impl From<ProductAggregateInput> for ProductAggregate {
    fn from(v: ProductAggregateInput) -> Self {
        Self {
            product_id: v.product_id,
            name: v.name,
            weight: v.weight,
            recommendations: v
                .recommendations
                .into_iter()
                .map(|r| RecommendationSummary {
                    recommendation_id: r.recommendation_id,
                    author: r.author,
                    rate: r.rate,
                    content: r.content,
                })
                .collect(),
            reviews: v
                .reviews
                .into_iter()
                .map(|r| ReviewSummary {
                    review_id: r.review_id,
                    author: r.author,
                    subject: r.subject,
                    content: r.content,
                })
                .collect(),
            service_addresses: None,
        }
    }
}

/// GraphQL error carrying the failure kind under `extensions.code`.
pub fn downstream_error(error: DownstreamError) -> async_graphql::Error {
    let code = match error {
        DownstreamError::NotFound { .. } => "NOT_FOUND",
        DownstreamError::InvalidInput { .. } => "INVALID_INPUT",
        DownstreamError::Unexpected { .. } => "UNEXPECTED",
    };
    async_graphql::Error::new(error.message()).extend_with(|_, e| e.set("code", code))
}

pub fn publish_error(error: PublishError) -> async_graphql::Error {
    let code = match error {
        PublishError::InvalidInput(_) => "INVALID_INPUT",
        PublishError::Channel(_) => "UNAVAILABLE",
    };
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("code", code))
}
