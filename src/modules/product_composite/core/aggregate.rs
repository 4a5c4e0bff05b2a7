use serde::{Deserialize, Serialize};

use crate::modules::products::core::product::Product;
use crate::modules::recommendations::core::recommendation::Recommendation;
use crate::modules::reviews::core::review::Review;

/// Read-side composed view of a product and what the two dependent stores hold for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAggregate {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    #[serde(default)]
    pub recommendations: Vec<RecommendationSummary>,
    #[serde(default)]
    pub reviews: Vec<ReviewSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_addresses: Option<ServiceAddresses>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub recommendation_id: i32,
    pub author: String,
    pub rate: i32,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
}

/// Which instance served the composite and each of the stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAddresses {
    pub composite: String,
    pub product: String,
    pub recommendation: String,
    pub review: String,
}

impl ProductAggregate {
    /// Assemble the aggregate in the order the stores returned their rows.
    ///
    /// An empty side contributes an empty address; otherwise the address of
    /// its first element is recorded.
    pub fn assemble(
        composite_address: &str,
        product: Product,
        recommendations: Vec<Recommendation>,
        reviews: Vec<Review>,
    ) -> Self {
        let service_addresses = ServiceAddresses {
            composite: composite_address.to_string(),
            product: product.service_address.clone().unwrap_or_default(),
            recommendation: first_address(recommendations.first().map(|r| &r.service_address)),
            review: first_address(reviews.first().map(|r| &r.service_address)),
        };

        Self {
            product_id: product.product_id,
            name: product.name,
            weight: product.weight,
            recommendations: recommendations
                .into_iter()
                .map(RecommendationSummary::from)
                .collect(),
            reviews: reviews.into_iter().map(ReviewSummary::from).collect(),
            service_addresses: Some(service_addresses),
        }
    }

    /// Primary fields only, as carried by the product CREATE event.
    pub fn product(&self) -> Product {
        Product {
            product_id: self.product_id,
            name: self.name.clone(),
            weight: self.weight,
            service_address: None,
        }
    }

    pub fn recommendation_payloads(&self) -> impl Iterator<Item = Recommendation> + '_ {
        self.recommendations.iter().map(|summary| Recommendation {
            product_id: self.product_id,
            recommendation_id: summary.recommendation_id,
            author: summary.author.clone(),
            rate: summary.rate,
            content: summary.content.clone(),
            service_address: None,
        })
    }

    pub fn review_payloads(&self) -> impl Iterator<Item = Review> + '_ {
        self.reviews.iter().map(|summary| Review {
            product_id: self.product_id,
            review_id: summary.review_id,
            author: summary.author.clone(),
            subject: summary.subject.clone(),
            content: summary.content.clone(),
            service_address: None,
        })
    }
}

fn first_address(address: Option<&Option<String>>) -> String {
    address.cloned().flatten().unwrap_or_default()
}

impl From<Recommendation> for RecommendationSummary {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            recommendation_id: recommendation.recommendation_id,
            author: recommendation.author,
            rate: recommendation.rate,
            content: recommendation.content,
        }
    }
}

impl From<Review> for ReviewSummary {
    fn from(review: Review) -> Self {
        Self {
            review_id: review.review_id,
            author: review.author,
            subject: review.subject,
            content: review.content,
        }
    }
}
