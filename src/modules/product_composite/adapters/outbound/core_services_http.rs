use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::modules::product_composite::adapters::outbound::core_services::{
    ProductReader, RecommendationReader, ReviewReader,
};
use crate::modules::products::core::product::Product;
use crate::modules::recommendations::core::recommendation::Recommendation;
use crate::modules::reviews::core::review::Review;
use crate::shared::infrastructure::downstream::error_translator::translate;
use crate::shared::infrastructure::downstream::{DownstreamError, TransportFailure};

/// Reads the stores over their HTTP APIs.
#[derive(Clone)]
pub struct HttpCoreServices {
    client: reqwest::Client,
    product_service_url: String,
    recommendation_service_url: String,
    review_service_url: String,
}

impl HttpCoreServices {
    pub fn new(
        client: reqwest::Client,
        product_base_url: &str,
        recommendation_base_url: &str,
        review_base_url: &str,
    ) -> Self {
        Self {
            client,
            product_service_url: format!("{}/product", product_base_url.trim_end_matches('/')),
            recommendation_service_url: format!(
                "{}/recommendation",
                recommendation_base_url.trim_end_matches('/')
            ),
            review_service_url: format!("{}/review", review_base_url.trim_end_matches('/')),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DownstreamError> {
        tracing::debug!(url, "calling downstream store");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| translate(TransportFailure::transport(error.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let description = format!("{status} from GET {url}");
            let body = response.text().await.unwrap_or_default();
            return Err(translate(TransportFailure::response(
                status.as_u16(),
                body,
                description,
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|error| translate(TransportFailure::transport(error.to_string())))
    }
}

#[async_trait]
impl ProductReader for HttpCoreServices {
    async fn get_product(&self, product_id: i32) -> Result<Product, DownstreamError> {
        let url = format!("{}/{product_id}", self.product_service_url);
        self.get_json(&url).await
    }
}

#[async_trait]
impl RecommendationReader for HttpCoreServices {
    async fn get_recommendations(
        &self,
        product_id: i32,
    ) -> Result<Vec<Recommendation>, DownstreamError> {
        let url = format!("{}?productId={product_id}", self.recommendation_service_url);
        self.get_json(&url).await
    }
}

#[async_trait]
impl ReviewReader for HttpCoreServices {
    async fn get_reviews(&self, product_id: i32) -> Result<Vec<Review>, DownstreamError> {
        let url = format!("{}?productId={product_id}", self.review_service_url);
        self.get_json(&url).await
    }
}
