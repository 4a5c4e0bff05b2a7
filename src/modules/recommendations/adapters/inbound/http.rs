use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::modules::recommendations::adapters::outbound::repository::RecommendationRepository;
use crate::modules::recommendations::use_cases::recommendation_service::RecommendationService;
use crate::shared::core::http_error_info::{error_response, service_error_response};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdQuery {
    pub product_id: i32,
}

pub fn router<TRepository>(service: Arc<RecommendationService<TRepository>>) -> Router
where
    TRepository: RecommendationRepository + 'static,
{
    Router::new()
        .route("/recommendation", get(handle::<TRepository>))
        .with_state(service)
}

pub async fn handle<TRepository>(
    State(service): State<Arc<RecommendationService<TRepository>>>,
    uri: Uri,
    query: Result<Query<ProductIdQuery>, QueryRejection>,
) -> Response
where
    TRepository: RecommendationRepository + 'static,
{
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, uri.path(), rejection.body_text());
        }
    };

    match service.get_recommendations(query.product_id).await {
        Ok(recommendations) => Json(recommendations).into_response(),
        Err(error) => service_error_response(&error, uri.path()),
    }
}
