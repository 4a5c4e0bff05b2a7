use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::modules::reviews::adapters::outbound::repository::ReviewRepository;
use crate::modules::reviews::use_cases::review_service::ReviewService;
use crate::shared::core::http_error_info::{error_response, service_error_response};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdQuery {
    pub product_id: i32,
}

pub fn router<TRepository>(service: Arc<ReviewService<TRepository>>) -> Router
where
    TRepository: ReviewRepository + 'static,
{
    Router::new()
        .route("/review", get(handle::<TRepository>))
        .with_state(service)
}

pub async fn handle<TRepository>(
    State(service): State<Arc<ReviewService<TRepository>>>,
    uri: Uri,
    query: Result<Query<ProductIdQuery>, QueryRejection>,
) -> Response
where
    TRepository: ReviewRepository + 'static,
{
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, uri.path(), rejection.body_text());
        }
    };

    match service.get_reviews(query.product_id).await {
        Ok(reviews) => Json(reviews).into_response(),
        Err(error) => service_error_response(&error, uri.path()),
    }
}
