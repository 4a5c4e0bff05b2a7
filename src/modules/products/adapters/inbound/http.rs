use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::modules::products::adapters::outbound::repository::ProductRepository;
use crate::modules::products::use_cases::product_service::ProductService;
use crate::shared::core::http_error_info::{error_response, service_error_response};

pub fn router<TRepository>(service: Arc<ProductService<TRepository>>) -> Router
where
    TRepository: ProductRepository + 'static,
{
    Router::new()
        .route("/product/{product_id}", get(handle::<TRepository>))
        .with_state(service)
}

pub async fn handle<TRepository>(
    State(service): State<Arc<ProductService<TRepository>>>,
    uri: Uri,
    product_id: Result<Path<i32>, PathRejection>,
) -> Response
where
    TRepository: ProductRepository + 'static,
{
    let Path(product_id) = match product_id {
        Ok(p) => p,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, uri.path(), rejection.body_text());
        }
    };

    match service.get_product(product_id).await {
        Ok(product) => Json(product).into_response(),
        Err(error) => service_error_response(&error, uri.path()),
    }
}
