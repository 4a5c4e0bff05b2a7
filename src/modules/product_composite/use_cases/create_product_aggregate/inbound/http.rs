use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::modules::product_composite::adapters::inbound::http_errors::publish_error_response;
use crate::modules::product_composite::core::aggregate::ProductAggregate;
use crate::shared::core::http_error_info::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    uri: Uri,
    body: Result<Json<ProductAggregate>, JsonRejection>,
) -> Response {
    let Json(aggregate) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, uri.path(), rejection.body_text());
        }
    };

    match state.create_handler.handle(aggregate).await {
        Ok(accepted) => (StatusCode::ACCEPTED, Json(accepted)).into_response(),
        Err(error) => publish_error_response(&error, uri.path()),
    }
}
