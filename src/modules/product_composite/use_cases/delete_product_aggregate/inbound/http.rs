use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::modules::product_composite::adapters::inbound::http_errors::publish_error_response;
use crate::shared::core::http_error_info::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    uri: Uri,
    product_id: Result<Path<i32>, PathRejection>,
) -> Response {
    let Path(product_id) = match product_id {
        Ok(p) => p,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, uri.path(), rejection.body_text());
        }
    };

    match state.delete_handler.handle(product_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(error) => publish_error_response(&error, uri.path()),
    }
}
