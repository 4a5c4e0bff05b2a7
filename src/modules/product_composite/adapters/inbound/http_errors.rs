use axum::{http::StatusCode, response::Response};

use crate::modules::product_composite::core::errors::PublishError;
use crate::shared::core::http_error_info::error_response;
use crate::shared::infrastructure::downstream::DownstreamError;

pub fn downstream_error_response(error: &DownstreamError, path: &str) -> Response {
    let status = match error {
        DownstreamError::NotFound { .. } => StatusCode::NOT_FOUND,
        DownstreamError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DownstreamError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, path, error.message())
}

pub fn publish_error_response(error: &PublishError, path: &str) -> Response {
    let status = match error {
        PublishError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PublishError::Channel(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    error_response(status, path, error.to_string())
}
