use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::errors::ServiceError;

/// Error body returned by every HTTP endpoint of the composite and the stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorInfo {
    pub timestamp: DateTime<Utc>,
    pub path: String,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl HttpErrorInfo {
    pub fn new(status: StatusCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            path: path.into(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message: message.into(),
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

pub fn error_response(status: StatusCode, path: &str, message: impl Into<String>) -> Response {
    HttpErrorInfo::new(status, path, message).into_response_with(status)
}

/// Answer a failed store call with the status its error kind maps to.
pub fn service_error_response(error: &ServiceError, path: &str) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error_response(status, path, error.to_string())
}

#[cfg(test)]
mod http_error_info_tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    fn it_should_fill_the_reason_phrase_from_the_status() {
        let info = HttpErrorInfo::new(StatusCode::UNPROCESSABLE_ENTITY, "/product/-1", "Invalid");
        assert_eq!(info.status, 422);
        assert_eq!(info.error, "Unprocessable Entity");
        assert_eq!(info.path, "/product/-1");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_answer_a_service_error_with_its_status_and_message() {
        let error = ServiceError::NotFound("No product found for productId: 13".into());
        let response = service_error_response(&error, "/product/13");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let info: HttpErrorInfo = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(info.message, "No product found for productId: 13");
        assert_eq!(info.path, "/product/13");
    }
}
