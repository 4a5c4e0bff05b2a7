use crate::shared::core::http_error_info::HttpErrorInfo;
use crate::shared::infrastructure::downstream::{DownstreamError, TransportFailure};
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorMessage {
    message: String,
}

/// Classify a failed downstream call. The status is kept for diagnostics.
pub fn translate(failure: TransportFailure) -> DownstreamError {
    let message = extract_message(&failure);
    match failure.status {
        Some(404) => DownstreamError::NotFound {
            status: 404,
            message,
        },
        Some(status @ (400 | 422)) => DownstreamError::InvalidInput { status, message },
        status => {
            tracing::warn!(status = ?status, body = ?failure.body, "unexpected downstream failure");
            DownstreamError::Unexpected { status, message }
        }
    }
}

fn extract_message(failure: &TransportFailure) -> String {
    failure
        .body
        .as_deref()
        .and_then(|body| {
            serde_json::from_str::<HttpErrorInfo>(body)
                .map(|info| info.message)
                .or_else(|_| serde_json::from_str::<ErrorMessage>(body).map(|e| e.message))
                .ok()
        })
        .unwrap_or_else(|| failure.description.clone())
}
