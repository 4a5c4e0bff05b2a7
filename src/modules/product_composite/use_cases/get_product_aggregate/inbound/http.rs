use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::modules::product_composite::adapters::inbound::http_errors::downstream_error_response;
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

    match state.get_handler.handle(product_id).await {
        Ok(aggregate) => Json(aggregate).into_response(),
        Err(error) => downstream_error_response(&error, uri.path()),
    }
}

#[cfg(test)]
mod get_product_aggregate_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::core::http_error_info::HttpErrorInfo;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::readers::{StubReaders, invalid_input, not_found, unreachable};
    use crate::tests::fixtures::state::make_test_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/product-composite/{product_id}", get(handle))
            .with_state(state)
    }

    async fn call(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_aggregate() {
        let (state, _receivers) = make_test_state(StubReaders::answering(1));

        let (status, json) = call(state, "/product-composite/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["productId"], 1);
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 1);
        assert_eq!(json["reviews"].as_array().unwrap().len(), 1);
        assert_eq!(json["serviceAddresses"]["product"], "product-host");
    }

    #[tokio::test]
    async fn it_should_return_404_with_path_and_message() {
        let readers = StubReaders::answering(2)
            .product(Err(not_found("No product found for productId: 2")));
        let (state, _receivers) = make_test_state(readers);

        let (status, json) = call(state, "/product-composite/2").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let info: HttpErrorInfo = serde_json::from_value(json).unwrap();
        assert_eq!(info.path, "/product-composite/2");
        assert_eq!(info.message, "No product found for productId: 2");
    }

    #[tokio::test]
    async fn it_should_return_422_when_the_product_store_rejects_the_id() {
        let readers =
            StubReaders::answering(3).product(Err(invalid_input("Invalid productId: -1")));
        let (state, _receivers) = make_test_state(readers);

        let (status, json) = call(state, "/product-composite/-1").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["message"], "Invalid productId: -1");
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_product_store_is_unreachable() {
        let readers = StubReaders::answering(1).product(Err(unreachable("connection refused")));
        let (state, _receivers) = make_test_state(readers);

        let (status, _) = call(state, "/product-composite/1").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn it_should_return_200_with_empty_reviews_when_the_review_store_fails() {
        let readers = StubReaders::answering(1).reviews(Err(unreachable("connection refused")));
        let (state, _receivers) = make_test_state(readers);

        let (status, json) = call(state, "/product-composite/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["reviews"], serde_json::json!([]));
        assert_eq!(json["serviceAddresses"]["review"], "");
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_non_numeric_id() {
        let (state, _receivers) = make_test_state(StubReaders::answering(1));

        let (status, json) = call(state, "/product-composite/no-integer").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["path"], "/product-composite/no-integer");
    }
}
