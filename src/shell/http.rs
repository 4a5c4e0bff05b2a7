use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::product_composite::use_cases::create_product_aggregate::inbound::http as create_http;
use crate::modules::product_composite::use_cases::delete_product_aggregate::inbound::http as delete_http;
use crate::modules::product_composite::use_cases::get_product_aggregate::inbound::http as get_http;
use crate::shared::infrastructure::health::HealthStatus;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

/// Composite routes plus whatever store routes this instance hosts.
pub fn router(state: AppState, stores: Router) -> Router {
    Router::new()
        .route("/product-composite", post(create_http::handle))
        .route(
            "/product-composite/{product_id}",
            get(get_http::handle).delete(delete_http::handle),
        )
        .route("/health", get(health))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .with_state(state)
        .merge(stores)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health(State(state): State<AppState>) -> Response {
    let report = state.health.report().await;
    let status = match report.status {
        HealthStatus::Up => StatusCode::OK,
        HealthStatus::Down => {
            tracing::warn!(components = ?report.components, "health check is down");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    (status, Json(report)).into_response()
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
