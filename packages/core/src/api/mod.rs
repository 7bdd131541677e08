//! HTTP surface of the service.
//!
//! Routes:
//! - `POST /graphql`: GraphQL operations
//! - `GET  /graphql`: GraphiQL IDE
//! - `GET  /health` : liveness probe
//! - `GET  /metrics`: Prometheus scrape endpoint

pub mod graphql;
pub mod health;
pub mod middleware;

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    middleware::from_fn_with_state,
    response::Response,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::graphql::InventorySchema;
use crate::inventory::InventoryEngine;
use crate::metrics::{AppMetrics, PROMETHEUS_CONTENT_TYPE};

/// Shared state of every route.
#[derive(Clone)]
pub struct ApiState {
    pub schema: InventorySchema,
    pub engine: Arc<InventoryEngine>,
    pub metrics: Arc<AppMetrics>,
}

/// Assemble the full router. `main.rs` adds CORS on top.
pub fn create_router(state: ApiState) -> Router {
    let metrics = state.metrics.clone();

    Router::new()
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .route("/health", get(health::health))
        .route("/metrics", get(render_metrics))
        .layer(from_fn_with_state(metrics, middleware::track_http_metrics))
        .with_state(state)
}

/// CORS for the browser dashboard: one exact origin when configured,
/// otherwise any origin.
pub fn cors_layer(allow_origin: Option<&str>) -> Result<CorsLayer, String> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match allow_origin {
        Some(origin) => {
            let value = HeaderValue::from_str(origin)
                .map_err(|_| format!("Invalid CORS_ALLOW_ORIGIN: {}", origin))?;
            Ok(layer.allow_origin(value))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}

async fn render_metrics(State(state): State<ApiState>) -> Response {
    match state.metrics.render() {
        Ok(body) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)
            .body(Body::from(body))
            .expect("metrics response should be valid"),
        Err(err) => {
            tracing::error!("Failed to render metrics: {}", err);
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from("metrics error"))
                .expect("metrics error response should be valid")
        }
    }
}
