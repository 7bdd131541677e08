use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::ApiState;

/// Liveness probe. Reports the number of products held so a misconfigured
/// seed shows up at a glance.
pub async fn health(State(state): State<ApiState>) -> Response {
    let products = state.engine.product_count().await;

    let mut response = (
        StatusCode::OK,
        Json(json!({ "status": "ok", "products": products })),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
