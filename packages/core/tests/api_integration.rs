//! Integration tests for all HTTP endpoints.
//!
//! Each test boots the full Axum router (same assembly as `main.rs`) using
//! `tower::ServiceExt::oneshot`, so no live server is needed.
//!
//! `build_test_app()` wires together:
//! - An `InventoryEngine` over the built-in seed products
//! - Prometheus `AppMetrics`
//! - The GraphQL schema with both injected
//! - The complete `Router<()>` with CORS, ready for `oneshot`

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use supplysight::{
    api::{self, ApiState},
    graphql::build_schema,
    inventory::{seed::builtin_products, InventoryEngine},
    metrics::AppMetrics,
    store::ProductStore,
};

// ---- Helpers ----------------------------------------------------------------

/// Build the complete test router, returning the engine and metrics too so
/// tests can inspect state behind the HTTP surface.
fn build_test_app() -> (Router, Arc<InventoryEngine>, Arc<AppMetrics>) {
    let engine = Arc::new(InventoryEngine::new(ProductStore::new(builtin_products())));
    let metrics = Arc::new(AppMetrics::new().unwrap());
    let schema = build_schema(engine.clone(), Some(metrics.clone()));

    let app = api::create_router(ApiState {
        schema,
        engine: engine.clone(),
        metrics: metrics.clone(),
    })
    .layer(api::cors_layer(None).unwrap());

    (app, engine, metrics)
}

/// Convenience: collect body bytes and parse as JSON.
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn graphql_request(query: &str, variables: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "query": query, "variables": variables }).to_string(),
        ))
        .unwrap()
}

/// POST a GraphQL operation and return the decoded response body.
async fn graphql(app: Router, query: &str, variables: Value) -> Value {
    let resp = app.oneshot(graphql_request(query, variables)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    json_body(resp.into_body()).await
}

const PRODUCTS_QUERY: &str = r#"
    query Products($filter: ProductsFilter) {
        products(filter: $filter) {
            items { id name sku warehouse stock demand status }
            total
        }
    }
"#;

// ---- GET /health ------------------------------------------------------------

#[tokio::test]
async fn health_returns_200_with_product_count() {
    let (app, _, _) = build_test_app();
    let resp = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CACHE_CONTROL], "no-store");
    let json = json_body(resp.into_body()).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["products"], 12);
}

// ---- POST /graphql: products ------------------------------------------------

#[tokio::test]
async fn products_without_filter_returns_first_page() {
    let (app, _, _) = build_test_app();
    let json = graphql(app, PRODUCTS_QUERY, json!({})).await;

    assert!(json.get("errors").is_none(), "unexpected errors: {}", json);
    let page = &json["data"]["products"];
    assert_eq!(page["total"], 12);
    assert_eq!(page["items"].as_array().unwrap().len(), 10);

    let first = &page["items"][0];
    assert_eq!(first["id"], "P-1001");
    assert_eq!(first["name"], "12mm Hex Bolt");
    assert_eq!(first["sku"], "HEX-12-100");
    assert_eq!(first["warehouse"], "BLR-A");
    assert_eq!(first["stock"], 180);
    assert_eq!(first["demand"], 120);
    assert_eq!(first["status"], "Healthy");
}

#[tokio::test]
async fn products_filters_compose() {
    let (app, _, _) = build_test_app();
    let json = graphql(
        app,
        PRODUCTS_QUERY,
        json!({ "filter": { "query": "p-10", "warehouse": "BLR-A", "status": "Critical" } }),
    )
    .await;

    let page = &json["data"]["products"];
    assert_eq!(page["total"], 1);
    assert_eq!(page["items"][0]["id"], "P-1002");
}

#[tokio::test]
async fn products_offset_past_end_returns_empty_items() {
    let (app, _, _) = build_test_app();
    let json = graphql(
        app,
        PRODUCTS_QUERY,
        json!({ "filter": { "status": "Critical", "offset": 5, "limit": 10 } }),
    )
    .await;

    let page = &json["data"]["products"];
    assert_eq!(page["total"], 5);
    assert!(page["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn products_status_all_is_unconstrained() {
    let (app, _, _) = build_test_app();
    let json = graphql(
        app,
        PRODUCTS_QUERY,
        json!({ "filter": { "status": "All", "limit": 100 } }),
    )
    .await;

    assert_eq!(json["data"]["products"]["total"], 12);
    assert_eq!(json["data"]["products"]["items"].as_array().unwrap().len(), 12);
}

// ---- POST /graphql: warehouses / kpis / product -----------------------------

#[tokio::test]
async fn warehouses_are_distinct() {
    let (app, _, _) = build_test_app();
    let json = graphql(app, "{ warehouses }", json!({})).await;
    assert_eq!(json["data"]["warehouses"], json!(["BLR-A", "PNQ-C", "DEL-B", "MUM-D"]));
}

#[tokio::test]
async fn kpis_returns_totals_fill_rate_and_trend() {
    let (app, _, _) = build_test_app();
    let json = graphql(
        app,
        "query Kpis($range: String!) { kpis(range: $range) { totalStock totalDemand fillRate trend { day stock demand } } }",
        json!({ "range": "7d" }),
    )
    .await;

    let kpis = &json["data"]["kpis"];
    assert_eq!(kpis["totalStock"], 1813);
    assert_eq!(kpis["totalDemand"], 1703);
    let fill_rate = kpis["fillRate"].as_f64().unwrap();
    assert!((fill_rate - 1434.0 / 1703.0 * 100.0).abs() < 1e-9);

    let trend = kpis["trend"].as_array().unwrap();
    assert_eq!(trend.len(), 7);
    assert_eq!(trend[0], json!({ "day": "1", "stock": 1813, "demand": 1713 }));
    assert_eq!(trend[6]["day"], "7");
}

#[tokio::test]
async fn kpis_unknown_range_defaults_to_thirty_days() {
    let (app, _, _) = build_test_app();
    let json = graphql(app, r#"{ kpis(range: "1y") { trend { day } } }"#, json!({})).await;
    assert_eq!(json["data"]["kpis"]["trend"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn product_unknown_id_is_null_not_error() {
    let (app, _, _) = build_test_app();
    let json = graphql(
        app,
        "query Product($id: ID!) { product(id: $id) { id status } }",
        json!({ "id": "does-not-exist" }),
    )
    .await;

    assert!(json.get("errors").is_none());
    assert!(json["data"]["product"].is_null());
}

// ---- POST /graphql: mutations -----------------------------------------------

#[tokio::test]
async fn update_demand_is_visible_to_next_query() {
    let (app, _, _) = build_test_app();

    let json = graphql(
        app.clone(),
        "mutation UpdateDemand($id: ID!, $demand: Int!) { updateDemand(id: $id, demand: $demand) { id demand status } }",
        json!({ "id": "P-1004", "demand": 42 }),
    )
    .await;
    assert_eq!(json["data"]["updateDemand"]["demand"], 42);
    assert_eq!(json["data"]["updateDemand"]["status"], "Critical");

    let json = graphql(
        app,
        "query Product($id: ID!) { product(id: $id) { demand status } }",
        json!({ "id": "P-1004" }),
    )
    .await;
    assert_eq!(json["data"]["product"]["demand"], 42);
    assert_eq!(json["data"]["product"]["status"], "Critical");
}

#[tokio::test]
async fn transfer_stock_clamps_at_zero() {
    let (app, engine, _) = build_test_app();
    let json = graphql(
        app,
        "mutation TransferStock($id: ID!, $delta: Int!) { transferStock(id: $id, delta: $delta) { stock status } }",
        json!({ "id": "P-1002", "delta": -100 }),
    )
    .await;

    assert_eq!(json["data"]["transferStock"]["stock"], 0);
    assert_eq!(json["data"]["transferStock"]["status"], "Critical");
    assert_eq!(engine.get_product("P-1002").await.unwrap().stock, 0);
}

#[tokio::test]
async fn mutations_on_unknown_id_return_not_found_error() {
    for mutation in [
        r#"mutation { updateDemand(id: "does-not-exist", demand: 1) { id } }"#,
        r#"mutation { transferStock(id: "does-not-exist", delta: 1) { id } }"#,
    ] {
        let (app, _, metrics) = build_test_app();
        let json = graphql(app, mutation, json!({})).await;

        assert!(json["data"].is_null());
        let error = &json["errors"][0];
        assert_eq!(error["message"], "Product not found: does-not-exist");
        assert_eq!(error["extensions"]["code"], "NOT_FOUND");
        assert!((metrics.product_not_found_total.get() - 1.0).abs() < f64::EPSILON);
    }
}

#[tokio::test]
async fn kpis_reflect_mutations_immediately() {
    let (app, _, _) = build_test_app();
    graphql(
        app.clone(),
        r#"mutation { transferStock(id: "P-1012", delta: 60) { stock } }"#,
        json!({}),
    )
    .await;

    let json = graphql(app, r#"{ kpis(range: "7d") { totalStock } }"#, json!({})).await;
    assert_eq!(json["data"]["kpis"]["totalStock"], 1873);
}

// ---- GET /graphql -----------------------------------------------------------

#[tokio::test]
async fn graphiql_page_is_served() {
    let (app, _, _) = build_test_app();
    let resp = app
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("/graphql"));
}

// ---- CORS -------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_is_answered() {
    let (app, _, _) = build_test_app();
    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/graphql")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

// ---- GET /metrics -----------------------------------------------------------

#[tokio::test]
async fn metrics_content_type_is_prometheus_text() {
    let (app, _, _) = build_test_app();
    let resp = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
        .headers()
        .get("content-type")
        .expect("missing content-type header")
        .to_str()
        .unwrap();
    assert_eq!(ct, "text/plain; version=0.0.4");
}

#[tokio::test]
async fn metrics_count_graphql_operations_and_mutations() {
    let (app, _, _) = build_test_app();
    graphql(
        app.clone(),
        r#"mutation { updateDemand(id: "P-1001", demand: 5) { id } }"#,
        json!({}),
    )
    .await;
    graphql(app.clone(), "{ warehouses }", json!({})).await;

    let resp = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(body.contains("supplysight_graphql_requests_total 2"));
    assert!(body.contains("supplysight_demand_updates_total 1"));
    assert!(body.contains("supplysight_http_request_duration_seconds"));
    assert!(body.contains(r#"path="/graphql""#));
}
