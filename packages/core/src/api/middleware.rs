//! HTTP request metrics middleware.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::metrics::AppMetrics;

/// Count each request and observe its latency.
///
/// Labels use the matched route template when routing succeeded, so unknown
/// paths all fall under `unmatched` instead of growing the label set.
pub async fn track_http_metrics(
    State(metrics): State<Arc<AppMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed = started.elapsed().as_secs_f64();

    metrics
        .http_requests_total
        .with_label_values(&[method.as_str(), path.as_str(), response.status().as_str()])
        .inc();
    metrics.http_request_duration.observe(elapsed);

    tracing::debug!(%method, %path, status = response.status().as_u16(), elapsed, "HTTP request");
    response
}
