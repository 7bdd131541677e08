//! Prometheus metrics registry for the inventory service.
//!
//! [`AppMetrics`] owns all registered metrics and the [`Registry`] they
//! belong to. Construct it once at startup, wrap in `Arc`, and hand it to
//! the GraphQL schema and the HTTP middleware.
//!
//! Exposed at `GET /metrics` in Prometheus text exposition format
//! (`text/plain; version=0.0.4`).

use prometheus::{Counter, CounterVec, Gauge, Histogram, HistogramOpts, Opts, Registry};

/// Content type of the text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// All application-level Prometheus metrics.
pub struct AppMetrics {
    /// GraphQL operations executed (queries and mutations).
    pub graphql_requests_total: Counter,
    /// `updateDemand` calls, successful or not.
    pub demand_updates_total: Counter,
    /// `transferStock` calls, successful or not.
    pub stock_transfers_total: Counter,
    /// Mutations rejected because the product id was unknown.
    pub product_not_found_total: Counter,
    /// Number of product records held by the store.
    pub products_tracked: Gauge,
    /// HTTP request count, labelled by method, path, and status code.
    pub http_requests_total: CounterVec,
    /// HTTP request latency histogram in seconds.
    pub http_request_duration: Histogram,
    /// The registry that owns all of the above metrics.
    pub registry: Registry,
}

impl AppMetrics {
    /// Create and register all metrics. Returns an error if any metric
    /// name is invalid or duplicated.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let graphql_requests_total = Counter::with_opts(Opts::new(
            "supplysight_graphql_requests_total",
            "GraphQL operations executed",
        ))?;

        let demand_updates_total = Counter::with_opts(Opts::new(
            "supplysight_demand_updates_total",
            "updateDemand mutations received",
        ))?;

        let stock_transfers_total = Counter::with_opts(Opts::new(
            "supplysight_stock_transfers_total",
            "transferStock mutations received",
        ))?;

        let product_not_found_total = Counter::with_opts(Opts::new(
            "supplysight_product_not_found_total",
            "Mutations that referenced an unknown product id",
        ))?;

        let products_tracked = Gauge::with_opts(Opts::new(
            "supplysight_products_tracked",
            "Number of products in the store",
        ))?;

        let http_requests_total = CounterVec::new(
            Opts::new(
                "supplysight_http_requests_total",
                "HTTP requests by method, path, and status",
            ),
            &["method", "path", "status"],
        )?;

        let http_request_duration = Histogram::with_opts(
            HistogramOpts::new(
                "supplysight_http_request_duration_seconds",
                "HTTP request latency in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
        )?;

        registry.register(Box::new(graphql_requests_total.clone()))?;
        registry.register(Box::new(demand_updates_total.clone()))?;
        registry.register(Box::new(stock_transfers_total.clone()))?;
        registry.register(Box::new(product_not_found_total.clone()))?;
        registry.register(Box::new(products_tracked.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration.clone()))?;

        Ok(Self {
            graphql_requests_total,
            demand_updates_total,
            stock_transfers_total,
            product_not_found_total,
            products_tracked,
            http_requests_total,
            http_request_duration,
            registry,
        })
    }

    /// Render all metrics as Prometheus text format (for the `/metrics` endpoint).
    pub fn render(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buf = Vec::new();
        encoder.encode(&metric_families, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap_or_default())
    }
}
