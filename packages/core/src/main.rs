use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;

use supplysight::api::{self, ApiState};
use supplysight::cli::Cli;
use supplysight::config::Config;
use supplysight::error::AppError;
use supplysight::graphql::build_schema;
use supplysight::inventory::{seed, InventoryEngine};
use supplysight::logging::init_logging;
use supplysight::metrics::AppMetrics;
use supplysight::store::ProductStore;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env().and_then(|config| config.with_cli(&cli));
    init_logging(config.as_ref().map(|c| c.log_format).unwrap_or_default());

    let config = config.map_err(AppError::Config).unwrap_or_else(|err| {
        tracing::error!("{}", err);
        std::process::exit(1);
    });

    if let Err(err) = run(config).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    tracing::info!("Service starting with config: {:?}", config);

    let products = match config.seed_file.as_deref() {
        Some(path) => {
            tracing::info!("Loading products from {}", path.display());
            seed::load_products(path)?
        }
        None => seed::builtin_products(),
    };

    let store = ProductStore::new(products);
    let product_count = store.len();
    let engine = Arc::new(InventoryEngine::new(store));
    tracing::info!(
        products = product_count,
        warehouses = ?engine.list_warehouses().await,
        "Product store seeded"
    );

    let metrics = Arc::new(AppMetrics::new()?);
    metrics.products_tracked.set(product_count as f64);

    let schema = build_schema(engine.clone(), Some(metrics.clone()));
    let cors = api::cors_layer(config.cors_allow_origin.as_deref()).map_err(AppError::Config)?;

    let app = api::create_router(ApiState {
        schema,
        engine,
        metrics,
    })
    .layer(cors);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("GraphQL server running at http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received. Draining connections.");
}
