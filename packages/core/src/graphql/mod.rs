//! GraphQL API for the inventory dashboard.
//!
//! Mounted on the HTTP server at `/graphql` (POST for operations, GET for
//! the GraphiQL IDE).
//!
//! # Example Operations
//!
//! ```graphql
//! query {
//!   products(filter: { query: "bolt", status: "Healthy", limit: 5 }) {
//!     items { id name sku warehouse stock demand status }
//!     total
//!   }
//!   warehouses
//!   kpis(range: "7d") { totalStock totalDemand fillRate trend { day stock demand } }
//! }
//!
//! mutation {
//!   transferStock(id: "P-1002", delta: -10) { id stock status }
//! }
//! ```

pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Error, ErrorExtensions, Schema};

use crate::inventory::{InventoryEngine, InventoryError};
use crate::metrics::AppMetrics;

use self::mutation::MutationRoot;
use self::query::QueryRoot;

/// The full GraphQL schema type for the inventory service
pub type InventorySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with its shared state.
///
/// The schema is injected with:
/// - `Arc<InventoryEngine>` for every resolver
/// - Optionally `Arc<AppMetrics>` for mutation counters
pub fn build_schema(
    engine: Arc<InventoryEngine>,
    metrics: Option<Arc<AppMetrics>>,
) -> InventorySchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(engine);

    if let Some(metrics) = metrics {
        builder = builder.data(metrics);
    }

    builder.finish()
}

impl ErrorExtensions for InventoryError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| match self {
            InventoryError::NotFound { id } => {
                e.set("code", "NOT_FOUND");
                e.set("id", id.as_str());
            }
        })
    }
}
