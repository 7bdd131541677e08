use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::inventory::{InventoryEngine, InventoryError, ProductSnapshot};
use crate::metrics::AppMetrics;

use super::types::ProductObject;

/// Write side of the schema: the only two ways product state changes.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Overwrite a product's demand.
    async fn update_demand(&self, ctx: &Context<'_>, id: ID, demand: i64) -> Result<ProductObject> {
        let engine = ctx.data::<Arc<InventoryEngine>>()?;
        let result = engine.update_demand(&id, demand).await;

        if let Some(metrics) = ctx.data_opt::<Arc<AppMetrics>>() {
            metrics.demand_updates_total.inc();
        }
        finish(ctx, result)
    }

    /// Move stock in (positive delta) or out (negative delta). Stock never
    /// drops below zero.
    async fn transfer_stock(&self, ctx: &Context<'_>, id: ID, delta: i64) -> Result<ProductObject> {
        let engine = ctx.data::<Arc<InventoryEngine>>()?;
        let result = engine.transfer_stock(&id, delta).await;

        if let Some(metrics) = ctx.data_opt::<Arc<AppMetrics>>() {
            metrics.stock_transfers_total.inc();
        }
        finish(ctx, result)
    }
}

fn finish(
    ctx: &Context<'_>,
    result: Result<ProductSnapshot, InventoryError>,
) -> Result<ProductObject> {
    match result {
        Ok(product) => Ok(product.into()),
        Err(err) => {
            if let Some(metrics) = ctx.data_opt::<Arc<AppMetrics>>() {
                metrics.product_not_found_total.inc();
            }
            Err(err.extend())
        }
    }
}
