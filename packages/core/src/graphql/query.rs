use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use crate::inventory::{InventoryEngine, ProductFilter, TrendRange};

use super::types::{KpiObject, ProductObject, ProductsFilter, ProductsPageObject};

/// Read side of the schema. Every field is total: none of them fail for
/// bad input, they return empty or zero-valued results instead.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Filtered, paginated product listing.
    async fn products(
        &self,
        ctx: &Context<'_>,
        filter: Option<ProductsFilter>,
    ) -> Result<ProductsPageObject> {
        let engine = ctx.data::<Arc<InventoryEngine>>()?;
        let filter: ProductFilter = filter.unwrap_or_default().into();
        Ok(engine.list_products(&filter).await.into())
    }

    /// Distinct warehouse names.
    async fn warehouses(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        let engine = ctx.data::<Arc<InventoryEngine>>()?;
        Ok(engine.list_warehouses().await)
    }

    /// KPI summary. `range` is `7d`, `14d` or `30d`; anything else is 30 days.
    async fn kpis(&self, ctx: &Context<'_>, range: String) -> Result<KpiObject> {
        let engine = ctx.data::<Arc<InventoryEngine>>()?;
        Ok(engine.kpis(TrendRange::parse(&range)).await.into())
    }

    /// A single product, or null when the id is unknown.
    async fn product(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ProductObject>> {
        let engine = ctx.data::<Arc<InventoryEngine>>()?;
        Ok(engine.get_product(&id).await.map(ProductObject::from))
    }
}
