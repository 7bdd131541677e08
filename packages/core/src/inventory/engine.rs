//! Inventory Engine - query, aggregation and mutation over the product store

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::inventory::{
    error::InventoryError,
    trend::{SyntheticTrend, TrendSource},
    types::*,
};
use crate::store::ProductStore;

/// Central inventory engine. Owns the product store and the trend source.
///
/// Reads take the store's read lock; each mutation holds the write lock for
/// its whole read-modify-write, so no caller ever observes a torn record.
pub struct InventoryEngine {
    store: RwLock<ProductStore>,
    trend_source: Arc<dyn TrendSource + Send + Sync>,
}

impl InventoryEngine {
    /// Create an engine over `store` using the synthetic trend source.
    pub fn new(store: ProductStore) -> Self {
        Self::with_trend_source(store, Arc::new(SyntheticTrend))
    }

    /// Create an engine with a custom trend source.
    pub fn with_trend_source(
        store: ProductStore,
        trend_source: Arc<dyn TrendSource + Send + Sync>,
    ) -> Self {
        Self {
            store: RwLock::new(store),
            trend_source,
        }
    }

    /// Filter, then paginate. `total` counts the filtered set.
    pub async fn list_products(&self, filter: &ProductFilter) -> ProductsPage {
        let store = self.store.read().await;
        let page = paginate(store.all(), filter);

        tracing::debug!(
            total = page.total,
            returned = page.items.len(),
            offset = filter.offset,
            limit = filter.limit,
            "Listed products"
        );
        page
    }

    /// Distinct warehouse names in first-seen order.
    pub async fn list_warehouses(&self) -> Vec<String> {
        let store = self.store.read().await;
        distinct_warehouses(store.all())
    }

    /// KPI totals, fill rate and trend over the whole collection.
    pub async fn kpis(&self, range: TrendRange) -> Kpis {
        let (totals, fill_rate) = {
            let store = self.store.read().await;
            compute_totals(store.all())
        };

        let trend = self.trend_source.series(totals, range);
        tracing::debug!(
            source = self.trend_source.source_name(),
            days = trend.len(),
            "Computed KPIs"
        );

        Kpis {
            total_stock: totals.stock,
            total_demand: totals.demand,
            fill_rate,
            trend,
        }
    }

    /// Single record with derived status, or `None` for an unknown id.
    pub async fn get_product(&self, id: &str) -> Option<ProductSnapshot> {
        let store = self.store.read().await;
        store.get(id).map(Product::snapshot)
    }

    /// Overwrite `demand`. No sign validation.
    pub async fn update_demand(
        &self,
        id: &str,
        demand: i64,
    ) -> Result<ProductSnapshot, InventoryError> {
        let mut store = self.store.write().await;
        let product = store.get_mut(id).ok_or_else(|| {
            tracing::warn!(id, "Demand update for unknown product");
            InventoryError::not_found(id)
        })?;

        let previous = product.demand;
        product.demand = demand;
        tracing::info!(id, previous, demand, "Demand updated");

        Ok(product.snapshot())
    }

    /// Apply `delta` to `stock`, clamping the result at zero.
    pub async fn transfer_stock(
        &self,
        id: &str,
        delta: i64,
    ) -> Result<ProductSnapshot, InventoryError> {
        let mut store = self.store.write().await;
        let product = store.get_mut(id).ok_or_else(|| {
            tracing::warn!(id, "Stock transfer for unknown product");
            InventoryError::not_found(id)
        })?;

        let previous = product.stock;
        product.stock = previous.saturating_add(delta).max(0);
        tracing::info!(id, previous, delta, stock = product.stock, "Stock transferred");

        Ok(product.snapshot())
    }

    /// Number of products held.
    pub async fn product_count(&self) -> usize {
        self.store.read().await.len()
    }
}

/// Apply `filter` to `products` and cut out the requested page.
pub fn paginate(products: &[Product], filter: &ProductFilter) -> ProductsPage {
    let matching: Vec<&Product> = products.iter().filter(|p| filter.matches(p)).collect();
    let total = matching.len();
    let items = matching
        .into_iter()
        .skip(filter.offset)
        .take(filter.limit)
        .map(Product::snapshot)
        .collect();

    ProductsPage { items, total }
}

/// Distinct warehouses, first occurrence wins the position.
pub fn distinct_warehouses(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.warehouse.as_str()))
        .map(|p| p.warehouse.clone())
        .collect()
}

/// Totals plus fill rate.
///
/// Fill rate is `100 · Σ min(stock, demand) / Σ demand`, and 0 when total
/// demand is 0.
pub fn compute_totals(products: &[Product]) -> (Totals, f64) {
    let mut totals = Totals::default();
    let mut fulfilled: i64 = 0;

    for p in products {
        totals.stock = totals.stock.saturating_add(p.stock);
        totals.demand = totals.demand.saturating_add(p.demand);
        fulfilled = fulfilled.saturating_add(p.stock.min(p.demand));
    }

    let fill_rate = if totals.demand == 0 {
        0.0
    } else {
        fulfilled as f64 / totals.demand as f64 * 100.0
    };

    (totals, fill_rate)
}
