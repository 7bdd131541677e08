//! GraphQL object and input types.
//!
//! Wire names follow the dashboard's schema: camelCase fields, `KPI` for the
//! summary object. Conversions from the engine types live here so resolvers
//! stay one-liners.

use async_graphql::{InputObject, SimpleObject, ID};

use crate::inventory::{
    Kpis, ProductFilter, ProductSnapshot, ProductsPage, StatusFilter, TrendPoint,
    DEFAULT_PAGE_LIMIT,
};

/// A product with its server-computed status.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Product")]
pub struct ProductObject {
    pub id: ID,
    pub name: String,
    pub sku: String,
    pub warehouse: String,
    pub stock: i64,
    pub demand: i64,
    /// One of `Healthy`, `Low`, `Critical`.
    pub status: String,
}

impl From<ProductSnapshot> for ProductObject {
    fn from(p: ProductSnapshot) -> Self {
        Self {
            id: ID(p.id),
            name: p.name,
            sku: p.sku,
            warehouse: p.warehouse,
            stock: p.stock,
            demand: p.demand,
            status: p.status.as_str().to_string(),
        }
    }
}

/// One page of the product table.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "ProductsPage")]
pub struct ProductsPageObject {
    pub items: Vec<ProductObject>,
    /// Filtered count before paging.
    pub total: i64,
}

impl From<ProductsPage> for ProductsPageObject {
    fn from(page: ProductsPage) -> Self {
        Self {
            items: page.items.into_iter().map(ProductObject::from).collect(),
            total: i64::try_from(page.total).unwrap_or(i64::MAX),
        }
    }
}

/// One synthetic day of the KPI chart.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "TrendPoint")]
pub struct TrendPointObject {
    pub day: String,
    pub stock: i64,
    pub demand: i64,
}

impl From<TrendPoint> for TrendPointObject {
    fn from(p: TrendPoint) -> Self {
        Self {
            day: p.day,
            stock: p.stock,
            demand: p.demand,
        }
    }
}

/// Dashboard KPIs over the whole collection.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "KPI")]
pub struct KpiObject {
    pub total_stock: i64,
    pub total_demand: i64,
    pub fill_rate: f64,
    pub trend: Vec<TrendPointObject>,
}

impl From<Kpis> for KpiObject {
    fn from(k: Kpis) -> Self {
        Self {
            total_stock: k.total_stock,
            total_demand: k.total_demand,
            fill_rate: k.fill_rate,
            trend: k.trend.into_iter().map(TrendPointObject::from).collect(),
        }
    }
}

/// Filter and paging arguments of `products`.
#[derive(InputObject, Debug, Clone, Default)]
pub struct ProductsFilter {
    /// Case-insensitive substring of name, sku or id.
    pub query: Option<String>,
    /// Exact warehouse name.
    pub warehouse: Option<String>,
    /// `All`, `Healthy`, `Low` or `Critical`.
    pub status: Option<String>,
    /// Defaults to 0.
    pub offset: Option<i64>,
    /// Defaults to 10.
    pub limit: Option<i64>,
}

impl From<ProductsFilter> for ProductFilter {
    fn from(f: ProductsFilter) -> Self {
        Self {
            status: StatusFilter::parse(f.status.as_deref()),
            query: f.query,
            warehouse: f.warehouse,
            offset: clamp_to_usize(f.offset.unwrap_or(0)),
            limit: f
                .limit
                .map(clamp_to_usize)
                .unwrap_or(DEFAULT_PAGE_LIMIT),
        }
    }
}

/// Negative paging values count as zero.
fn clamp_to_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}
