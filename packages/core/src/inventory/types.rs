//! Core data types for the inventory engine

use serde::{Deserialize, Serialize};

use crate::inventory::status::{derive_status, StockStatus};

/// Default page size when the caller does not supply a limit.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// A stored product record.
///
/// Status is deliberately absent: it is derived from `stock` and `demand`
/// every time a record leaves the engine (see [`Product::snapshot`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub warehouse: String,
    pub stock: i64,
    pub demand: i64,
}

impl Product {
    /// Copy the record out together with its current derived status.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            sku: self.sku.clone(),
            warehouse: self.warehouse.clone(),
            stock: self.stock,
            demand: self.demand,
            status: derive_status(self.stock, self.demand),
        }
    }

    /// Case-insensitive substring match against name, sku and id.
    /// `needle` must already be lowercased.
    fn matches_query(&self, needle: &str) -> bool {
        [&self.name, &self.sku, &self.id]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A product as returned to callers: the record plus its derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSnapshot {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub warehouse: String,
    pub stock: i64,
    pub demand: i64,
    pub status: StockStatus,
}

/// Status constraint of a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// `All`, empty or absent.
    #[default]
    Any,
    Only(StockStatus),
    /// A token that names no status; nothing matches it.
    Unrecognized(String),
}

impl StatusFilter {
    /// Tokens are matched exactly; surrounding whitespace makes a token
    /// unrecognized.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some("All") => StatusFilter::Any,
            Some(token) => match StockStatus::from_token(token) {
                Some(status) => StatusFilter::Only(status),
                None => StatusFilter::Unrecognized(token.to_string()),
            },
        }
    }

    fn admits(&self, status: StockStatus) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Only(wanted) => *wanted == status,
            StatusFilter::Unrecognized(_) => false,
        }
    }
}

/// Filter and paging parameters for a product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub query: Option<String>,
    pub warehouse: Option<String>,
    pub status: StatusFilter,
    pub offset: usize,
    pub limit: usize,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            query: None,
            warehouse: None,
            status: StatusFilter::Any,
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ProductFilter {
    /// `true` when the product satisfies every supplied sub-filter.
    pub fn matches(&self, product: &Product) -> bool {
        let query_ok = match self.query.as_deref() {
            None | Some("") => true,
            Some(q) => product.matches_query(&q.to_lowercase()),
        };
        let warehouse_ok = match self.warehouse.as_deref() {
            None | Some("") => true,
            Some(wh) => product.warehouse == wh,
        };

        query_ok
            && warehouse_ok
            && self.status.admits(derive_status(product.stock, product.demand))
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductsPage {
    pub items: Vec<ProductSnapshot>,
    /// Size of the filtered set before slicing.
    pub total: usize,
}

/// Aggregate stock and demand over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub stock: i64,
    pub demand: i64,
}

/// Requested length of the KPI trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendRange {
    Week,
    Fortnight,
    Month,
}

impl TrendRange {
    /// `"7d"` and `"14d"` select the short ranges; anything else is a month.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "7d" => TrendRange::Week,
            "14d" => TrendRange::Fortnight,
            _ => TrendRange::Month,
        }
    }

    pub fn days(self) -> usize {
        match self {
            TrendRange::Week => 7,
            TrendRange::Fortnight => 14,
            TrendRange::Month => 30,
        }
    }
}

/// One day of the KPI trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// 1-based day label.
    pub day: String,
    pub stock: i64,
    pub demand: i64,
}

/// KPI summary for the dashboard header and chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_stock: i64,
    pub total_demand: i64,
    /// Percentage of demand covered by stock, 0 when there is no demand.
    pub fill_rate: f64,
    pub trend: Vec<TrendPoint>,
}
