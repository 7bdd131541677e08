//! Stock health classification

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Health of a single product, derived from its stock and demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StockStatus {
    Healthy,
    Low,
    Critical,
}

impl StockStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::Healthy => "Healthy",
            StockStatus::Low => "Low",
            StockStatus::Critical => "Critical",
        }
    }

    /// Parse the wire token of a status. Case-sensitive, like the tokens
    /// the dashboard sends.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Healthy" => Some(StockStatus::Healthy),
            "Low" => Some(StockStatus::Low),
            "Critical" => Some(StockStatus::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a `(stock, demand)` pair.
///
/// This is the only place status is computed; it is never stored.
pub fn derive_status(stock: i64, demand: i64) -> StockStatus {
    match stock.cmp(&demand) {
        Ordering::Greater => StockStatus::Healthy,
        Ordering::Equal => StockStatus::Low,
        Ordering::Less => StockStatus::Critical,
    }
}
