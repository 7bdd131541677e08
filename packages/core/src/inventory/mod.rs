//! Inventory Module
//!
//! Product query and aggregation engine: filtering, pagination, derived
//! stock status, KPI totals with a trend series, and the two mutations
//! (set demand, apply stock delta).

pub mod engine;
pub mod error;
pub mod seed;
pub mod status;
pub mod trend;
pub mod types;


pub use engine::InventoryEngine;
pub use error::{InventoryError, SeedError};
pub use status::{derive_status, StockStatus};
pub use trend::{SyntheticTrend, TrendSource};
pub use types::*;
