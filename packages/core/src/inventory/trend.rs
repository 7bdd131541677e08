//! Trend Source Interface
//!
//! The KPI chart needs a day-by-day series of stock and demand. There is no
//! time-series store behind this service, so the built-in source synthesises
//! a deterministic oscillation around the current totals. A real historical
//! aggregator can replace it by implementing [`TrendSource`].

use crate::inventory::types::{Totals, TrendPoint, TrendRange};

/// Amplitude of the synthetic oscillation, in units.
const SYNTHETIC_AMPLITUDE: f64 = 10.0;

/// Producer of the KPI trend series.
pub trait TrendSource {
    /// Build the series for `range`, given the current collection totals.
    fn series(&self, totals: Totals, range: TrendRange) -> Vec<TrendPoint>;

    /// Name of this source for logging/debugging
    fn source_name(&self) -> &str;
}

/// Placeholder source: `totals ± round(10·sin i)` / `round(10·cos i)`.
///
/// The output is a pure function of its inputs and reproducible bit for bit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticTrend;

impl TrendSource for SyntheticTrend {
    fn series(&self, totals: Totals, range: TrendRange) -> Vec<TrendPoint> {
        (0..range.days())
            .map(|i| {
                let x = i as f64;
                TrendPoint {
                    day: (i + 1).to_string(),
                    stock: totals
                        .stock
                        .saturating_add(round_half_up(x.sin() * SYNTHETIC_AMPLITUDE))
                        .max(0),
                    demand: totals
                        .demand
                        .saturating_add(round_half_up(x.cos() * SYNTHETIC_AMPLITUDE))
                        .max(0),
                }
            })
            .collect()
    }

    fn source_name(&self) -> &str {
        "synthetic"
    }
}

/// Round to the nearest integer with halves going towards +∞.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
