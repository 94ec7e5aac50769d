//! Window statistics - aggregates derived from an asset's price history

use crate::values::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over an asset's current history window.
///
/// Derived on demand from the retained window; never cached across
/// ticks. `percent_change` is relative to the oldest retained entry,
/// i.e. the start of the sliding window, not the asset's all-time
/// first price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// `last - first` over the window
    pub total_change: Price,
    /// `total_change / first * 100`; `None` when the window starts at zero
    pub percent_change: Option<Decimal>,
    pub max_price: Price,
    pub min_price: Price,
    pub avg_price: Price,
    pub sample_count: usize,
}

/// End-of-session view of one asset: what gets written to the summary log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Last-known price; absent if the asset never produced a sample
    pub last_price: Option<Price>,
    /// Window statistics; absent below 2 retained points
    pub stats: Option<StatsSnapshot>,
}
