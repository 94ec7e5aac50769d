//! Display records - pure data handed to the external rendering sink
//!
//! The core never formats: no colors, no symbols, no locale. A record
//! carries the change verdict plus whatever statistics were available,
//! and the sink decides how to present it.

use crate::event::{ChangeEvent, ChangeKind};
use crate::stats::StatsSnapshot;
use crate::values::{AssetId, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One emitted monitoring record: a detected change plus window stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub asset_id: AssetId,
    pub kind: ChangeKind,
    pub current_price: Price,
    pub delta: Option<Price>,
    pub percent_delta: Option<Decimal>,
    /// Window statistics; omitted while the history has fewer than 2 points
    pub stats: Option<StatsSnapshot>,
}

impl DisplayRecord {
    /// Combine a change event with the stats computed after it
    pub fn from_event(event: ChangeEvent, stats: Option<StatsSnapshot>) -> Self {
        Self {
            asset_id: event.asset_id,
            kind: event.kind,
            current_price: event.current_price,
            delta: event.delta,
            percent_delta: event.percent_delta,
            stats,
        }
    }
}
