//! Change events - the detector's verdict on a single sample
//!
//! One event is produced per processed sample. Events are transient:
//! they drive history updates and display emission within a tick and
//! are not persisted.

use crate::values::{AssetId, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a sample relates to the asset's last-known price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// First sample ever seen for this asset - no prior baseline
    FirstObservation,
    /// Price differs from the last-known baseline
    Changed,
    /// Price equals the last-known baseline
    Unchanged,
}

/// Result of comparing a sample against the asset's baseline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub asset_id: AssetId,
    pub kind: ChangeKind,
    /// Baseline the sample was compared against; absent on first observation
    pub previous_price: Option<Price>,
    pub current_price: Price,
    /// `current - previous`; only present on `Changed`
    pub delta: Option<Price>,
    /// `delta / previous * 100`; `None` on `Changed` with a zero baseline
    /// (undefined percent), and on all other kinds
    pub percent_delta: Option<Decimal>,
}

impl ChangeEvent {
    /// Event for an asset's very first sample
    pub fn first_observation(asset_id: impl Into<AssetId>, current_price: Price) -> Self {
        Self {
            asset_id: asset_id.into(),
            kind: ChangeKind::FirstObservation,
            previous_price: None,
            current_price,
            delta: None,
            percent_delta: None,
        }
    }

    /// Event for a sample that moved away from the baseline.
    ///
    /// Computes the delta and percent delta. A zero baseline makes the
    /// percent undefined; it is reported as `None`, never a panic.
    pub fn changed(asset_id: impl Into<AssetId>, previous: Price, current: Price) -> Self {
        let delta = current - previous;
        let percent_delta = delta
            .checked_div(previous)
            .map(|ratio| ratio * Decimal::ONE_HUNDRED);

        Self {
            asset_id: asset_id.into(),
            kind: ChangeKind::Changed,
            previous_price: Some(previous),
            current_price: current,
            delta: Some(delta),
            percent_delta,
        }
    }

    /// Event for a sample equal to the baseline
    pub fn unchanged(asset_id: impl Into<AssetId>, current_price: Price) -> Self {
        Self {
            asset_id: asset_id.into(),
            kind: ChangeKind::Unchanged,
            previous_price: Some(current_price),
            current_price,
            delta: None,
            percent_delta: None,
        }
    }

    /// Whether this event should trigger a history append and emission
    pub fn is_noteworthy(&self) -> bool {
        self.kind != ChangeKind::Unchanged
    }
}
