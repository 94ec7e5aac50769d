//! Change detector - compares samples against per-asset baselines
//!
//! The baseline (last-known price) is updated on `FirstObservation` and
//! `Changed`, never on `Unchanged`. The controller uses the same split
//! to decide whether to append to history and emit a record.

use std::collections::HashMap;
use vigil_core::{AssetId, ChangeEvent, Price};

/// Per-asset last-known prices and the comparison against them
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector {
    last_known: HashMap<AssetId, Price>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare a sample against the asset's baseline.
    ///
    /// - No baseline yet: record one, return `FirstObservation`.
    /// - Differs from baseline: update it, return `Changed` with delta
    ///   and percent delta (percent is `None` on a zero baseline).
    /// - Equal: return `Unchanged`, baseline untouched.
    pub fn detect(&mut self, asset_id: &str, current: Price) -> ChangeEvent {
        match self.last_known.get(asset_id).copied() {
            None => {
                self.last_known.insert(asset_id.to_string(), current);
                ChangeEvent::first_observation(asset_id, current)
            }
            Some(previous) if current != previous => {
                self.last_known.insert(asset_id.to_string(), current);
                ChangeEvent::changed(asset_id, previous, current)
            }
            Some(_) => ChangeEvent::unchanged(asset_id, current),
        }
    }

    /// Baseline for an asset, if one has been recorded
    pub fn last_known(&self, asset_id: &str) -> Option<Price> {
        self.last_known.get(asset_id).copied()
    }

    /// Drop all baselines (used on reconfiguration)
    pub fn clear(&mut self) {
        self.last_known.clear();
    }
}
