//! Price samples - what the polling edge hands to the core

use crate::values::{AssetId, Price, Timestamp};
use serde::{Deserialize, Serialize};

/// A single observed price for one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSample {
    pub asset_id: AssetId,
    pub price: Price,
    pub observed_at: Timestamp,
}

impl PriceSample {
    pub fn new(asset_id: impl Into<AssetId>, price: Price, observed_at: Timestamp) -> Self {
        Self {
            asset_id: asset_id.into(),
            price,
            observed_at,
        }
    }
}

/// What one poll cycle yields per asset.
///
/// `price: None` means the upstream fetch failed for this asset on this
/// tick. The core treats that as "no update": no event, no state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSample {
    pub asset_id: AssetId,
    pub price: Option<Price>,
    pub observed_at: Timestamp,
}

impl PollSample {
    /// A successfully fetched price
    pub fn observed(asset_id: impl Into<AssetId>, price: Price, observed_at: Timestamp) -> Self {
        Self {
            asset_id: asset_id.into(),
            price: Some(price),
            observed_at,
        }
    }

    /// A failed fetch for this asset on this tick
    pub fn missing(asset_id: impl Into<AssetId>, observed_at: Timestamp) -> Self {
        Self {
            asset_id: asset_id.into(),
            price: None,
            observed_at,
        }
    }
}
