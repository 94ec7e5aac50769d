//! Monitor configuration and validation

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use vigil_core::AssetId;
use vigil_engine::DEFAULT_HISTORY_CAPACITY;

/// Minimum poll interval, matching the upstream API rate limit
pub const MIN_POLL_INTERVAL_SECS: u64 = 30;

/// Configuration rejections. The prior configuration is always retained
/// unchanged when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Poll interval {requested}s is below the {minimum}s minimum (upstream rate limit)")]
    IntervalTooShort { requested: u64, minimum: u64 },

    #[error("Tracked asset list must not be empty")]
    NoAssets,
}

/// Monitoring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Assets to track, by identifier
    pub tracked_assets: Vec<AssetId>,
    /// Seconds between poll cycles; floored at [`MIN_POLL_INTERVAL_SECS`]
    pub poll_interval_secs: u64,
    /// Rolling history window capacity per asset
    pub history_capacity: usize,
}

impl MonitorConfig {
    pub fn new(tracked_assets: Vec<AssetId>, poll_interval_secs: u64) -> Self {
        Self {
            tracked_assets,
            poll_interval_secs,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_secs < MIN_POLL_INTERVAL_SECS {
            return Err(ConfigError::IntervalTooShort {
                requested: self.poll_interval_secs,
                minimum: MIN_POLL_INTERVAL_SECS,
            });
        }
        if self.tracked_assets.is_empty() {
            return Err(ConfigError::NoAssets);
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn is_tracked(&self, asset_id: &str) -> bool {
        self.tracked_assets.iter().any(|id| id == asset_id)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tracked_assets: vec!["bitcoin".to_string()],
            poll_interval_secs: 60,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}
