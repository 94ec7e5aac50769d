//! Monitor controller - the per-tick workflow
//!
//! Sequences one tick across all tracked assets: detect, append,
//! recompute stats, build a display record. The controller owns its
//! detector and history store as plain fields, so multiple independent
//! monitoring sessions can coexist and tests drive it directly. It is
//! timing-free: the cadence belongs to [`crate::session::MonitorSession`].

use crate::config::{ConfigError, MonitorConfig};
use serde::Serialize;
use std::collections::BTreeMap;
use vigil_core::{AssetId, DisplayRecord, PollSample, Price, SessionReport};
use vigil_engine::{ChangeDetector, HistoryStore, stats};

/// Point-in-time view of the monitoring setup, for status displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorStatus {
    pub tracked_assets: Vec<AssetId>,
    pub poll_interval_secs: u64,
    /// Last-known price per asset; assets never sampled are absent
    pub last_prices: BTreeMap<AssetId, Price>,
}

/// Orchestrates change detection, history, and statistics per tick
pub struct MonitorController {
    config: MonitorConfig,
    detector: ChangeDetector,
    history: HistoryStore,
}

impl MonitorController {
    /// Create a controller from a validated configuration
    pub fn new(config: MonitorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let history = HistoryStore::with_capacity(config.history_capacity);

        Ok(Self {
            config,
            detector: ChangeDetector::new(),
            history,
        })
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Process one tick's worth of samples.
    ///
    /// Per sample: untracked assets and absent prices are skipped
    /// outright (no event, no state change). `Unchanged` verdicts
    /// mutate nothing and emit nothing. `FirstObservation` and
    /// `Changed` append to history and yield a record with stats over
    /// the updated window (stats omitted below 2 points).
    pub fn process_tick(&mut self, samples: &[PollSample]) -> Vec<DisplayRecord> {
        samples
            .iter()
            .filter_map(|sample| self.process_sample(sample))
            .collect()
    }

    fn process_sample(&mut self, sample: &PollSample) -> Option<DisplayRecord> {
        if !self.config.is_tracked(&sample.asset_id) {
            log::debug!("Ignoring sample for untracked asset {}", sample.asset_id);
            return None;
        }

        // Failed fetch for this asset this tick: no update, state untouched
        let Some(price) = sample.price else {
            log::debug!("No price for {} this tick, skipping", sample.asset_id);
            return None;
        };

        let event = self.detector.detect(&sample.asset_id, price);
        if !event.is_noteworthy() {
            return None;
        }

        self.history.append(&sample.asset_id, price);
        let snapshot = stats::compute(&self.history.snapshot(&sample.asset_id));

        Some(DisplayRecord::from_event(event, snapshot))
    }

    /// Apply a new asset list and/or poll interval.
    ///
    /// An interval below the minimum rejects the whole call: nothing is
    /// applied and the prior configuration stays in force. A new asset
    /// list clears all baselines and histories for a clean restart of
    /// tracking.
    pub fn reconfigure(
        &mut self,
        new_assets: Option<Vec<AssetId>>,
        new_interval_secs: Option<u64>,
    ) -> Result<(), ConfigError> {
        let mut candidate = self.config.clone();
        if let Some(interval) = new_interval_secs {
            candidate.poll_interval_secs = interval;
        }
        if let Some(ref assets) = new_assets {
            candidate.tracked_assets = assets.clone();
        }
        candidate.validate()?;

        if new_assets.is_some() {
            self.detector.clear();
            self.history.clear(None);
            log::info!(
                "Tracked assets changed to [{}], per-asset state cleared",
                candidate.tracked_assets.join(", ")
            );
        }
        if let Some(interval) = new_interval_secs {
            log::info!("Poll interval set to {}s", interval);
        }
        self.config = candidate;
        Ok(())
    }

    /// Per-asset end-of-session view: last-known price plus window
    /// statistics where at least 2 points were retained. One entry per
    /// tracked asset, in asset-id order.
    pub fn session_summary(&self) -> BTreeMap<AssetId, SessionReport> {
        self.config
            .tracked_assets
            .iter()
            .map(|asset_id| {
                let report = SessionReport {
                    last_price: self.detector.last_known(asset_id),
                    stats: stats::compute(&self.history.snapshot(asset_id)),
                };
                (asset_id.clone(), report)
            })
            .collect()
    }

    /// Current monitoring status, for external status displays
    pub fn status(&self) -> MonitorStatus {
        let last_prices = self
            .config
            .tracked_assets
            .iter()
            .filter_map(|asset_id| {
                self.detector
                    .last_known(asset_id)
                    .map(|price| (asset_id.clone(), price))
            })
            .collect();

        MonitorStatus {
            tracked_assets: self.config.tracked_assets.clone(),
            poll_interval_secs: self.config.poll_interval_secs,
            last_prices,
        }
    }
}
