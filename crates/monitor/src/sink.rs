//! Log sink - the minimal built-in record sink
//!
//! Renders records through the `log` facade. Anything fancier (colors,
//! terminal control, files) belongs in an external sink implementation.

use std::collections::BTreeMap;
use vigil_core::{AssetId, ChangeKind, DisplayRecord, SessionReport};
use vigil_ports::RecordSink;

/// Emits records and summaries as log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSink for LogSink {
    fn emit(&mut self, record: &DisplayRecord) {
        let movement = match (record.delta, record.percent_delta) {
            (Some(delta), Some(percent)) => format!(" moved {} ({}%)", delta, percent.round_dp(2)),
            (Some(delta), None) => format!(" moved {} (undefined %)", delta),
            _ => String::new(),
        };

        let kind = match record.kind {
            ChangeKind::FirstObservation => "first observation",
            ChangeKind::Changed => "changed",
            ChangeKind::Unchanged => "unchanged",
        };

        match &record.stats {
            Some(stats) => log::info!(
                "{}: {} at {}{} | window: total {} / max {} / min {} / avg {} over {} points",
                record.asset_id,
                kind,
                record.current_price,
                movement,
                stats.total_change,
                stats.max_price,
                stats.min_price,
                stats.avg_price.round_dp(2),
                stats.sample_count,
            ),
            None => log::info!(
                "{}: {} at {}{}",
                record.asset_id,
                kind,
                record.current_price,
                movement
            ),
        }
    }

    fn emit_summary(&mut self, summary: &BTreeMap<AssetId, SessionReport>) {
        for (asset_id, report) in summary {
            match (&report.last_price, &report.stats) {
                (Some(last), Some(stats)) => log::info!(
                    "summary {}: last {} | total {} | max {} | min {} | avg {} | {} points",
                    asset_id,
                    last,
                    stats.total_change,
                    stats.max_price,
                    stats.min_price,
                    stats.avg_price.round_dp(2),
                    stats.sample_count,
                ),
                (Some(last), None) => {
                    log::info!("summary {}: last {} | not enough data for stats", asset_id, last)
                }
                _ => log::info!("summary {}: no samples received", asset_id),
            }
        }
    }
}
