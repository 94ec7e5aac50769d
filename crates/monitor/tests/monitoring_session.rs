//! Monitoring Session Integration Test
//!
//! Tests the full flow:
//! 1. A sample source produces per-asset poll samples
//! 2. The controller detects changes and maintains bounded history
//! 3. Window statistics ride along on emitted records
//! 4. The session loop drives everything and flushes a final summary

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use vigil_core::{AssetId, ChangeKind, DisplayRecord, PollSample, SessionReport};
use vigil_monitor::{FeedConfig, MonitorConfig, MonitorController, MonitorSession, SimulatedPriceFeed};
use vigil_ports::{RecordSink, SampleSource, SourceError};

/// Source that replays a scripted sequence of poll results
struct ScriptedSource {
    script: VecDeque<Result<Vec<PollSample>, SourceError>>,
}

impl ScriptedSource {
    fn new(script: Vec<Result<Vec<PollSample>, SourceError>>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

#[async_trait]
impl SampleSource for ScriptedSource {
    async fn poll(&mut self, _assets: &[AssetId]) -> Result<Vec<PollSample>, SourceError> {
        self.script.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn name(&self) -> &str {
        "ScriptedSource"
    }
}

/// Sink that captures everything for assertions
#[derive(Clone, Default)]
struct CaptureSink {
    records: Arc<Mutex<Vec<DisplayRecord>>>,
    summary: Arc<Mutex<Option<BTreeMap<AssetId, SessionReport>>>>,
}

impl RecordSink for CaptureSink {
    fn emit(&mut self, record: &DisplayRecord) {
        self.records.lock().unwrap().push(record.clone());
    }

    fn emit_summary(&mut self, summary: &BTreeMap<AssetId, SessionReport>) {
        *self.summary.lock().unwrap() = Some(summary.clone());
    }
}

fn observed(asset: &str, price: Decimal) -> PollSample {
    PollSample::observed(asset, price, Utc::now())
}

fn config(assets: &[&str]) -> MonitorConfig {
    MonitorConfig::new(assets.iter().map(|s| s.to_string()).collect(), 30)
}

#[test]
fn test_controller_pipeline_over_scripted_ticks() {
    let mut ctl = MonitorController::new(config(&["bitcoin"])).unwrap();

    // Tick 1: first observation, no stats yet
    let records = ctl.process_tick(&[observed("bitcoin", dec!(100))]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, ChangeKind::FirstObservation);
    assert!(records[0].stats.is_none());

    // Tick 2: change, stats over [100, 150]
    let records = ctl.process_tick(&[observed("bitcoin", dec!(150))]);
    assert_eq!(records[0].kind, ChangeKind::Changed);
    assert_eq!(records[0].delta, Some(dec!(50)));
    assert_eq!(records[0].percent_delta, Some(dec!(50)));
    let stats = records[0].stats.as_ref().unwrap();
    assert_eq!(stats.total_change, dec!(50));
    assert_eq!(stats.percent_change, Some(dec!(50)));

    // Tick 3: unchanged, nothing emitted, nothing stored
    assert!(ctl.process_tick(&[observed("bitcoin", dec!(150))]).is_empty());

    // Tick 4: fetch failure, a no-op
    assert!(ctl
        .process_tick(&[PollSample::missing("bitcoin", Utc::now())])
        .is_empty());

    // Tick 5: change against the surviving baseline; window is [100, 150, 90]
    let records = ctl.process_tick(&[observed("bitcoin", dec!(90))]);
    let stats = records[0].stats.as_ref().unwrap();
    assert_eq!(stats.sample_count, 3);
    assert_eq!(stats.total_change, dec!(-10));
    assert_eq!(stats.min_price, dec!(90));
    assert_eq!(stats.max_price, dec!(150));

    // Session summary reflects the final window
    let summary = ctl.session_summary();
    let report = &summary["bitcoin"];
    assert_eq!(report.last_price, Some(dec!(90)));
    assert_eq!(report.stats.as_ref().unwrap().sample_count, 3);
}

#[test]
fn test_history_bound_holds_through_controller() {
    let mut ctl = MonitorController::new(config(&["bitcoin"])).unwrap();

    // 150 strictly increasing prices: every tick is a change
    for i in 1..=150u32 {
        ctl.process_tick(&[observed("bitcoin", Decimal::from(i))]);
    }

    let summary = ctl.session_summary();
    let stats = summary["bitcoin"].stats.as_ref().unwrap();
    assert_eq!(stats.sample_count, 100);
    // Sliding window: percent baseline is the oldest retained entry (51)
    assert_eq!(stats.total_change, Decimal::from(150 - 51));
    assert_eq!(stats.min_price, Decimal::from(51u32));
    assert_eq!(stats.max_price, Decimal::from(150u32));
}

#[tokio::test(start_paused = true)]
async fn test_session_emits_records_and_flushes_summary() {
    let ctl = MonitorController::new(config(&["bitcoin"])).unwrap();
    let source = ScriptedSource::new(vec![
        Ok(vec![observed("bitcoin", dec!(100))]),
        Ok(vec![observed("bitcoin", dec!(120))]),
        Err(SourceError::Timeout),
        Ok(vec![observed("bitcoin", dec!(120))]),
    ]);
    let sink = CaptureSink::default();
    let capture = sink.clone();

    let (session, handle) = MonitorSession::new(ctl, source, sink);
    let task = tokio::spawn(session.run());

    // Four 30s ticks (the first fires immediately)
    tokio::time::sleep(std::time::Duration::from_secs(100)).await;
    handle.stop();
    let summary = task.await.unwrap();

    // First observation then one change; the failed poll and the
    // unchanged price emit nothing
    let records = capture.records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind, ChangeKind::FirstObservation);
    assert_eq!(records[1].kind, ChangeKind::Changed);
    assert_eq!(records[1].current_price, dec!(120));

    // Summary was both returned and flushed to the sink
    assert_eq!(summary["bitcoin"].last_price, Some(dec!(120)));
    let flushed = capture.summary.lock().unwrap();
    assert_eq!(flushed.as_ref(), Some(&summary));
}

#[tokio::test(start_paused = true)]
async fn test_stop_before_first_tick_yields_empty_reports() {
    let ctl = MonitorController::new(config(&["bitcoin"])).unwrap();
    let source = ScriptedSource::new(vec![Ok(vec![observed("bitcoin", dec!(100))])]);
    let sink = CaptureSink::default();
    let capture = sink.clone();

    let (session, handle) = MonitorSession::new(ctl, source, sink);
    handle.stop();
    let summary = session.run().await;

    assert!(capture.records.lock().unwrap().is_empty());
    assert_eq!(summary["bitcoin"].last_price, None);
    assert_eq!(summary["bitcoin"].stats, None);
}

#[tokio::test(start_paused = true)]
async fn test_session_with_flat_simulated_feed() {
    use vigil_clock::SystemClock;

    // Zero volatility: every asset holds its starting price, so each
    // emits exactly one record (the first observation)
    let feed_config = FeedConfig {
        volatility: 0.0,
        ..Default::default()
    };
    let feed = SimulatedPriceFeed::with_seed(feed_config, Arc::new(SystemClock::new()), 42);

    let ctl = MonitorController::new(config(&["bitcoin", "ethereum"])).unwrap();
    let sink = CaptureSink::default();
    let capture = sink.clone();

    let (session, handle) = MonitorSession::new(ctl, feed, sink);
    let task = tokio::spawn(session.run());

    tokio::time::sleep(std::time::Duration::from_secs(100)).await;
    handle.stop();
    let summary = task.await.unwrap();

    let records = capture.records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.kind == ChangeKind::FirstObservation));

    assert_eq!(summary["bitcoin"].last_price, Some(dec!(50000)));
    assert_eq!(summary["ethereum"].last_price, Some(dec!(3000)));
}
