//! Minimal monitoring demo: simulated feed, log sink, clean stop.
//!
//! Run with: `RUST_LOG=info cargo run -p vigil-monitor --example monitor_demo`

use std::sync::Arc;
use std::time::Duration;
use vigil_clock::SystemClock;
use vigil_monitor::{
    ConfigError, FeedConfig, LogSink, MonitorConfig, MonitorController, MonitorSession,
    SimulatedPriceFeed,
};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let config = MonitorConfig::new(
        vec!["bitcoin".to_string(), "ethereum".to_string(), "ripple".to_string()],
        30,
    );
    let controller = MonitorController::new(config)?;

    let feed = SimulatedPriceFeed::new(FeedConfig::default(), Arc::new(SystemClock::new()));
    let (session, handle) = MonitorSession::new(controller, feed, LogSink::new());

    let task = tokio::spawn(session.run());

    // Let a few ticks run, then stop cleanly
    tokio::time::sleep(Duration::from_secs(95)).await;
    handle.stop();

    let summary = task.await.expect("session task panicked");
    for (asset_id, report) in &summary {
        println!("{asset_id}: {report:?}");
    }

    Ok(())
}
