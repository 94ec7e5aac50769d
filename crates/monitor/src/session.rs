//! Monitoring session - the async polling loop
//!
//! One session owns a controller, a sample source, and a record sink,
//! and drives them at the configured cadence until stopped. Ticks never
//! overlap: each poll-process-emit cycle completes before the next
//! interval fires, and a stop request is honored between ticks, never
//! mid-tick.

use crate::controller::MonitorController;
use std::collections::BTreeMap;
use tokio::sync::watch;
use uuid::Uuid;
use vigil_core::{AssetId, SessionReport};
use vigil_ports::{RecordSink, SampleSource};

/// Handle for requesting a clean session stop
#[derive(Clone)]
pub struct SessionHandle {
    shutdown_tx: watch::Sender<bool>,
}

impl SessionHandle {
    /// Request a stop. The session halts before starting a new tick and
    /// flushes final statistics through the sink.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

/// A running monitoring session
pub struct MonitorSession<S: SampleSource, K: RecordSink> {
    session_id: Uuid,
    controller: MonitorController,
    source: S,
    sink: K,
    shutdown_rx: watch::Receiver<bool>,
}

impl<S: SampleSource, K: RecordSink> MonitorSession<S, K> {
    pub fn new(controller: MonitorController, source: S, sink: K) -> (Self, SessionHandle) {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let session = Self {
            session_id: Uuid::new_v4(),
            controller,
            source,
            sink,
            shutdown_rx,
        };
        (session, SessionHandle { shutdown_tx })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Access the controller before the loop starts (e.g. to reconfigure)
    pub fn controller_mut(&mut self) -> &mut MonitorController {
        &mut self.controller
    }

    /// Run the polling loop until stopped.
    ///
    /// The poll interval is read once at startup. A whole-cycle source
    /// failure logs a warning and skips the tick; per-asset state is
    /// never cleared on a missed tick. On stop, the final per-asset
    /// summary is flushed to the sink and returned.
    pub async fn run(mut self) -> BTreeMap<AssetId, SessionReport> {
        log::info!(
            "[{}] Monitoring started for [{}] every {}s via {}",
            self.session_id,
            self.controller.config().tracked_assets.join(", "),
            self.controller.config().poll_interval_secs,
            self.source.name(),
        );

        let mut interval = tokio::time::interval(self.controller.config().poll_interval());

        loop {
            tokio::select! {
                // Stop requests win over a due tick
                biased;

                result = self.shutdown_rx.changed() => {
                    if result.is_err() || *self.shutdown_rx.borrow() {
                        break;
                    }
                }

                _ = interval.tick() => {
                    self.run_tick().await;
                }
            }
        }

        let summary = self.controller.session_summary();
        self.sink.emit_summary(&summary);
        log::info!("[{}] Monitoring stopped", self.session_id);

        summary
    }

    async fn run_tick(&mut self) {
        let assets = self.controller.config().tracked_assets.clone();

        match self.source.poll(&assets).await {
            Ok(samples) => {
                let records = self.controller.process_tick(&samples);
                log::debug!(
                    "[{}] Tick: {} samples, {} changes",
                    self.session_id,
                    samples.len(),
                    records.len()
                );
                for record in &records {
                    self.sink.emit(record);
                }
            }
            Err(err) => {
                // Transient upstream failure: skip this tick, keep all state
                log::warn!("[{}] Poll failed: {}", self.session_id, err);
            }
        }
    }
}
