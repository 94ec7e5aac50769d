//! Vigil Monitor - Price Monitoring Orchestration
//!
//! Ties the engine to the I/O edges:
//!
//! - **Config**: tracked assets, poll interval (rate-limit floor), window capacity
//! - **Controller**: the per-tick workflow across all tracked assets
//! - **Session**: the async polling loop with clean shutdown
//! - **Feed**: a simulated sample source for demos and tests
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────┐   PollSample    ┌─────────────────────┐
//!   │   SampleSource   │ ──────────────► │  MonitorController  │
//!   │ (HTTP / simulated│                 │                     │
//!   │      feed)       │                 │  ChangeDetector     │
//!   └──────────────────┘                 │  HistoryStore       │
//!                                        │  stats::compute     │
//!                                        └──────────┬──────────┘
//!                                                   │ DisplayRecord
//!                                                   ▼
//!                                        ┌─────────────────────┐
//!                                        │     RecordSink      │
//!                                        │ (terminal / file)   │
//!                                        └─────────────────────┘
//! ```
//!
//! The session loop owns the cadence; the controller is timing-free and
//! fully synchronous, so it can be driven directly from tests.

pub mod config;
pub mod controller;
pub mod feed;
pub mod session;
pub mod sink;

// Re-export main types
pub use config::{ConfigError, MIN_POLL_INTERVAL_SECS, MonitorConfig};
pub use controller::{MonitorController, MonitorStatus};
pub use feed::{FeedConfig, SimulatedPriceFeed};
pub use session::{MonitorSession, SessionHandle};
pub use sink::LogSink;
