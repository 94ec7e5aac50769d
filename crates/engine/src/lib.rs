//! Vigil Engine
//!
//! The stateful core of the monitoring system:
//! - Per-asset last-known baselines and change detection
//! - Bounded rolling price history (default capacity 100)
//! - Window statistics derived on demand
//!
//! ## Data flow
//!
//! ```text
//! sample ──► ChangeDetector ──► ChangeEvent
//!                 │ (FirstObservation / Changed)
//!                 ▼
//!            HistoryStore ──► window snapshot ──► stats::compute
//! ```
//!
//! Everything here is synchronous and allocation-light; the async
//! session loop lives in `vigil-monitor`.

pub mod detector;
pub mod history;
pub mod stats;

// Re-export main types
pub use detector::ChangeDetector;
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryStore};
