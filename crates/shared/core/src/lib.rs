//! Vigil Core Domain
//!
//! Pure domain types for the Vigil price monitoring system.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod event;
pub mod record;
pub mod sample;
pub mod stats;
pub mod values;

// Re-export commonly used types at crate root
pub use event::{ChangeEvent, ChangeKind};
pub use record::DisplayRecord;
pub use sample::{PollSample, PriceSample};
pub use stats::{SessionReport, StatsSnapshot};
pub use values::{AssetId, Price, Timestamp};
