//! Vigil Ports
//!
//! Port definitions (traits) for the Vigil price monitoring system.
//! These define the boundaries between the monitoring core and
//! infrastructure: time, sample acquisition, and record emission.

mod clock;
mod error;
mod sink;
mod source;

pub use clock::Clock;
pub use error::SourceError;
pub use sink::RecordSink;
pub use source::SampleSource;
