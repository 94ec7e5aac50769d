use std::collections::BTreeMap;
use vigil_core::{AssetId, DisplayRecord, SessionReport};

/// Port for record emission.
///
/// The core hands over pure data; rendering (colors, symbols, files)
/// is entirely the sink's concern.
pub trait RecordSink: Send {
    /// One detected change, emitted during a tick
    fn emit(&mut self, record: &DisplayRecord);

    /// Final per-asset summary, emitted once when a session stops
    fn emit_summary(&mut self, summary: &BTreeMap<AssetId, SessionReport>);
}
