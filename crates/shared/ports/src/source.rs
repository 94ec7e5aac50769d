use crate::error::SourceError;
use async_trait::async_trait;
use vigil_core::{AssetId, PollSample};

/// Port for acquiring price samples.
///
/// One call corresponds to one poll cycle over the tracked assets.
/// Implementations own all transport concerns (HTTP, retries, parsing);
/// a whole-cycle failure surfaces as `SourceError`, a per-asset failure
/// as a `PollSample` with `price: None`. An asset simply absent from
/// the returned batch means "no update this tick".
#[async_trait]
pub trait SampleSource: Send {
    async fn poll(&mut self, assets: &[AssetId]) -> Result<Vec<PollSample>, SourceError>;

    /// Source name for logging
    fn name(&self) -> &str {
        "SampleSource"
    }
}
