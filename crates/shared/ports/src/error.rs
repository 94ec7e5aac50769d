use thiserror::Error;

/// Failures a sample source can report for a whole poll cycle.
///
/// All of these are transient from the core's point of view: the session
/// logs the failure and skips the tick without touching per-asset state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Rate limited by upstream API")]
    RateLimited,

    #[error("Malformed response: {0}")]
    Malformed(String),
}
