//! Vigil Clock Infrastructure
//!
//! Time sources for the monitoring core:
//!
//! - [`SystemClock`] - real wall-clock time for production
//! - [`FixedClock`] - settable, manually advanced time for
//!   deterministic tests
//!
//! Both implement the [`Clock`] port, so the controller and session
//! never touch `Utc::now()` directly.

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use vigil_ports::Clock;
