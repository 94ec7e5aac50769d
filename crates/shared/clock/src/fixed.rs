use chrono::Duration;
use std::sync::Mutex;
use vigil_core::Timestamp;
use vigil_ports::Clock;

/// Manually controlled clock for deterministic tests
///
/// Time only moves when the test calls [`FixedClock::advance`] or
/// [`FixedClock::set`].
pub struct FixedClock {
    now: Mutex<Timestamp>,
}

impl FixedClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Jump time forward by the given duration
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    /// Set the clock to an absolute time
    pub fn set(&self, to: Timestamp) {
        let mut now = self.now.lock().unwrap();
        *now = to;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap()
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
