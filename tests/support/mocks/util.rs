// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Deterministic clock that advances one second per reading, so records
/// created in sequence get strictly increasing timestamps.
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl TickingClock {
    /// The instant the next `now()` call will return.
    pub fn peek(&self) -> DateTime<Utc> {
        super::time::fixed_now() + Duration::seconds(self.ticks.load(Ordering::SeqCst))
    }
}

impl quillpress::application::ports::time::Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        super::time::fixed_now() + Duration::seconds(tick)
    }
}
