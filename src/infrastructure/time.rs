use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock used for audit stamps.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
