//! Live clock reading the system wall clock.

use chrono::{DateTime, Utc};

use crate::ports::Clock;

/// Live clock that returns the real current time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
