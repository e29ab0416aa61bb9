//! Replaying adapter for the `Clock` port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::Clock;

/// Replays recorded clock values from a cassette.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        let output = next_output(&self.replayer, "clock", "now");
        serde_json::from_value(output).expect("clock::now: failed to deserialize DateTime<Utc>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::replayer;
    use serde_json::json;

    #[test]
    fn serves_recorded_times_in_order() {
        let clock = ReplayingClock::new(replayer(&[
            ("clock", "now", json!("2024-06-15T10:30:00Z")),
            ("clock", "now", json!("2024-06-15T10:30:01Z")),
        ]));
        let t1 = clock.now();
        let t2 = clock.now();

        assert_eq!(t1.to_rfc3339(), "2024-06-15T10:30:00+00:00");
        assert!(t2 > t1);
    }
}
