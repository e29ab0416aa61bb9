//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// The calendar year drives the length schedule and the millisecond
/// timestamp feeds the payload, so tests pin both by substituting a fixed
/// or recorded clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
