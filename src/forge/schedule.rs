//! Payload length schedule.

use std::num::NonZeroU32;

/// Payload length for `current_year`.
///
/// Grows by one character every `interval_years` after `epoch_year`. Years
/// before the epoch count as zero elapsed, so a misconfigured clock never
/// shrinks identifiers below `base_length`.
///
/// [`GeneratorConfig::growth_interval`] yields the interval for a
/// configuration, rejecting zero.
///
/// [`GeneratorConfig::growth_interval`]: super::GeneratorConfig::growth_interval
#[must_use]
pub fn scheduled_length(
    current_year: i32,
    epoch_year: i32,
    base_length: usize,
    interval_years: NonZeroU32,
) -> usize {
    let elapsed = u32::try_from(i64::from(current_year) - i64::from(epoch_year)).unwrap_or(0);
    let steps = usize::try_from(elapsed / interval_years.get()).unwrap_or(usize::MAX);
    base_length.saturating_add(steps)
}
