//! Payload composition: random block, fingerprint, timestamp.

use super::radix::{to_base36, to_base62ish};

/// Random bytes drawn per payload.
pub const RANDOM_BLOCK_LEN: usize = 12;

/// Builds a payload of at most `length` characters.
///
/// The segments are concatenated in order (random block, fingerprint,
/// base-36 millisecond timestamp) and truncated. When the segments run out
/// first the payload is simply shorter; it is never padded.
#[must_use]
pub fn compose_payload(
    random_block: &[u8],
    fingerprint: &str,
    timestamp_millis: i64,
    length: usize,
) -> String {
    // Pre-epoch clocks have no meaningful timestamp; pin them to zero.
    let timestamp = to_base36(u64::try_from(timestamp_millis).unwrap_or(0));

    let random = to_base62ish(random_block);
    format!("{random}{fingerprint}{timestamp}").chars().take(length).collect()
}
