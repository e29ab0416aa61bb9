//! Best-effort machine fingerprint.
//!
//! The token only diversifies payloads between co-located generators. It
//! carries no security weight, so every introspection failure degrades to
//! a random token instead of an error.

use tracing::debug;

use super::radix::to_base36;
use crate::ports::{Entropy, HostInfo, NetworkAdapter};

/// Fingerprints are reduced into `[0, 2^20)`.
pub const FINGERPRINT_SPACE: u32 = 1 << 20;

const ZERO_MAC: &str = "00:00:00:00:00:00";

/// 32-bit rolling hash (`h = h * 31 + unit`) over UTF-16 code units.
#[must_use]
pub fn rolling_hash(text: &str) -> u32 {
    text.encode_utf16().fold(0u32, |hash, unit| hash.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// Derives the fingerprint token for the current machine.
///
/// Hashes `hostname-mac` using the first non-loopback adapter with a
/// non-zero hardware address, or the host name alone when there is none.
/// An unreadable host name counts as empty; a failed interface enumeration
/// yields a random token.
#[must_use]
pub fn machine_signature(host: &dyn HostInfo, entropy: &dyn Entropy) -> String {
    let hostname = host.hostname().unwrap_or_else(|err| {
        debug!(error = %err, "host name unavailable, fingerprinting without it");
        String::new()
    });

    let adapters = match host.adapters() {
        Ok(adapters) => adapters,
        Err(err) => {
            debug!(error = %err, "interface enumeration failed, using random fingerprint");
            return random_token(entropy);
        }
    };

    let key = match adapters.iter().find_map(usable_mac) {
        Some(mac) => format!("{hostname}-{mac}"),
        None => hostname,
    };
    to_base36(u64::from(rolling_hash(&key) % FINGERPRINT_SPACE))
}

fn usable_mac(adapter: &NetworkAdapter) -> Option<&str> {
    if adapter.loopback {
        return None;
    }
    adapter.mac.as_deref().filter(|mac| !mac.is_empty() && *mac != ZERO_MAC)
}

fn random_token(entropy: &dyn Entropy) -> String {
    let mut buf = [0u8; 4];
    entropy.fill_bytes(&mut buf);
    // 2^32 is a multiple of 2^20, so the reduction stays uniform.
    to_base36(u64::from(u32::from_be_bytes(buf) % FINGERPRINT_SPACE))
}
