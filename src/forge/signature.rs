//! Keyed signature appended to every payload.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Hex characters kept from the HMAC digest.
pub const SIGNATURE_LEN: usize = 10;

type HmacSha256 = Hmac<Sha256>;

/// First [`SIGNATURE_LEN`] lowercase hex characters of
/// HMAC-SHA256(`secret`, `payload`).
#[must_use]
pub fn sign(payload: &str, secret: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(payload.as_bytes());
    let mut digest = hex::encode(mac.finalize().into_bytes());
    digest.truncate(SIGNATURE_LEN);
    digest
}

/// Checks an alphanumeric `payload + signature` body.
///
/// The trailing signature compares case-insensitively. Bodies without room
/// for at least one payload character are rejected.
#[must_use]
pub fn verify_body(body: &str, secret: &[u8]) -> bool {
    if !body.is_ascii() || body.len() <= SIGNATURE_LEN {
        return false;
    }
    let (content, given) = body.split_at(body.len() - SIGNATURE_LEN);
    let expected = sign(content, secret);
    expected.as_bytes().ct_eq(given.to_ascii_lowercase().as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_digests() {
        assert_eq!(sign("abc123XYZ", b"unit-test-secret"), "c7d5a3adc3");
        assert_eq!(sign("hello", b"forgeid-secret"), "757621c1e2");
        assert_eq!(sign("x", b""), "4cbc96099a");
    }

    #[test]
    fn deterministic_and_key_dependent() {
        assert_eq!(sign("payload", b"k1"), sign("payload", b"k1"));
        assert_ne!(sign("payload", b"k1"), sign("payload", b"k2"));
    }

    #[test]
    fn verifies_signed_body_in_any_case() {
        let body = format!("abc123XYZ{}", "C7D5A3ADC3");
        assert!(verify_body(&body, b"unit-test-secret"));
        assert!(verify_body("abc123XYZc7d5a3adc3", b"unit-test-secret"));
        assert!(!verify_body("abc123XYZc7d5a3adc3", b"other-secret"));
    }

    #[test]
    fn rejects_bodies_without_payload() {
        assert!(!verify_body("", b"k"));
        assert!(!verify_body("c7d5a3adc3", b"unit-test-secret"));
    }

    #[test]
    fn rejects_non_ascii_without_panicking() {
        assert!(!verify_body("ééééééééééé", b"k"));
    }
}
