//! Text encodings used to build payload segments.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encodes `value` in lowercase base 36 with no leading zeros.
#[must_use]
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        // `value % 36` always fits an index into the digit table.
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Standard base64 with every non-alphanumeric character removed.
///
/// The output length varies with the input: `+`, `/` and padding are
/// dropped rather than substituted.
#[must_use]
pub fn to_base62ish(bytes: &[u8]) -> String {
    strip_non_alphanumeric(&STANDARD.encode(bytes))
}

/// Keeps only ASCII letters and digits.
#[must_use]
pub fn strip_non_alphanumeric(text: &str) -> String {
    text.chars().filter(char::is_ascii_alphanumeric).collect()
}
