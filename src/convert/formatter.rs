//! Digit-string encoding (decimal to any supported base)

use super::Radix;

/// Display characters for digit values 0-15.
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode `value` as a digit-string in `radix`.
///
/// Hexadecimal output uses upper-case letters. Zero is `"0"`; no other value
/// has leading zeros. Values are expected to be non-negative.
pub fn format(value: i64, radix: Radix) -> String {
    debug_assert!(value >= 0, "cannot format negative value {}", value);

    if value == 0 {
        return "0".to_string();
    }

    let base = u64::from(radix.value());
    let mut remaining = value.unsigned_abs();
    let mut digits = Vec::new();

    while remaining > 0 {
        digits.push(DIGITS[(remaining % base) as usize]);
        remaining /= base;
    }

    // Produced least significant first
    digits.reverse();
    let result: String = digits.into_iter().map(char::from).collect();

    tracing::debug!(value, base, %result, "encoded decimal value");
    result
}
