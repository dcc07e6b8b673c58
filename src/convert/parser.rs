//! Digit-string decoding (any supported base to decimal)

use super::{ConvertError, Radix};

/// Decode `input` as a number written in `radix`.
///
/// Characters are consumed from least significant (rightmost) to most
/// significant, each contributing `digit * base^position`. Hexadecimal digits
/// are case-insensitive. An empty string decodes to `0`.
///
/// # Errors
/// * [`ConvertError::InvalidDigit`] for the first character (scanning right to
///   left) that is not a digit of `radix`
/// * [`ConvertError::Overflow`] when the value does not fit in an `i64`
pub fn parse(input: &str, radix: Radix) -> Result<i64, ConvertError> {
    let base = i64::from(radix.value());
    let mut decimal: i64 = 0;
    // Weight of the current position, None once it no longer fits in i64.
    // Zero digits at such positions are still fine (leading zeros).
    let mut power = Some(1i64);

    for c in input.chars().rev() {
        let digit = digit_value(c, radix).ok_or(ConvertError::InvalidDigit { digit: c, radix })?;

        if digit != 0 {
            decimal = power
                .and_then(|p| p.checked_mul(digit))
                .and_then(|term| decimal.checked_add(term))
                .ok_or(ConvertError::Overflow { radix })?;
        }
        power = power.and_then(|p| p.checked_mul(base));
    }

    tracing::debug!(input, base, decimal, "decoded digit-string");
    Ok(decimal)
}

/// Value of a single character in `radix`, or `None` if it is not a digit of
/// that base.
pub fn digit_value(c: char, radix: Radix) -> Option<i64> {
    let digit = match radix {
        Radix::Hexadecimal => hex_digit(c)?,
        _ => i64::from(u32::from(c)) - i64::from(u32::from('0')),
    };

    (0..i64::from(radix.value()))
        .contains(&digit)
        .then_some(digit)
}

fn hex_digit(c: char) -> Option<i64> {
    let value = match c {
        '0'..='9' => u32::from(c) - u32::from('0'),
        'a'..='f' => u32::from(c) - u32::from('a') + 10,
        'A'..='F' => u32::from(c) - u32::from('A') + 10,
        _ => return None,
    };
    Some(i64::from(value))
}
