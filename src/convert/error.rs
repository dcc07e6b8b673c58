//! Error types for base conversion.

use thiserror::Error;

use super::Radix;

/// Errors that can occur when decoding a digit-string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A character does not map to a digit of the stated base.
    ///
    /// Covers characters outside the digit alphabet entirely (`'G'` in
    /// hexadecimal, `'x'` in decimal) as well as digits that are valid
    /// elsewhere but too large for this base (`'2'` in binary).
    #[error("Invalid digit '{digit}' for base {radix}")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// The base the input was expected to be in
        radix: Radix,
    },

    /// The decoded value does not fit in a signed 64-bit integer.
    #[error("Value exceeds the supported range for base {radix}")]
    Overflow {
        /// The base the input was expected to be in
        radix: Radix,
    },
}
