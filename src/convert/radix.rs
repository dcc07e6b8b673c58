//! Supported numeral bases

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// A positional numeral base the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    #[value(alias = "bin", alias = "2")]
    Binary,
    #[value(alias = "oct", alias = "8")]
    Octal,
    #[value(alias = "dec", alias = "10")]
    Decimal,
    #[value(alias = "hex", alias = "16")]
    Hexadecimal,
}

impl Radix {
    /// Every supported base, smallest first.
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
    ];

    /// Numeric value of the base.
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Lowercase name used in input prompts ("Enter binary number: ").
    pub const fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        }
    }

    /// Capitalized name used in menu entries and result lines.
    pub const fn title(self) -> &'static str {
        match self {
            Radix::Binary => "Binary",
            Radix::Octal => "Octal",
            Radix::Decimal => "Decimal",
            Radix::Hexadecimal => "Hexadecimal",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
