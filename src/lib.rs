//! Radixconv: Number System Conversion Library
//!
//! Converts digit-strings between binary, octal, decimal and hexadecimal
//! through a decimal intermediate value, and drives an interactive menu of
//! the supported conversions.

pub mod cli;
pub mod convert;
pub mod report;
pub mod utils;
