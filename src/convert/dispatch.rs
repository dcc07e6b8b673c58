//! The menu's conversion table and the parse-then-format pipeline

use serde::Serialize;

use super::{format, parse, ConvertError, Radix};

/// One wired conversion: a menu id and its source and target bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub id: u32,
    pub from: Radix,
    pub to: Radix,
}

/// The conversions offered by the interactive menu, in menu order.
pub static CONVERSIONS: [Conversion; 12] = [
    Conversion::new(1, Radix::Binary, Radix::Decimal),
    Conversion::new(2, Radix::Decimal, Radix::Binary),
    Conversion::new(3, Radix::Octal, Radix::Decimal),
    Conversion::new(4, Radix::Decimal, Radix::Octal),
    Conversion::new(5, Radix::Hexadecimal, Radix::Decimal),
    Conversion::new(6, Radix::Decimal, Radix::Hexadecimal),
    Conversion::new(7, Radix::Binary, Radix::Octal),
    Conversion::new(8, Radix::Octal, Radix::Binary),
    Conversion::new(9, Radix::Binary, Radix::Hexadecimal),
    Conversion::new(10, Radix::Hexadecimal, Radix::Binary),
    Conversion::new(11, Radix::Octal, Radix::Hexadecimal),
    Conversion::new(12, Radix::Hexadecimal, Radix::Octal),
];

/// Result of a conversion with its decimal intermediate, for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub from: Radix,
    pub to: Radix,
    pub decimal: i64,
    pub output: String,
}

impl Conversion {
    pub const fn new(id: u32, from: Radix, to: Radix) -> Self {
        Self { id, from, to }
    }

    /// Find the menu conversion with the given id.
    pub fn lookup(id: u32) -> Option<&'static Conversion> {
        CONVERSIONS.iter().find(|c| c.id == id)
    }

    /// Menu label, e.g. "Binary to Decimal".
    pub fn label(&self) -> String {
        format!("{} to {}", self.from.title(), self.to.title())
    }

    /// Decode `input` in the source base and re-encode it in the target base.
    ///
    /// A decoding failure is returned as-is; nothing is formatted.
    pub fn run(&self, input: &str) -> Result<String, ConvertError> {
        self.report(input).map(|report| report.output)
    }

    /// Like [`Conversion::run`], but keeps the input and decimal value.
    pub fn report(&self, input: &str) -> Result<ConversionReport, ConvertError> {
        tracing::debug!(id = self.id, label = %self.label(), "dispatching conversion");
        convert(input, self.from, self.to)
    }
}

/// Convert `input` between any two supported bases via its decimal value.
///
/// Unlike the menu table this accepts every ordered pair, including a base
/// converted to itself (which normalizes case and strips leading zeros).
pub fn convert(input: &str, from: Radix, to: Radix) -> Result<ConversionReport, ConvertError> {
    let decimal = parse(input, from)?;
    let output = format(decimal, to);

    Ok(ConversionReport {
        input: input.to_string(),
        from,
        to,
        decimal,
        output,
    })
}
