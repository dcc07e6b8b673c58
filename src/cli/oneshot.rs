//! Non-interactive conversion commands

use anyhow::{Context, Result};

use crate::convert::{convert, ConversionReport, Radix};
use crate::report::{radix_table, to_json};

/// Convert `value` from one base to another and render the result.
///
/// The plain form is just the converted digit-string; `json` renders the full
/// [`ConversionReport`].
pub fn render_convert(value: &str, from: Radix, to: Radix, json: bool) -> Result<String> {
    let report = convert(value, from, to)
        .with_context(|| format!("Failed to convert '{}' from base {}", value, from))?;

    if json {
        to_json(&report)
    } else {
        Ok(report.output)
    }
}

/// Render `value` in every supported base, as a table or a JSON array.
pub fn render_table(value: &str, from: Radix, json: bool) -> Result<String> {
    let reports = Radix::ALL
        .into_iter()
        .map(|to| convert(value, from, to))
        .collect::<Result<Vec<ConversionReport>, _>>()
        .with_context(|| format!("Failed to convert '{}' from base {}", value, from))?;

    if json {
        to_json(&reports)
    } else {
        Ok(radix_table(&reports).to_string())
    }
}

/// Run the `convert` subcommand.
pub fn run_convert(value: &str, from: Radix, to: Radix, json: bool) -> Result<()> {
    println!("{}", render_convert(value, from, to, json)?);
    Ok(())
}

/// Run the `table` subcommand.
pub fn run_table(value: &str, from: Radix, json: bool) -> Result<()> {
    let rendered = render_table(value, from, json)?;
    if !json {
        crate::utils::print_section_header(&format!("{} ({})", value, from.name()));
    }
    println!("{}", rendered);
    Ok(())
}
