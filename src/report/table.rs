//! Tabular display of a value in several bases

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};

use crate::convert::ConversionReport;

/// Build a table with one row per report: base name, radix, representation.
///
/// The row whose target base matches the input base is highlighted.
pub fn radix_table(reports: &[ConversionReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    if !console::colors_enabled() {
        table.force_no_tty();
    }
    table.set_header(vec![
        Cell::new("Base").add_attribute(Attribute::Bold),
        Cell::new("Radix").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    for report in reports {
        let value = if report.to == report.from {
            Cell::new(&report.output)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&report.output).fg(Color::Yellow)
        };

        table.add_row(vec![
            Cell::new(report.to.title()),
            Cell::new(report.to.value()),
            value,
        ]);
    }

    table
}
