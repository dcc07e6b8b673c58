//! Terminal styling helpers

use console::{style, Emoji, StyledObject};

// Emoji icons with fallbacks for terminals that don't support them
pub static NUMBERS: Emoji<'_, '_> = Emoji("🔢 ", "");

/// Menu heading, bold cyan when `colors` is set.
pub fn menu_title(title: &str, colors: bool) -> StyledObject<&str> {
    style(title).cyan().bold().force_styling(colors)
}

/// The "Error:" prefix for error messages, bold red when `colors` is set.
pub fn error_label(colors: bool) -> StyledObject<&'static str> {
    style("Error:").red().bold().force_styling(colors)
}

/// Print a section header with styling
pub fn print_section_header(title: &str) {
    println!();
    println!(
        "    {}{}",
        NUMBERS,
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Turn off ANSI styling on both output streams.
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}
