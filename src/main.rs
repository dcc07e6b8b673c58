//! Radixconv: Number System Converter CLI
//!
//! Without a subcommand, runs the interactive conversion menu on
//! stdin/stdout.

use std::io;

use anyhow::Result;
use clap::Parser;

use radixconv::cli::{run_convert, run_table, Cli, Commands, Shell};
use radixconv::utils::{disable_colors, init_logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        disable_colors();
    }

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let colors = console::colors_enabled() && console::colors_enabled_stderr();
            Shell::new(stdin.lock(), io::stdout(), io::stderr())
                .with_colors(colors)
                .run()
        }
        Commands::Convert {
            from,
            to,
            value,
            json,
        } => run_convert(&value, from, to, json),
        Commands::Table { from, value, json } => run_table(&value, from, json),
    }
}
