//! CLI module - argument parsing, the interactive menu and one-shot commands

pub mod args;
pub mod oneshot;
pub mod shell;

pub use args::{Cli, Commands};
pub use oneshot::{render_convert, render_table, run_convert, run_table};
pub use shell::{MenuChoice, Shell, TokenReader};
