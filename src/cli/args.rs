//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};

use crate::convert::Radix;

/// Radixconv - Convert numbers between binary, octal, decimal and hexadecimal
#[derive(Parser, Debug)]
#[command(name = "radixconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Emit debug-level logs to stderr
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive conversion menu (default when no command is given)
    Menu,

    /// Convert a single value and print the result
    Convert {
        /// Base of the input value (binary/bin/2, octal/oct/8, decimal/dec/10, hexadecimal/hex/16)
        #[arg(short, long, value_enum)]
        from: Radix,

        /// Base to convert into
        #[arg(short, long, value_enum)]
        to: Radix,

        /// The digit-string to convert
        value: String,

        /// Print a JSON report including the decimal intermediate
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Show a value in every supported base
    Table {
        /// Base of the input value
        #[arg(short, long, value_enum, default_value_t = Radix::Decimal)]
        from: Radix,

        /// The digit-string to convert
        value: String,

        /// Print a JSON array instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },
}
