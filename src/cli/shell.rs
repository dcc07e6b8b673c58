//! Interactive menu loop
//!
//! The shell reads whitespace-delimited tokens the way a stream extractor
//! would: a line holding several tokens feeds several successive prompts.
//! All I/O goes through generic readers and writers so a whole session can
//! be driven from byte buffers.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::convert::{Conversion, CONVERSIONS};
use crate::utils::{error_label, menu_title};

/// What a menu token asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Convert(&'static Conversion),
    Invalid,
}

impl MenuChoice {
    /// Interpret a menu token. Anything that is not `0` or a wired
    /// conversion id (including non-numeric text) is `Invalid`.
    pub fn from_token(token: &str) -> MenuChoice {
        match token.parse::<u32>() {
            Ok(0) => MenuChoice::Exit,
            Ok(id) => Conversion::lookup(id).map_or(MenuChoice::Invalid, MenuChoice::Convert),
            Err(_) => MenuChoice::Invalid,
        }
    }
}

/// Splits buffered input into whitespace-delimited tokens on demand.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read from input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// The menu-driven conversion loop.
pub struct Shell<R, W, E> {
    input: TokenReader<R>,
    out: W,
    err: E,
    colors: bool,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            err,
            colors: false,
        }
    }

    /// Enable ANSI styling of the menu title and error label. Off by default,
    /// since the writers need not be a terminal.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Run until the user picks exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(token) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("input closed at menu prompt");
                return Ok(());
            };

            match MenuChoice::from_token(&token) {
                MenuChoice::Exit => {
                    writeln!(self.out, "Exiting program.")?;
                    return Ok(());
                }
                MenuChoice::Convert(conversion) => {
                    if !self.perform(conversion)? {
                        tracing::debug!("input closed at number prompt");
                        return Ok(());
                    }
                }
                MenuChoice::Invalid => {
                    tracing::debug!(%token, "invalid menu choice");
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    /// Print the numbered menu.
    pub fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", menu_title("Number System Converter", self.colors))?;
        writeln!(self.out, "{}", "-".repeat(23))?;
        for conversion in &CONVERSIONS {
            writeln!(self.out, "{}. {}", conversion.id, conversion.label())?;
        }
        writeln!(self.out, "0. Exit")?;
        Ok(())
    }

    /// Prompt for and run one conversion. Returns `false` if input ended
    /// before a number was entered.
    fn perform(&mut self, conversion: &Conversion) -> Result<bool> {
        let prompt = format!("Enter {} number: ", conversion.from.name());
        let Some(raw) = self.prompt(&prompt)? else {
            return Ok(false);
        };

        match conversion.run(&raw) {
            Ok(result) => {
                writeln!(self.out, "{} equivalent: {}", conversion.to.title(), result)?;
            }
            Err(e) => {
                // No result line for a failed conversion
                writeln!(self.err, "{} {}", error_label(self.colors), e)?;
                self.err.flush()?;
            }
        }
        Ok(true)
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush().context("Failed to flush output")?;
        self.input.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Radix;

    #[test]
    fn test_menu_choice_exit() {
        assert_eq!(MenuChoice::from_token("0"), MenuChoice::Exit);
    }

    #[test]
    fn test_menu_choice_conversion() {
        match MenuChoice::from_token("10") {
            MenuChoice::Convert(c) => {
                assert_eq!(c.from, Radix::Hexadecimal);
                assert_eq!(c.to, Radix::Binary);
            }
            other => panic!("expected a conversion, got {:?}", other),
        }
    }

    #[test]
    fn test_menu_choice_invalid() {
        assert_eq!(MenuChoice::from_token("13"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::from_token("-1"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::from_token("abc"), MenuChoice::Invalid);
    }

    #[test]
    fn test_token_reader_splits_lines() {
        let mut reader = TokenReader::new("1 1010\n\n  6\t255  \n".as_bytes());
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("1010"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("6"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("255"));
        assert_eq!(reader.next_token().unwrap(), None);
    }
}
