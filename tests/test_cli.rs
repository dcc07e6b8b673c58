//! Tests for CLI argument parsing and the compiled binary

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use radixconv::cli::{Cli, Commands};
use radixconv::convert::Radix;

fn radixconv() -> Command {
    let mut cmd = Command::cargo_bin("radixconv").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_defaults_to_menu() {
    let cli = Cli::parse_from(["radixconv"]);

    assert!(cli.command.is_none());
    assert!(!cli.verbose, "Default verbose should be false");
    assert!(!cli.no_color, "Default no_color should be false");
}

#[test]
fn test_cli_convert_aliases() {
    let cli = Cli::parse_from(["radixconv", "convert", "--from", "hex", "--to", "2", "ff"]);

    assert_eq!(
        cli.command,
        Some(Commands::Convert {
            from: Radix::Hexadecimal,
            to: Radix::Binary,
            value: "ff".to_string(),
            json: false,
        })
    );
}

#[test]
fn test_cli_table_default_base() {
    let cli = Cli::parse_from(["radixconv", "table", "42", "--json", "-v"]);

    assert!(cli.verbose);
    assert_eq!(
        cli.command,
        Some(Commands::Table {
            from: Radix::Decimal,
            value: "42".to_string(),
            json: true,
        })
    );
}

#[test]
fn test_cli_rejects_unknown_base() {
    let result = Cli::try_parse_from(["radixconv", "convert", "-f", "3", "-t", "dec", "12"]);
    assert!(result.is_err());
}

#[test]
fn test_binary_convert() {
    radixconv()
        .args(["convert", "--from", "oct", "--to", "bin", "17"])
        .assert()
        .success()
        .stdout("1111\n");
}

#[test]
fn test_binary_convert_json() {
    radixconv()
        .args(["convert", "-f", "dec", "-t", "hex", "255", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output\": \"FF\""))
        .stdout(predicate::str::contains("\"decimal\": 255"));
}

#[test]
fn test_binary_convert_invalid_digit_fails() {
    radixconv()
        .args(["convert", "-f", "bin", "-t", "dec", "102"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid digit '2' for base 2"));
}

#[test]
fn test_binary_table() {
    radixconv()
        .args(["table", "--from", "hex", "ff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11111111"))
        .stdout(predicate::str::contains("377"))
        .stdout(predicate::str::contains("255"));
}

#[test]
fn test_binary_menu_session() {
    radixconv()
        .write_stdin("7\n111111\n12\nG\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter binary number: "))
        .stdout(predicate::str::contains("Octal equivalent: 77"))
        .stdout(predicate::str::contains("Exiting program."))
        .stderr(predicate::str::contains("Error: Invalid digit 'G' for base 16"));
}
