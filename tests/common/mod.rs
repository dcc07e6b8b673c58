//! Shared test utilities

use radixconv::cli::Shell;

/// Transcript of one interactive session.
pub struct Session {
    pub stdout: String,
    pub stderr: String,
}

/// Drive the interactive shell with `input` and capture both streams.
pub fn run_session(input: &str) -> Session {
    run_session_with_colors(input, false)
}

/// Like [`run_session`], with ANSI styling switched on or off explicitly.
pub fn run_session_with_colors(input: &str, colors: bool) -> Session {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    Shell::new(input.as_bytes(), &mut stdout, &mut stderr)
        .with_colors(colors)
        .run()
        .expect("shell session should not fail on in-memory I/O");

    Session {
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

/// Result reports in `text`, starting at "<Name> equivalent: ".
///
/// Prompts are written without a newline, so a result shares its line with
/// the prompts before it; everything up to the result's label is dropped.
pub fn result_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter_map(|line| {
            let marker = line.find(" equivalent: ")?;
            let start = line[..marker].rfind(' ').map_or(0, |space| space + 1);
            Some(&line[start..])
        })
        .collect()
}
