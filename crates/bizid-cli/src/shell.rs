//! # Interactive Prompt
//!
//! Reads identifiers line by line and prints a verdict for each.
//! An empty line or end of input exits; `test` (any case) runs the
//! self-test table.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use bizid_core::validate;

use crate::config::Settings;
use crate::output::get_formatter;
use crate::selftest::{builtin_cases, run_self_test};

/// Prompt printed before every read.
pub const PROMPT: &str = "Type business id (enter to exit, 'test' to run the test set): ";

/// Arguments for the shell subcommand.
#[derive(Args, Debug, Default)]
pub struct ShellArgs {}

/// Run the prompt loop until an empty line or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    _args: &ShellArgs,
    settings: &Settings,
    mut input: R,
    out: &mut W,
) -> Result<u8> {
    let formatter = get_formatter(settings.format, settings.color);
    let mut cases = builtin_cases();
    cases.extend_from_slice(&settings.extra_cases);

    let mut line = String::new();
    loop {
        writeln!(out, "\n\n{PROMPT}").context("writing prompt")?;
        out.flush().context("flushing prompt")?;

        line.clear();
        let read = input.read_line(&mut line).context("reading input")?;
        let entry = line.trim_end_matches(['\r', '\n']);

        if read == 0 || entry.is_empty() {
            tracing::debug!("leaving interactive prompt");
            return Ok(0);
        }

        let rendered = if entry.eq_ignore_ascii_case("test") {
            formatter.format_self_test(&run_self_test(&cases))?
        } else {
            formatter.format_result(entry, &validate(entry))?
        };
        writeln!(out, "{}", rendered.trim_end()).context("writing result")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> String {
        let settings = Settings {
            color: false,
            ..Settings::default()
        };
        let mut out = Vec::new();
        let code = run_shell(&ShellArgs::default(), &settings, Cursor::new(input), &mut out).unwrap();
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_line_exits() {
        let out = session("\n2471384-9\n");
        assert_eq!(out.matches(PROMPT).count(), 1);
        assert!(!out.contains("Id OK"));
    }

    #[test]
    fn eof_exits() {
        let out = session("");
        assert_eq!(out.matches(PROMPT).count(), 1);
    }

    #[test]
    fn validates_each_line() {
        let out = session("2471384-9\n2471385-9\n\n");
        assert!(out.contains("Id OK"));
        assert!(out.contains("Checknum does not match identifier base"));
        assert_eq!(out.matches(PROMPT).count(), 3);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let out = session("1572860-0\r\n\r\n");
        assert!(out.contains("Id OK"));
    }

    #[test]
    fn test_command_runs_table() {
        let out = session("TeSt\n\n");
        assert!(out.contains("PASSED"));
        assert!(!out.contains("FAILED"));
        assert!(out.contains("11 passed, 0 failed"));
    }

    #[test]
    fn last_line_without_newline_is_validated() {
        let out = session("2471384-9");
        assert!(out.contains("Id OK"));
    }
}
