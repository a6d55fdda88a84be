//! # Check Subcommand
//!
//! Validates a single identifier and prints the verdict.
//!
//! ```bash
//! bizid check 2471384-9
//! bizid --format json check 2471A84-9
//! # Treat the argument as a JSON literal; non-strings fail the type gate.
//! bizid check --json-literal 24713849
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use bizid_core::validate;

use crate::config::Settings;
use crate::output::get_formatter;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The identifier to validate.
    pub identifier: String,

    /// Parse the argument as a JSON literal instead of taking it as text.
    #[arg(long)]
    pub json_literal: bool,
}

/// Execute the check subcommand. Returns 0 if the identifier is valid, 1 otherwise.
pub fn run_check(args: &CheckArgs, settings: &Settings, out: &mut impl Write) -> Result<u8> {
    let result = if args.json_literal {
        let value: Value = serde_json::from_str(&args.identifier)
            .with_context(|| format!("parsing JSON literal: {}", args.identifier))?;
        validate(&value)
    } else {
        validate(args.identifier.as_str())
    };

    let rendered = get_formatter(settings.format, settings.color)
        .format_result(&args.identifier, &result)?;
    writeln!(out, "{}", rendered.trim_end()).context("writing result")?;

    Ok(if result.is_valid() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn plain() -> Settings {
        Settings {
            color: false,
            ..Settings::default()
        }
    }

    fn run(identifier: &str, json_literal: bool, settings: &Settings) -> (u8, String) {
        let args = CheckArgs {
            identifier: identifier.to_string(),
            json_literal,
        };
        let mut buf = Vec::new();
        let code = run_check(&args, settings, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn valid_identifier_exits_zero() {
        let (code, out) = run("2471384-9", false, &plain());
        assert_eq!(code, 0);
        assert_eq!(out, "Id OK\n");
    }

    #[test]
    fn invalid_identifier_exits_one() {
        let (code, out) = run("2471A84-9", false, &plain());
        assert_eq!(code, 1);
        assert!(out.contains("Invalid character A"));
    }

    #[test]
    fn json_literal_number_is_invalid_format() {
        let (code, out) = run("24713849", true, &plain());
        assert_eq!(code, 1);
        assert!(out.contains("Invalid format - not string"));
    }

    #[test]
    fn json_literal_string_is_validated_as_text() {
        let (code, _) = run("\"1572860-0\"", true, &plain());
        assert_eq!(code, 0);
    }

    #[test]
    fn malformed_json_literal_is_an_error() {
        let args = CheckArgs {
            identifier: "{not json".to_string(),
            json_literal: true,
        };
        let mut buf = Vec::new();
        assert!(run_check(&args, &plain(), &mut buf).is_err());
    }

    #[test]
    fn json_output() {
        let settings = Settings {
            format: OutputFormat::Json,
            ..plain()
        };
        let (code, out) = run("1001000-9", false, &settings);
        assert_eq!(code, 1);
        let value: Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["reasons"].as_array().unwrap().len(), 2);
    }
}
