//! # bizid CLI entry point
//!
//! Parses command-line arguments, initialises tracing, layers the
//! configuration and dispatches to subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bizid_cli::check::{run_check, CheckArgs};
use bizid_cli::config::{no_color_from_env, ConfigFile, OutputFormat, Settings};
use bizid_cli::output::get_formatter;
use bizid_cli::selftest::{run_self_test, select_cases, TestArgs};
use bizid_cli::shell::{run_shell, ShellArgs};

/// Business identifier validator.
///
/// Checks identifiers of the form NNNNNNN-N (seven digits, separator,
/// check digit) and reports every reason an identifier is rejected.
#[derive(Parser, Debug)]
#[command(name = "bizid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true, env = "BIZID_FORMAT")]
    format: Option<OutputFormat>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single business identifier.
    Check(CheckArgs),

    /// Run the built-in self-test table.
    Test(TestArgs),

    /// Interactive prompt: validate identifiers line by line.
    Shell(ShellArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!("bizid CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// `RUST_LOG` wins over the verbosity flag when set.
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: Cli) -> Result<u8> {
    let file = cli.config.as_deref().map(ConfigFile::load).transpose()?;
    let settings = Settings::resolve(cli.format, cli.no_color, no_color_from_env(), file);
    tracing::debug!(?settings, "resolved settings");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Check(args) => run_check(&args, &settings, &mut out),
        Commands::Test(args) => {
            let cases = select_cases(&args, &settings.extra_cases);
            let report = run_self_test(&cases);
            let rendered =
                get_formatter(settings.format, settings.color).format_self_test(&report)?;
            writeln!(out, "{}", rendered.trim_end())?;
            Ok(if report.all_passed() { 0 } else { 1 })
        }
        Commands::Shell(args) => {
            let stdin = std::io::stdin();
            run_shell(&args, &settings, stdin.lock(), &mut out)
        }
    }
}
