//! # bizid-cli — Business Identifier Command-Line Interface
//!
//! ## Subcommands
//!
//! - `check` — validate one identifier
//! - `test` — run the self-test table
//! - `shell` — interactive prompt
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers take their
//!   input and output streams as parameters.
//! - Validation logic lives in `bizid-core`; nothing here re-implements it.
//! - Handlers return the process exit code; `main` maps errors to code 2.

pub mod check;
pub mod config;
pub mod output;
pub mod selftest;
pub mod shell;
