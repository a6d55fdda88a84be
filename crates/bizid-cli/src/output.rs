//! # Output Formatting
//!
//! Text and JSON renderers for single results and self-test reports.
//! Text output uses ANSI colors when enabled: green for accepted
//! identifiers and passing cases, red for rejections and failures.

use anyhow::{Context, Result};
use serde::Serialize;

use bizid_core::ValidationResult;

use crate::config::OutputFormat;
use crate::selftest::SelfTestReport;

/// Renders results for the terminal or for machines.
pub trait ResultFormatter {
    /// Render the verdict for one input.
    fn format_result(&self, input: &str, result: &ValidationResult) -> Result<String>;

    /// Render a self-test run.
    fn format_self_test(&self, report: &SelfTestReport) -> Result<String>;
}

/// Human-readable formatter.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{color_code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn bold(&self, text: &str) -> String {
        self.colorize(text, "1")
    }

    fn verdict(&self, result: &ValidationResult) -> String {
        let mut out = String::new();
        if result.is_valid() {
            out.push_str(&self.green("Id OK"));
            out.push('\n');
        } else {
            out.push_str(&self.red("Id not OK, reasons: "));
            out.push('\n');
            for reason in result.reasons() {
                out.push_str(&reason.to_string());
                out.push('\n');
            }
        }
        out
    }
}

impl ResultFormatter for TextFormatter {
    fn format_result(&self, _input: &str, result: &ValidationResult) -> Result<String> {
        Ok(self.verdict(result))
    }

    fn format_self_test(&self, report: &SelfTestReport) -> Result<String> {
        let mut out = String::new();
        for case in &report.cases {
            out.push('\n');
            out.push_str(&self.bold(&format!("{}: ", case.input)));
            out.push_str(&self.verdict(&case.result));
            if case.passed {
                out.push_str(&self.green("PASSED"));
            } else {
                out.push_str(&self.red("FAILED"));
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "\n{} passed, {} failed\n",
            report.passed(),
            report.failed()
        ));
        Ok(out)
    }
}

#[derive(Serialize)]
struct ResultDocument<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

#[derive(Serialize)]
struct SelfTestDocument<'a> {
    passed: usize,
    failed: usize,
    #[serde(flatten)]
    report: &'a SelfTestReport,
}

/// JSON formatter: one compact document per call.
pub struct JsonFormatter;

impl ResultFormatter for JsonFormatter {
    fn format_result(&self, input: &str, result: &ValidationResult) -> Result<String> {
        let doc = ResultDocument { input, result };
        serde_json::to_string(&doc).context("serializing validation result")
    }

    fn format_self_test(&self, report: &SelfTestReport) -> Result<String> {
        let doc = SelfTestDocument {
            passed: report.passed(),
            failed: report.failed(),
            report,
        };
        serde_json::to_string(&doc).context("serializing self-test report")
    }
}

/// Pick a formatter for the configured output.
pub fn get_formatter(format: OutputFormat, color: bool) -> Box<dyn ResultFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
