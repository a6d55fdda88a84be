//! # Self-Test Table
//!
//! A fixed table of identifiers with their expected verdicts, used as a
//! quick regression check from the command line (`bizid test`) and from
//! the interactive prompt (`test`). Extra cases can be appended through
//! the config file.

use clap::Args;
use serde::{Deserialize, Serialize};

use bizid_core::{validate, ValidationResult};

/// Built-in cases: `(input, expect_valid)`.
pub const BUILTIN_CASES: &[(&str, bool)] = &[
    // too short
    ("1", false),
    // too long
    ("24713849XX", false),
    // too short, missing separator
    ("24713849", false),
    // check digit does not match
    ("2471385-9", false),
    ("2471384-8", false),
    // wrong character
    ("2471A84-9", false),
    ("a4b1C8D-E", false),
    // stored check digit 1
    ("2471384-1", false),
    // weighted sum mod 11 is 1
    ("1001000-9", false),
    // real identifier
    ("2471384-9", true),
    // check digit zero
    ("1572860-0", true),
];

/// Arguments for the test subcommand.
#[derive(Args, Debug, Default)]
pub struct TestArgs {
    /// Skip the built-in table and run only configured cases.
    #[arg(long)]
    pub configured_only: bool,
}

/// One self-test row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelfTestCase {
    pub input: String,
    pub expect_valid: bool,
}

/// The built-in table as owned cases.
pub fn builtin_cases() -> Vec<SelfTestCase> {
    BUILTIN_CASES
        .iter()
        .map(|(input, expect_valid)| SelfTestCase {
            input: (*input).to_string(),
            expect_valid: *expect_valid,
        })
        .collect()
}

/// Outcome of one case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub input: String,
    pub expect_valid: bool,
    pub passed: bool,
    pub result: ValidationResult,
}

/// Outcome of a whole table run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelfTestReport {
    pub cases: Vec<CaseOutcome>,
}

impl SelfTestReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|c| c.passed)
    }
}

/// Validate every case and compare against its expected verdict.
pub fn run_self_test(cases: &[SelfTestCase]) -> SelfTestReport {
    let cases: Vec<CaseOutcome> = cases
        .iter()
        .map(|case| {
            let result = validate(case.input.as_str());
            let passed = result.is_valid() == case.expect_valid;
            if !passed {
                tracing::warn!(input = %case.input, expect_valid = case.expect_valid, "self-test case failed");
            }
            CaseOutcome {
                input: case.input.clone(),
                expect_valid: case.expect_valid,
                passed,
                result,
            }
        })
        .collect();

    let report = SelfTestReport { cases };
    tracing::info!(
        total = report.cases.len(),
        passed = report.passed(),
        "self-test finished"
    );
    report
}

/// Assemble the cases to run for the given arguments and configured extras.
pub fn select_cases(args: &TestArgs, extra: &[SelfTestCase]) -> Vec<SelfTestCase> {
    let mut cases = if args.configured_only {
        Vec::new()
    } else {
        builtin_cases()
    };
    cases.extend_from_slice(extra);
    cases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_passes() {
        let report = run_self_test(&builtin_cases());
        assert_eq!(report.cases.len(), BUILTIN_CASES.len());
        assert!(report.all_passed(), "{report:?}");
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn wrong_expectation_fails() {
        let cases = vec![SelfTestCase {
            input: "2471384-9".to_string(),
            expect_valid: false,
        }];
        let report = run_self_test(&cases);
        assert!(!report.all_passed());
        assert_eq!(report.failed(), 1);
        assert!(report.cases[0].result.is_valid());
    }

    #[test]
    fn extras_are_appended() {
        let extra = vec![SelfTestCase {
            input: "0737546-2".to_string(),
            expect_valid: true,
        }];
        let cases = select_cases(&TestArgs::default(), &extra);
        assert_eq!(cases.len(), BUILTIN_CASES.len() + 1);
        assert_eq!(cases.last(), extra.last());
    }

    #[test]
    fn configured_only_skips_builtins() {
        let args = TestArgs {
            configured_only: true,
        };
        assert!(select_cases(&args, &[]).is_empty());
    }

    #[test]
    fn empty_run_passes_vacuously() {
        let report = run_self_test(&[]);
        assert!(report.all_passed());
        assert_eq!(report.passed(), 0);
    }
}
