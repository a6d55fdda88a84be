//! # Business Identifier Validator
//!
//! Validates identifiers of the form `NNNNNNN-N`: seven base digits, a `-`
//! separator at index 7, and a check digit at index 8.
//!
//! ## Check order
//!
//! 1. Type gate. A non-text candidate yields exactly `[InvalidFormat]`.
//! 2. Format checks, each independent and always run:
//!    length minimum, length maximum, separator, character class.
//! 3. Checksum, only when step 2 recorded nothing.
//!
//! Lengths and indices count characters, not bytes.
//!
//! When the base leaves remainder 1 the expected digit stays at the
//! placeholder value 1 and is still compared, so `CheckNumBaseInvalid` and
//! `CheckNumMismatch` can both be reported for the same input.

use crate::candidate::Candidate;
use crate::checksum::{self, BASE_LEN};
use crate::reason::FailureReason;
use crate::result::ValidationResult;
use crate::specification::Specification;

/// Exact length of a well-formed identifier.
pub const IDENTIFIER_LEN: usize = 9;

/// Index of the `-` separator.
pub const SEPARATOR_INDEX: usize = 7;

/// Index of the check digit.
pub const CHECK_DIGIT_INDEX: usize = 8;

/// The separator character.
pub const SEPARATOR: char = '-';

/// Validate a candidate, reporting every reason it fails.
///
/// Never panics; every input yields a well-formed result.
pub fn validate<'a>(candidate: impl Into<Candidate<'a>>) -> ValidationResult {
    let candidate = candidate.into();
    let mut reasons = Vec::new();

    match candidate.as_text() {
        None => {
            reasons.push(FailureReason::InvalidFormat);
        }
        Some(s) => {
            let len = s.chars().count();
            check_min_length(len, &mut reasons);
            check_max_length(len, &mut reasons);
            check_separator(s, &mut reasons);
            check_characters(s, &mut reasons);

            if reasons.is_empty() {
                check_checksum(s, &mut reasons);
            }
        }
    }

    let result = ValidationResult::from_reasons(reasons);
    tracing::debug!(
        candidate = ?candidate,
        valid = result.is_valid(),
        reasons = result.reasons().len(),
        "validated business identifier"
    );
    result
}

fn check_min_length(len: usize, reasons: &mut Vec<FailureReason>) {
    if len < IDENTIFIER_LEN {
        tracing::trace!(len, "identifier too short");
        reasons.push(FailureReason::TooShort);
    }
}

fn check_max_length(len: usize, reasons: &mut Vec<FailureReason>) {
    if len > IDENTIFIER_LEN {
        tracing::trace!(len, "identifier too long");
        reasons.push(FailureReason::TooLong);
    }
}

fn check_separator(s: &str, reasons: &mut Vec<FailureReason>) {
    if s.chars().nth(SEPARATOR_INDEX) != Some(SEPARATOR) {
        tracing::trace!("separator missing at index {SEPARATOR_INDEX}");
        reasons.push(FailureReason::InvalidSeparator);
    }
}

fn check_characters(s: &str, reasons: &mut Vec<FailureReason>) {
    for (position, character) in s.chars().enumerate() {
        if position != SEPARATOR_INDEX && !character.is_ascii_digit() {
            tracing::trace!(position, %character, "invalid character");
            reasons.push(FailureReason::InvalidCharacter {
                position,
                character,
            });
        }
    }
}

/// Runs only after the format checks passed: `s` is nine ASCII characters
/// with digits everywhere except the separator.
fn check_checksum(s: &str, reasons: &mut Vec<FailureReason>) {
    let base = s.get(..BASE_LEN).and_then(checksum::parse_base);
    let stored = s
        .chars()
        .nth(CHECK_DIGIT_INDEX)
        .and_then(|c| c.to_digit(10));
    let (Some(base), Some(stored)) = (base, stored) else {
        return;
    };

    let r = checksum::remainder(&base);
    let expected = match checksum::check_digit_for_remainder(r) {
        Some(digit) => u32::from(digit),
        None => {
            tracing::trace!(remainder = r, "identifier base has no check digit");
            reasons.push(FailureReason::CheckNumBaseInvalid);
            r
        }
    };

    if expected != stored {
        tracing::trace!(expected, stored, "check digit mismatch");
        reasons.push(FailureReason::CheckNumMismatch);
    }
}

/// Stateless validator usable through the [`Specification`] seam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusinessIdValidator;

impl BusinessIdValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate any candidate. Equivalent to [`validate`].
    pub fn validate<'a>(&self, candidate: impl Into<Candidate<'a>>) -> ValidationResult {
        validate(candidate)
    }
}

impl Specification<str> for BusinessIdValidator {
    fn evaluate(&self, entity: &str) -> ValidationResult {
        validate(entity)
    }
}

impl Specification<serde_json::Value> for BusinessIdValidator {
    fn evaluate(&self, entity: &serde_json::Value) -> ValidationResult {
        validate(entity)
    }
}
