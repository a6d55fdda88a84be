//! # Error Types
//!
//! Validation itself never errors: every defect of a candidate is reported
//! as a [`FailureReason`](crate::FailureReason) inside a
//! [`ValidationResult`](crate::ValidationResult). The errors here belong to
//! the fallible constructors layered on top of the validator, namely
//! [`BusinessId::new`](crate::BusinessId::new),
//! [`BusinessId::from_base`](crate::BusinessId::from_base) and
//! [`check_digit`](crate::check_digit).

use thiserror::Error;

use crate::reason::FailureReason;

/// Error returned when constructing identifiers or computing check digits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier failed validation.
    #[error("invalid business identifier {value:?}: {}", join_reasons(.reasons))]
    Invalid {
        /// The rejected input.
        value: String,
        /// Every reason the input was rejected, in check order.
        reasons: Vec<FailureReason>,
    },

    /// The base is not exactly seven ASCII digits.
    #[error("identifier base must be exactly 7 digits, got {0:?}")]
    MalformedBase(String),

    /// The weighted sum of the base leaves remainder 1, so no check digit exists.
    #[error("identifier base {0:?} has no valid check digit (weighted sum mod 11 is 1)")]
    BaseWithoutCheckDigit(String),
}

fn join_reasons(reasons: &[FailureReason]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
