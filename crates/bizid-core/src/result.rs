//! # Validation Result
//!
//! Verdict of a single validation call. The validity flag is derived from
//! the reason list at construction and the fields are private, so
//! `is_valid() == reasons().is_empty()` holds for every value of the type.

use serde::Serialize;

use crate::reason::{FailureReason, ReasonKind};

/// Outcome of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    reasons: Vec<FailureReason>,
}

impl ValidationResult {
    /// A passing result with no reasons.
    pub fn valid() -> Self {
        Self::from_reasons(Vec::new())
    }

    /// Build a result from the reasons accumulated by the checks, in check order.
    pub fn from_reasons(reasons: Vec<FailureReason>) -> Self {
        Self {
            is_valid: reasons.is_empty(),
            reasons,
        }
    }

    /// True iff no reason was recorded.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failure reasons in the order the checks ran.
    pub fn reasons(&self) -> &[FailureReason] {
        &self.reasons
    }

    /// Consume the result, returning the reasons.
    pub fn into_reasons(self) -> Vec<FailureReason> {
        self.reasons
    }

    /// Whether any reason of `kind` was recorded.
    pub fn has(&self, kind: ReasonKind) -> bool {
        self.reasons.iter().any(|r| r.kind() == kind)
    }

    /// Kinds of the recorded reasons, in order.
    pub fn kinds(&self) -> Vec<ReasonKind> {
        self.reasons.iter().map(FailureReason::kind).collect()
    }

    /// Human-readable labels of the recorded reasons, in order.
    pub fn messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reasons_is_valid() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert!(result.reasons().is_empty());
        assert_eq!(result, ValidationResult::from_reasons(vec![]));
    }

    #[test]
    fn any_reason_is_invalid() {
        let result = ValidationResult::from_reasons(vec![FailureReason::TooLong]);
        assert!(!result.is_valid());
        assert!(result.has(ReasonKind::TooLong));
        assert!(!result.has(ReasonKind::TooShort));
        assert_eq!(result.kinds(), vec![ReasonKind::TooLong]);
        assert_eq!(result.messages(), vec!["Too long identifier string"]);
    }

    #[test]
    fn serializes_flag_and_reasons() {
        let result = ValidationResult::from_reasons(vec![
            FailureReason::CheckNumBaseInvalid,
            FailureReason::CheckNumMismatch,
        ]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["reasons"][0]["kind"], "check_num_base_invalid");
        assert_eq!(json["reasons"][1]["kind"], "check_num_mismatch");
    }

    #[test]
    fn valid_serializes_empty_list() {
        let json = serde_json::to_value(ValidationResult::valid()).unwrap();
        assert_eq!(json, serde_json::json!({"is_valid": true, "reasons": []}));
    }
}
