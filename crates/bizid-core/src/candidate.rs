//! # Candidates
//!
//! The validator accepts "any value". Text goes through the full check
//! sequence; anything else is rejected by the type gate with
//! `InvalidFormat`. Non-text values are described by the JSON value kinds,
//! which is how they reach the validator from JSON payloads and the CLI.

use std::fmt;

use serde_json::Value;

/// Kind of a non-text candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// A value submitted for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Textual input; subject to every format and checksum check.
    Text(&'a str),
    /// Anything that is not text.
    NonText(ValueKind),
}

impl<'a> Candidate<'a> {
    /// The text, if this candidate is text.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(s) => Some(s),
            Self::NonText(_) => None,
        }
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

impl<'a> From<&'a Value> for Candidate<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.as_str()),
            Value::Null => Self::NonText(ValueKind::Null),
            Value::Bool(_) => Self::NonText(ValueKind::Bool),
            Value::Number(_) => Self::NonText(ValueKind::Number),
            Value::Array(_) => Self::NonText(ValueKind::Array),
            Value::Object(_) => Self::NonText(ValueKind::Object),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_string_is_text() {
        let v = json!("2471384-9");
        assert_eq!(Candidate::from(&v), Candidate::Text("2471384-9"));
    }

    #[test]
    fn json_non_strings_are_non_text() {
        let cases = [
            (json!(null), ValueKind::Null),
            (json!(true), ValueKind::Bool),
            (json!(24713849), ValueKind::Number),
            (json!(["2471384-9"]), ValueKind::Array),
            (json!({"id": "2471384-9"}), ValueKind::Object),
        ];
        for (value, kind) in &cases {
            let candidate = Candidate::from(value);
            assert_eq!(candidate, Candidate::NonText(*kind));
            assert!(candidate.as_text().is_none());
        }
    }

    #[test]
    fn value_kind_display() {
        assert_eq!(ValueKind::Number.to_string(), "number");
        assert_eq!(ValueKind::Object.to_string(), "object");
    }
}
