//! # Failure Reasons
//!
//! The closed taxonomy of reasons a candidate can fail validation. Every
//! `match` on [`FailureReason`] or [`ReasonKind`] is exhaustive, so a new
//! reason forces every renderer to handle it.
//!
//! | Kind | Trigger | Label |
//! |------|---------|-------|
//! | `InvalidFormat` | candidate is not text | Invalid format - not string |
//! | `TooShort` | length < 9 | Too short identifier string |
//! | `TooLong` | length > 9 | Too long identifier string |
//! | `InvalidSeparator` | index 7 absent or not `-` | Invalid separator character |
//! | `InvalidCharacter` | non-digit outside index 7 | Invalid character `<c>` |
//! | `CheckNumBaseInvalid` | weighted sum mod 11 is 1 | Error in identifier base - results checknum 1 |
//! | `CheckNumMismatch` | check digit differs from expected | Checknum does not match identifier base |

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Discriminant of a [`FailureReason`], without any payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    /// The candidate is not text.
    InvalidFormat,
    /// Fewer than nine characters.
    TooShort,
    /// More than nine characters.
    TooLong,
    /// Index 7 is missing or is not `-`.
    InvalidSeparator,
    /// A position other than index 7 holds a non-digit.
    InvalidCharacter,
    /// The seven-digit base has no valid check digit.
    CheckNumBaseInvalid,
    /// The stored check digit differs from the computed one.
    CheckNumMismatch,
}

impl ReasonKind {
    /// All kinds, in the order the validator can emit them.
    pub const ALL: [ReasonKind; 7] = [
        Self::InvalidFormat,
        Self::TooShort,
        Self::TooLong,
        Self::InvalidSeparator,
        Self::InvalidCharacter,
        Self::CheckNumBaseInvalid,
        Self::CheckNumMismatch,
    ];

    /// Stable machine-readable name (`snake_case`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::InvalidSeparator => "invalid_separator",
            Self::InvalidCharacter => "invalid_character",
            Self::CheckNumBaseInvalid => "check_num_base_invalid",
            Self::CheckNumMismatch => "check_num_mismatch",
        }
    }

    /// Fixed human-readable label. For `InvalidCharacter` the offending
    /// character is appended by [`FailureReason`]'s `Display`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "Invalid format - not string",
            Self::TooShort => "Too short identifier string",
            Self::TooLong => "Too long identifier string",
            Self::InvalidSeparator => "Invalid separator character",
            Self::InvalidCharacter => "Invalid character",
            Self::CheckNumBaseInvalid => "Error in identifier base - results checknum 1",
            Self::CheckNumMismatch => "Checknum does not match identifier base",
        }
    }
}

impl fmt::Display for ReasonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reason a candidate failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The candidate is not text. Always the sole reason when present.
    InvalidFormat,
    /// Fewer than nine characters.
    TooShort,
    /// More than nine characters.
    TooLong,
    /// Index 7 is missing or is not `-`.
    InvalidSeparator,
    /// The character at `position` is not an ASCII decimal digit.
    InvalidCharacter {
        /// Zero-based character index.
        position: usize,
        /// The offending character.
        character: char,
    },
    /// Weighted sum mod 11 is 1.
    CheckNumBaseInvalid,
    /// Computed check digit differs from the digit at index 8.
    CheckNumMismatch,
}

impl FailureReason {
    /// The payload-free kind of this reason.
    pub fn kind(&self) -> ReasonKind {
        match self {
            Self::InvalidFormat => ReasonKind::InvalidFormat,
            Self::TooShort => ReasonKind::TooShort,
            Self::TooLong => ReasonKind::TooLong,
            Self::InvalidSeparator => ReasonKind::InvalidSeparator,
            Self::InvalidCharacter { .. } => ReasonKind::InvalidCharacter,
            Self::CheckNumBaseInvalid => ReasonKind::CheckNumBaseInvalid,
            Self::CheckNumMismatch => ReasonKind::CheckNumMismatch,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, .. } => {
                write!(f, "{} {}", self.kind().label(), character)
            }
            other => f.write_str(other.kind().label()),
        }
    }
}

/// Serialized as `{"kind": ..., "message": ...}`, plus `position` and
/// `character` for invalid characters.
impl Serialize for FailureReason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let detail = match self {
            Self::InvalidCharacter {
                position,
                character,
            } => Some((*position, *character)),
            _ => None,
        };

        let mut map = serializer.serialize_map(Some(if detail.is_some() { 4 } else { 2 }))?;
        map.serialize_entry("kind", &self.kind())?;
        map.serialize_entry("message", &self.to_string())?;
        if let Some((position, character)) = detail {
            map.serialize_entry("position", &position)?;
            map.serialize_entry("character", &character)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_render_for_every_kind() {
        for kind in ReasonKind::ALL {
            assert!(!kind.label().is_empty());
            assert!(!kind.as_str().is_empty());
        }
    }

    #[test]
    fn invalid_character_appends_the_character() {
        let reason = FailureReason::InvalidCharacter {
            position: 4,
            character: 'A',
        };
        assert_eq!(reason.to_string(), "Invalid character A");
        assert_eq!(reason.kind(), ReasonKind::InvalidCharacter);
    }

    #[test]
    fn plain_reasons_render_their_label() {
        assert_eq!(
            FailureReason::CheckNumMismatch.to_string(),
            "Checknum does not match identifier base"
        );
        assert_eq!(
            FailureReason::InvalidFormat.to_string(),
            "Invalid format - not string"
        );
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ReasonKind::CheckNumBaseInvalid).unwrap();
        assert_eq!(json, "\"check_num_base_invalid\"");
        let back: ReasonKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ReasonKind::CheckNumBaseInvalid);
    }

    #[test]
    fn kind_as_str_matches_serde_name() {
        for kind in ReasonKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn reason_serializes_with_message() {
        let value = serde_json::to_value(FailureReason::TooShort).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"kind": "too_short", "message": "Too short identifier string"})
        );
    }

    #[test]
    fn invalid_character_serializes_detail() {
        let value = serde_json::to_value(FailureReason::InvalidCharacter {
            position: 0,
            character: 'a',
        })
        .unwrap();
        assert_eq!(value["kind"], "invalid_character");
        assert_eq!(value["message"], "Invalid character a");
        assert_eq!(value["position"], 0);
        assert_eq!(value["character"], "a");
    }
}
