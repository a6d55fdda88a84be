//! # Business Identifier Newtype
//!
//! [`BusinessId`] holds an identifier that passed every check in
//! [`validate`](crate::validate). Construction, `FromStr` and
//! deserialization all route through the validator, so an invalid value
//! cannot be represented.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::{self, BASE_LEN};
use crate::error::IdentifierError;
use crate::validator::{validate, CHECK_DIGIT_INDEX, SEPARATOR};

/// A validated business identifier, `NNNNNNN-N`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BusinessId(String);

impl BusinessId {
    /// Create a business identifier, validating format and check digit.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::Invalid`] carrying every failure reason.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        let result = validate(value.as_str());
        if result.is_valid() {
            Ok(Self(value))
        } else {
            Err(IdentifierError::Invalid {
                value,
                reasons: result.into_reasons(),
            })
        }
    }

    /// Build an identifier from a seven-digit base by appending the
    /// separator and the computed check digit.
    ///
    /// # Errors
    ///
    /// Propagates [`checksum::check_digit`] errors.
    pub fn from_base(base: &str) -> Result<Self, IdentifierError> {
        let digit = checksum::check_digit(base)?;
        Ok(Self(format!("{base}{SEPARATOR}{digit}")))
    }

    /// The identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The seven base digits.
    pub fn base(&self) -> &str {
        // validated: nine ASCII characters
        &self.0[..BASE_LEN]
    }

    /// The check digit value.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[CHECK_DIGIT_INDEX] - b'0'
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BusinessId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BusinessId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for BusinessId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
