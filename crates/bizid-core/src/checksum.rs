//! # Check Digit
//!
//! Weighted modulo-11 scheme over the seven base digits:
//!
//! ```text
//! sum = 7*d0 + 9*d1 + 10*d2 + 5*d3 + 8*d4 + 4*d5 + 2*d6
//! r   = sum mod 11
//! r == 0  -> check digit 0
//! r == 1  -> no valid check digit
//! r >= 2  -> check digit 11 - r
//! ```

use crate::error::IdentifierError;

/// Per-position weights for the seven base digits.
pub const WEIGHTS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];

/// Checksum modulus.
pub const MODULUS: u32 = 11;

/// Number of digits in an identifier base.
pub const BASE_LEN: usize = 7;

/// Weighted sum of the base digits. Each digit must be in `0..=9`.
pub fn weighted_sum(digits: &[u8; BASE_LEN]) -> u32 {
    digits
        .iter()
        .zip(WEIGHTS)
        .map(|(d, w)| u32::from(*d) * w)
        .sum()
}

/// `weighted_sum(digits) mod 11`.
pub fn remainder(digits: &[u8; BASE_LEN]) -> u32 {
    weighted_sum(digits) % MODULUS
}

/// Check digit implied by a remainder, or `None` when the remainder is 1
/// (or not a remainder mod 11 at all).
pub fn check_digit_for_remainder(r: u32) -> Option<u8> {
    match r {
        0 => Some(0),
        1 => None,
        r if r < MODULUS => u8::try_from(MODULUS - r).ok(),
        _ => None,
    }
}

/// Parse a seven-digit base into its digit values.
pub(crate) fn parse_base(base: &str) -> Option<[u8; BASE_LEN]> {
    let bytes = base.as_bytes();
    if bytes.len() != BASE_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut digits = [0u8; BASE_LEN];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    Some(digits)
}

/// Compute the check digit for a seven-digit identifier base.
///
/// # Errors
///
/// - [`IdentifierError::MalformedBase`] if `base` is not exactly seven ASCII digits.
/// - [`IdentifierError::BaseWithoutCheckDigit`] if the weighted sum leaves remainder 1.
pub fn check_digit(base: &str) -> Result<u8, IdentifierError> {
    let digits =
        parse_base(base).ok_or_else(|| IdentifierError::MalformedBase(base.to_string()))?;
    check_digit_for_remainder(remainder(&digits))
        .ok_or_else(|| IdentifierError::BaseWithoutCheckDigit(base.to_string()))
}
