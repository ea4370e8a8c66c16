//! # Control Digit
//!
//! The eleventh digit is a check digit over the first ten:
//!
//! ```text
//! sum      = Σ WEIGHTS[i] * digit[i]   for i in 0..10
//! expected = (10 - sum % 10) % 10
//! ```
//!
//! The comparison is done on the character, so the identifier must already
//! have passed the format check for the answer to mean anything.

/// Weights applied to the first ten digits.
pub const WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Compute the expected control digit for the first ten characters of
/// `digits`.
///
/// Returns `None` if fewer than ten characters are present or any of them is
/// not an ASCII digit. Characters past the tenth are ignored.
pub fn control_digit(digits: &str) -> Option<char> {
    let bytes = digits.as_bytes();
    if bytes.len() < WEIGHTS.len() {
        return None;
    }
    let mut sum = 0u32;
    for (weight, byte) in WEIGHTS.iter().zip(bytes) {
        if !byte.is_ascii_digit() {
            return None;
        }
        sum += weight * u32::from(byte - b'0');
    }
    char::from_digit((10 - sum % 10) % 10, 10)
}

/// Whether the eleventh character equals the computed control digit.
pub fn verify(identifier: &str) -> bool {
    match (control_digit(identifier), identifier.chars().nth(10)) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}
