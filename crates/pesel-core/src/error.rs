//! # Error Hierarchy
//!
//! Structured error types for PESEL decoding, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Predicates such as [`Pesel::is_valid`](crate::Pesel::is_valid) never fail;
//! they answer `false`. Only the strict entry point
//! ([`Pesel::validate`](crate::Pesel::validate)) produces a
//! [`ValidationError`], and each variant carries the offending identifier so
//! that callers can report it without holding on to the [`Pesel`](crate::Pesel).

use thiserror::Error;

use crate::validation::ValidationRule;

/// Top-level error type for the crate.
#[derive(Error, Debug)]
pub enum PeselError {
    /// Strict validation rejected an identifier.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A component passed to [`Pesel::compose`](crate::Pesel::compose) or a
    /// parsed value is out of range.
    #[error("invalid {field}: {reason}")]
    InvalidComponent {
        /// Name of the rejected component.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Strict validation failures, one variant per rule.
///
/// Variants are listed in the order the rules are checked. The payload is
/// the identifier exactly as it was supplied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not exactly eleven ASCII digits.
    #[error("invalid PESEL format: \"{0}\" (expected exactly 11 digits)")]
    InvalidFormat(String),

    /// Control digit does not match the weighted sum of the first ten digits.
    #[error("invalid PESEL control digit: \"{0}\"")]
    InvalidWeights(String),

    /// First six characters are not a `YYMMDD` pattern with a legal month code.
    #[error("invalid PESEL birthdate pattern: \"{0}\" (expected YYMMDD with a century-encoded month)")]
    InvalidBirthdatePattern(String),

    /// Birthdate pattern is well formed but names a day that does not exist.
    #[error("invalid PESEL birthdate: \"{0}\"")]
    InvalidBirthdate(String),

    /// Tenth character is missing or not a digit.
    #[error("invalid PESEL gender digit: \"{0}\"")]
    InvalidGenderPattern(String),

    /// Gender digit does not match the requested gender.
    #[error("PESEL gender does not match: \"{0}\"")]
    InvalidGender(String),
}

impl ValidationError {
    /// Build the error that reports `rule` for `pesel`.
    pub fn new(rule: ValidationRule, pesel: impl Into<String>) -> Self {
        let pesel = pesel.into();
        match rule {
            ValidationRule::Format => Self::InvalidFormat(pesel),
            ValidationRule::Weights => Self::InvalidWeights(pesel),
            ValidationRule::BirthdatePattern => Self::InvalidBirthdatePattern(pesel),
            ValidationRule::Birthdate => Self::InvalidBirthdate(pesel),
            ValidationRule::GenderPattern => Self::InvalidGenderPattern(pesel),
            ValidationRule::Gender => Self::InvalidGender(pesel),
        }
    }

    /// The rule that failed.
    pub fn rule(&self) -> ValidationRule {
        match self {
            Self::InvalidFormat(_) => ValidationRule::Format,
            Self::InvalidWeights(_) => ValidationRule::Weights,
            Self::InvalidBirthdatePattern(_) => ValidationRule::BirthdatePattern,
            Self::InvalidBirthdate(_) => ValidationRule::Birthdate,
            Self::InvalidGenderPattern(_) => ValidationRule::GenderPattern,
            Self::InvalidGender(_) => ValidationRule::Gender,
        }
    }

    /// The identifier that failed validation.
    pub fn pesel(&self) -> &str {
        match self {
            Self::InvalidFormat(p)
            | Self::InvalidWeights(p)
            | Self::InvalidBirthdatePattern(p)
            | Self::InvalidBirthdate(p)
            | Self::InvalidGenderPattern(p)
            | Self::InvalidGender(p) => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_rule_agree_for_every_rule() {
        for rule in ValidationRule::all() {
            let err = ValidationError::new(*rule, "123");
            assert_eq!(err.rule(), *rule);
            assert_eq!(err.pesel(), "123");
        }
    }

    #[test]
    fn validation_error_format_display() {
        let err = ValidationError::InvalidFormat("1234567890".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("1234567890"));
        assert!(msg.contains("11 digits"));
    }

    #[test]
    fn validation_error_birthdate_pattern_display() {
        let err = ValidationError::InvalidBirthdatePattern("00000000000".to_string());
        assert!(format!("{err}").contains("YYMMDD"));
    }

    #[test]
    fn pesel_error_wraps_validation() {
        let inner = ValidationError::InvalidWeights("90011512310".to_string());
        let err = PeselError::from(inner);
        let msg = format!("{err}");
        assert!(msg.contains("validation error"));
        assert!(msg.contains("90011512310"));
    }

    #[test]
    fn pesel_error_invalid_component_display() {
        let err = PeselError::InvalidComponent {
            field: "serial",
            reason: "1000 exceeds 999".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid serial: 1000 exceeds 999");
    }

    #[test]
    fn all_error_types_are_debug() {
        let e1 = PeselError::InvalidComponent {
            field: "gender",
            reason: "x".to_string(),
        };
        let e2 = ValidationError::InvalidGender("x".to_string());
        assert!(!format!("{e1:?}").is_empty());
        assert!(!format!("{e2:?}").is_empty());
    }
}
