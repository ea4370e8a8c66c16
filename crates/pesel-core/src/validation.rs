//! # Validation Rules
//!
//! Each rule is an independent, pure predicate over the raw identifier.
//! [`Checks`] evaluates the five identifier-only rules once; the sixth rule
//! (gender match) depends on the caller's requested gender.
//!
//! ## Rule Order
//!
//! The strict entry point ([`Pesel::validate`]) checks rules in a fixed
//! order and reports the first one that fails:
//!
//! 1. [`ValidationRule::Format`]: exactly eleven ASCII digits.
//! 2. [`ValidationRule::Weights`]: control digit matches.
//! 3. [`ValidationRule::BirthdatePattern`]: `YYMMDD` with a legal month code.
//! 4. [`ValidationRule::Birthdate`]: the date exists and re-encodes exactly.
//! 5. [`ValidationRule::GenderPattern`]: the tenth character is a digit.
//! 6. [`ValidationRule::Gender`]: the parity digit matches the request.
//!
//! Rules 5 and 6 are only checked when a gender is requested. A malformed
//! identifier therefore always reports `Format`, even if every later rule
//! would fail too.

use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::date;
use crate::error::ValidationError;
use crate::gender::Gender;
use crate::pesel::Pesel;

/// Length of a well-formed identifier.
pub const PESEL_LENGTH: usize = 11;

/// A single validation rule, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Exactly eleven ASCII digits.
    Format,
    /// Weighted control digit.
    Weights,
    /// `YYMMDD` pattern with a legal month code and day 01–31.
    BirthdatePattern,
    /// Existing, canonically encoded calendar date.
    Birthdate,
    /// Tenth character is a digit.
    GenderPattern,
    /// Parity digit matches the requested gender.
    Gender,
}

impl ValidationRule {
    /// All rules in check order.
    pub fn all() -> &'static [ValidationRule] {
        &[
            Self::Format,
            Self::Weights,
            Self::BirthdatePattern,
            Self::Birthdate,
            Self::GenderPattern,
            Self::Gender,
        ]
    }

    /// The snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Weights => "weights",
            Self::BirthdatePattern => "birthdate_pattern",
            Self::Birthdate => "birthdate",
            Self::GenderPattern => "gender_pattern",
            Self::Gender => "gender",
        }
    }
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the five identifier-only rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checks {
    /// [`ValidationRule::Format`].
    pub format: bool,
    /// [`ValidationRule::Weights`].
    pub weights: bool,
    /// [`ValidationRule::BirthdatePattern`].
    pub birthdate_pattern: bool,
    /// [`ValidationRule::Birthdate`].
    pub birthdate: bool,
    /// [`ValidationRule::GenderPattern`].
    pub gender_pattern: bool,
}

impl Checks {
    /// Evaluate every identifier-only rule.
    pub fn evaluate(identifier: &str) -> Self {
        let format = is_valid_format(identifier);
        Self {
            format,
            weights: format && checksum::verify(identifier),
            birthdate_pattern: is_valid_birthdate_pattern(identifier),
            birthdate: is_valid_birthdate(identifier),
            gender_pattern: format || matches_gender_pattern(identifier),
        }
    }
}

/// Exactly eleven ASCII digits, nothing else.
pub fn is_valid_format(identifier: &str) -> bool {
    identifier.len() == PESEL_LENGTH && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Checksum rule; requires the format rule.
pub fn is_valid_weights(identifier: &str) -> bool {
    is_valid_format(identifier) && checksum::verify(identifier)
}

/// The first six characters form `YY MM DD` with one of the sixty month
/// codes and a day between 01 and 31. Later characters are not inspected.
pub fn is_valid_birthdate_pattern(identifier: &str) -> bool {
    let bytes = identifier.as_bytes();
    if bytes.len() < 6 {
        return false;
    }
    bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && is_month_code(bytes[2], bytes[3])
        && is_day_code(bytes[4], bytes[5])
}

/// Months 1–9 after an even tens digit, 10–12 after an odd one.
fn is_month_code(tens: u8, units: u8) -> bool {
    match tens {
        b'0' | b'2' | b'4' | b'6' | b'8' => matches!(units, b'1'..=b'9'),
        b'1' | b'3' | b'5' | b'7' | b'9' => matches!(units, b'0'..=b'2'),
        _ => false,
    }
}

fn is_day_code(tens: u8, units: u8) -> bool {
    match tens {
        b'0' => matches!(units, b'1'..=b'9'),
        b'1' | b'2' => units.is_ascii_digit(),
        b'3' => matches!(units, b'0' | b'1'),
        _ => false,
    }
}

/// The birthdate pattern holds, the date exists, and re-encoding the date
/// reproduces the identifier's first six characters.
pub fn is_valid_birthdate(identifier: &str) -> bool {
    if !is_valid_birthdate_pattern(identifier) {
        return false;
    }
    let Some(decoded) = date::decode(identifier) else {
        return false;
    };
    let within_month = date::days_in_month(decoded.year(), decoded.month())
        .is_some_and(|days| decoded.day() <= days);
    if !within_month {
        return false;
    }
    let Some(birthdate) = date::birthdate(identifier) else {
        return false;
    };
    if birthdate.format("%Y-%m-%d").to_string() != decoded.iso_string() {
        return false;
    }
    date::encode_birthdate(birthdate).is_some_and(|prefix| identifier.starts_with(&prefix))
}

/// Format rule, or at least ten characters whose tenth is a digit.
pub fn is_valid_gender_pattern(identifier: &str) -> bool {
    is_valid_format(identifier) || matches_gender_pattern(identifier)
}

/// Nine arbitrary characters (other than line breaks) followed by a digit.
fn matches_gender_pattern(identifier: &str) -> bool {
    let mut chars = identifier.chars();
    let leading = chars.by_ref().take(9).filter(|c| *c != '\n').count();
    leading == 9 && chars.next().is_some_and(|c| c.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Strict validation
// ---------------------------------------------------------------------------

impl Pesel {
    /// The first rule this identifier breaks, in check order.
    ///
    /// Gender rules are only considered when `for_gender` is set.
    pub fn first_failure(&self, for_gender: Option<Gender>) -> Option<ValidationRule> {
        let checks = self.checks();
        if !checks.format {
            return Some(ValidationRule::Format);
        }
        if !checks.weights {
            return Some(ValidationRule::Weights);
        }
        if !checks.birthdate_pattern {
            return Some(ValidationRule::BirthdatePattern);
        }
        if !checks.birthdate {
            return Some(ValidationRule::Birthdate);
        }
        if let Some(requested) = for_gender {
            if !checks.gender_pattern {
                return Some(ValidationRule::GenderPattern);
            }
            if self.gender() != Some(requested) {
                return Some(ValidationRule::Gender);
            }
        }
        None
    }

    /// Strictly validate, failing on the first broken rule.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] variant for the first rule that fails,
    /// carrying this identifier.
    pub fn validate(&self, for_gender: Option<Gender>) -> Result<&Self, ValidationError> {
        match self.first_failure(for_gender) {
            None => Ok(self),
            Some(rule) => {
                tracing::debug!(pesel = %self.as_str(), %rule, "PESEL rejected");
                Err(ValidationError::new(rule, self.as_str()))
            }
        }
    }

    /// Wrap and strictly validate in one step.
    ///
    /// # Errors
    ///
    /// Same as [`Pesel::validate`].
    pub fn try_new(
        value: impl Into<String>,
        for_gender: Option<Gender>,
    ) -> Result<Self, ValidationError> {
        let pesel = Self::new(value);
        pesel.validate(for_gender)?;
        Ok(pesel)
    }
}
