//! # PESEL Value Type
//!
//! [`Pesel`] wraps an arbitrary input string. Construction never fails and
//! never rejects anything: every rule is answered later by a predicate.
//!
//! All decoding happens once, eagerly, inside [`Pesel::new`]. The value is
//! immutable afterwards, so every predicate is a plain field read and a
//! `Pesel` can be shared across threads without synchronization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::date::{self, DecodedDate};
use crate::error::PeselError;
use crate::fields;
use crate::gender::Gender;
use crate::validation::Checks;

/// A Polish national identification number, valid or not.
///
/// Equality and hashing consider only the wrapped string.
#[derive(Debug, Clone)]
pub struct Pesel {
    number: String,
    decoded: Option<DecodedDate>,
    gender: Option<Gender>,
    checks: Checks,
}

impl Pesel {
    /// Wrap `value` and decode it.
    pub fn new(value: impl Into<String>) -> Self {
        let number = value.into();
        let decoded = date::decode(&number);
        let gender = Gender::decode(fields::gender(&number));
        let checks = Checks::evaluate(&number);
        Self {
            number,
            decoded,
            gender,
            checks,
        }
    }

    /// Build a valid identifier from its parts.
    ///
    /// The gender digit is the smallest digit of the requested parity and the
    /// control digit is computed.
    ///
    /// # Errors
    ///
    /// Returns [`PeselError::InvalidComponent`] if `birthdate` falls outside
    /// 1800–2299 or `serial` exceeds 999.
    pub fn compose(birthdate: NaiveDate, serial: u16, gender: Gender) -> Result<Self, PeselError> {
        let prefix = date::encode_birthdate(birthdate).ok_or_else(|| {
            PeselError::InvalidComponent {
                field: "birthdate",
                reason: format!("{birthdate} is outside the encodable range 1800-2299"),
            }
        })?;
        if serial > 999 {
            return Err(PeselError::InvalidComponent {
                field: "serial",
                reason: format!("{serial} exceeds 999"),
            });
        }
        let body = format!("{prefix}{serial:03}{}", gender.digits()[0]);
        let control = checksum::control_digit(&body).ok_or_else(|| {
            PeselError::InvalidComponent {
                field: "body",
                reason: format!("{body:?} is not ten digits"),
            }
        })?;
        Ok(Self::new(format!("{body}{control}")))
    }

    /// The identifier exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// Consume the wrapper and return the identifier.
    pub fn into_inner(self) -> String {
        self.number
    }

    /// Results of the five identifier-only rules.
    pub fn checks(&self) -> Checks {
        self.checks
    }

    /// Century, year, month and day decoded from the first six characters,
    /// without calendar checks.
    pub fn decoded_date(&self) -> Option<DecodedDate> {
        self.decoded
    }

    /// Verified birthdate (Europe/Warsaw civil date).
    ///
    /// Present only when [`Pesel::is_valid_birthdate`] holds.
    pub fn birthdate(&self) -> Option<NaiveDate> {
        if !self.checks.birthdate {
            return None;
        }
        self.decoded.and_then(|decoded| decoded.to_naive_date())
    }

    /// Gender encoded in the tenth character, `None` if it is not a digit.
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Fully valid: format, control digit, birthdate, and (if requested)
    /// gender. Evaluated left to right.
    pub fn is_valid(&self, for_gender: Option<Gender>) -> bool {
        self.checks.format
            && self.checks.weights
            && self.checks.birthdate
            && for_gender.map_or(true, |gender| self.is_valid_gender(Some(gender)))
    }

    /// Exactly eleven ASCII digits.
    pub fn is_valid_format(&self) -> bool {
        self.checks.format
    }

    /// Format holds and the control digit matches.
    pub fn is_valid_weights(&self) -> bool {
        self.checks.weights
    }

    /// First six characters look like `YYMMDD` with a legal month code.
    pub fn is_valid_birthdate_pattern(&self) -> bool {
        self.checks.birthdate_pattern
    }

    /// Birthdate pattern holds and names an existing, canonically encoded
    /// date.
    pub fn is_valid_birthdate(&self) -> bool {
        self.checks.birthdate
    }

    /// The tenth character is a digit.
    pub fn is_valid_gender_pattern(&self) -> bool {
        self.checks.gender_pattern
    }

    /// Gender pattern holds and, if `for_gender` is set, the decoded gender
    /// equals it.
    pub fn is_valid_gender(&self, for_gender: Option<Gender>) -> bool {
        self.checks.gender_pattern
            && for_gender.map_or(true, |gender| self.gender == Some(gender))
    }

    /// Shorthand for `is_valid_gender(Some(Gender::Female))`.
    pub fn is_female(&self) -> bool {
        self.is_valid_gender(Some(Gender::Female))
    }

    /// Shorthand for `is_valid_gender(Some(Gender::Male))`.
    pub fn is_male(&self) -> bool {
        self.is_valid_gender(Some(Gender::Male))
    }
}

impl PartialEq for Pesel {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Pesel {}

impl std::hash::Hash for Pesel {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl From<String> for Pesel {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Pesel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Pesel {
    fn as_ref(&self) -> &str {
        &self.number
    }
}

impl std::fmt::Display for Pesel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.number)
    }
}

impl Serialize for Pesel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.number)
    }
}

impl<'de> Deserialize<'de> for Pesel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
