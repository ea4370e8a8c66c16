//! # Validation Report
//!
//! A serializable snapshot of everything known about one identifier: the
//! outcome of every rule, the decoded fields, and the first failing rule in
//! strict order. Consumers that need JSON (the CLI, log pipelines) use this
//! instead of re-deriving the pieces.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::century::Century;
use crate::error::PeselError;
use crate::gender::Gender;
use crate::pesel::Pesel;
use crate::validation::{Checks, ValidationRule};

/// Per-identifier summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeselReport {
    /// The identifier as supplied.
    pub pesel: Pesel,
    /// Overall strict outcome for the requested gender.
    pub valid: bool,
    /// Gender the identifier was validated against, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_gender: Option<Gender>,
    /// Identifier-only rule results.
    pub checks: Checks,
    /// First failing rule in check order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_rule: Option<ValidationRule>,
    /// Verified birthdate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    /// Century resolved from the month field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub century: Option<Century>,
    /// Gender decoded from the parity digit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl PeselReport {
    /// Build the report for `pesel`, validating against `for_gender`.
    pub fn new(pesel: &Pesel, for_gender: Option<Gender>) -> Self {
        let failed_rule = pesel.first_failure(for_gender);
        Self {
            pesel: pesel.clone(),
            valid: failed_rule.is_none(),
            requested_gender: for_gender,
            checks: pesel.checks(),
            failed_rule,
            birthdate: pesel.birthdate(),
            century: pesel.decoded_date().map(|decoded| decoded.century()),
            gender: pesel.gender(),
        }
    }

    /// Render as a single-line JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`PeselError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PeselError> {
        Ok(serde_json::to_string(self)?)
    }
}
