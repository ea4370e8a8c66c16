//! # Gender Parity
//!
//! The tenth digit of a PESEL encodes gender by parity: even digits for
//! women, odd digits for men. Any other character (or a missing one) decodes
//! to no gender, which callers see as `None`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PeselError;

/// Gender digits assigned to women.
pub const FEMALE_DIGITS: [char; 5] = ['0', '2', '4', '6', '8'];

/// Gender digits assigned to men.
pub const MALE_DIGITS: [char; 5] = ['1', '3', '5', '7', '9'];

/// Gender encoded in the parity digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Even parity digit.
    Female,
    /// Odd parity digit.
    Male,
}

impl Gender {
    /// Decode a gender field. The field must be exactly one parity digit.
    pub fn decode(field: &str) -> Option<Self> {
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_digit(c),
            _ => None,
        }
    }

    /// Gender for a single parity digit.
    pub fn from_digit(digit: char) -> Option<Self> {
        if FEMALE_DIGITS.contains(&digit) {
            Some(Self::Female)
        } else if MALE_DIGITS.contains(&digit) {
            Some(Self::Male)
        } else {
            None
        }
    }

    /// Digits that encode this gender.
    pub fn digits(self) -> &'static [char; 5] {
        match self {
            Self::Female => &FEMALE_DIGITS,
            Self::Male => &MALE_DIGITS,
        }
    }

    /// Lowercase label, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = PeselError;

    /// Accepts `female`/`f` and `male`/`m`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Self::Female),
            "male" | "m" => Ok(Self::Male),
            _ => Err(PeselError::InvalidComponent {
                field: "gender",
                reason: format!("expected \"female\" or \"male\", got {s:?}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_digits_are_female() {
        for digit in FEMALE_DIGITS {
            assert_eq!(Gender::from_digit(digit), Some(Gender::Female));
        }
    }

    #[test]
    fn odd_digits_are_male() {
        for digit in MALE_DIGITS {
            assert_eq!(Gender::from_digit(digit), Some(Gender::Male));
        }
    }

    #[test]
    fn non_digits_are_unknown() {
        assert_eq!(Gender::from_digit('a'), None);
        assert_eq!(Gender::from_digit(' '), None);
        assert_eq!(Gender::from_digit('٣'), None); // non-ASCII digit
    }

    #[test]
    fn decode_requires_single_character() {
        assert_eq!(Gender::decode("4"), Some(Gender::Female));
        assert_eq!(Gender::decode(""), None);
        assert_eq!(Gender::decode("44"), None);
    }

    #[test]
    fn digit_sets_partition_ascii_digits() {
        let mut all: Vec<char> = FEMALE_DIGITS.iter().chain(MALE_DIGITS.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, ('0'..='9').collect::<Vec<_>>());
    }

    #[test]
    fn from_str_accepts_aliases() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn serde_snake_case() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        let g: Gender = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(g, Gender::Male);
    }
}
