//! # Century Encoding
//!
//! A PESEL stores only two digits of the birth year. The century is folded
//! into the month field by adding a fixed offset:
//!
//! | Century | Offset | Month codes |
//! |---------|--------|-------------|
//! | 1800    | 80     | `81`–`92`   |
//! | 1900    | 0      | `01`–`12`   |
//! | 2000    | 20     | `21`–`32`   |
//! | 2100    | 40     | `41`–`52`   |
//! | 2200    | 60     | `61`–`72`   |
//!
//! The five code sets are pairwise disjoint, so a month field resolves to at
//! most one century. Codes outside every set (`00`, `13`–`20`, `93`–`99`, ...)
//! resolve to none.

use serde::{Deserialize, Serialize};

/// One of the five centuries a PESEL can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Century {
    /// Years 1800–1899.
    #[serde(rename = "1800")]
    Y1800,
    /// Years 1900–1999.
    #[serde(rename = "1900")]
    Y1900,
    /// Years 2000–2099.
    #[serde(rename = "2000")]
    Y2000,
    /// Years 2100–2199.
    #[serde(rename = "2100")]
    Y2100,
    /// Years 2200–2299.
    #[serde(rename = "2200")]
    Y2200,
}

const MONTH_CODES_1800: [&str; 12] = [
    "81", "82", "83", "84", "85", "86", "87", "88", "89", "90", "91", "92",
];
const MONTH_CODES_1900: [&str; 12] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
];
const MONTH_CODES_2000: [&str; 12] = [
    "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32",
];
const MONTH_CODES_2100: [&str; 12] = [
    "41", "42", "43", "44", "45", "46", "47", "48", "49", "50", "51", "52",
];
const MONTH_CODES_2200: [&str; 12] = [
    "61", "62", "63", "64", "65", "66", "67", "68", "69", "70", "71", "72",
];

impl Century {
    /// Number of encodable centuries.
    pub const COUNT: usize = 5;

    /// All centuries in chronological order.
    pub fn all() -> &'static [Century] {
        &[
            Self::Y1800,
            Self::Y1900,
            Self::Y2000,
            Self::Y2100,
            Self::Y2200,
        ]
    }

    /// First year of the century (1800, 1900, ...).
    pub fn base_year(self) -> i32 {
        match self {
            Self::Y1800 => 1800,
            Self::Y1900 => 1900,
            Self::Y2000 => 2000,
            Self::Y2100 => 2100,
            Self::Y2200 => 2200,
        }
    }

    /// Amount added to the calendar month to encode this century.
    pub fn month_offset(self) -> u32 {
        match self {
            Self::Y1800 => 80,
            Self::Y1900 => 0,
            Self::Y2000 => 20,
            Self::Y2100 => 40,
            Self::Y2200 => 60,
        }
    }

    /// The twelve two-character month codes belonging to this century,
    /// January first.
    pub fn month_codes(self) -> &'static [&'static str; 12] {
        match self {
            Self::Y1800 => &MONTH_CODES_1800,
            Self::Y1900 => &MONTH_CODES_1900,
            Self::Y2000 => &MONTH_CODES_2000,
            Self::Y2100 => &MONTH_CODES_2100,
            Self::Y2200 => &MONTH_CODES_2200,
        }
    }

    /// Resolve the century encoded by a two-character month field.
    ///
    /// The lookup is exact: `"1"`, `" 1"` or `"001"` never match.
    pub fn from_month_code(month_field: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|century| century.month_codes().contains(&month_field))
    }

    /// The century containing a full calendar year, if it is encodable.
    pub fn from_year(year: i32) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|century| (century.base_year()..century.base_year() + 100).contains(&year))
    }

    /// Human-readable label, e.g. `"1900"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Y1800 => "1800",
            Self::Y1900 => "1900",
            Self::Y2000 => "2000",
            Self::Y2100 => "2100",
            Self::Y2200 => "2200",
        }
    }
}

impl std::fmt::Display for Century {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn century_count_matches_all() {
        assert_eq!(Century::all().len(), Century::COUNT);
    }

    #[test]
    fn month_codes_are_offset_calendar_months() {
        for century in Century::all() {
            for (index, code) in century.month_codes().iter().enumerate() {
                let expected = index as u32 + 1 + century.month_offset();
                assert_eq!(*code, format!("{expected:02}"), "{century}");
            }
        }
    }

    #[test]
    fn month_code_sets_do_not_overlap() {
        let mut seen = HashSet::new();
        for century in Century::all() {
            for code in century.month_codes() {
                assert!(seen.insert(*code), "{code} appears in two centuries");
            }
        }
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn every_code_resolves_back_to_its_century() {
        for century in Century::all() {
            for code in century.month_codes() {
                assert_eq!(Century::from_month_code(code), Some(*century));
            }
        }
    }

    #[test]
    fn codes_outside_every_set_have_no_century() {
        for code in ["00", "13", "20", "33", "40", "53", "60", "73", "80", "93", "99"] {
            assert_eq!(Century::from_month_code(code), None, "{code}");
        }
        assert_eq!(Century::from_month_code(""), None);
        assert_eq!(Century::from_month_code("1"), None);
        assert_eq!(Century::from_month_code("001"), None);
    }

    #[test]
    fn from_year_boundaries() {
        assert_eq!(Century::from_year(1799), None);
        assert_eq!(Century::from_year(1800), Some(Century::Y1800));
        assert_eq!(Century::from_year(1899), Some(Century::Y1800));
        assert_eq!(Century::from_year(1900), Some(Century::Y1900));
        assert_eq!(Century::from_year(2000), Some(Century::Y2000));
        assert_eq!(Century::from_year(2299), Some(Century::Y2200));
        assert_eq!(Century::from_year(2300), None);
    }

    #[test]
    fn serde_uses_base_year_labels() {
        let json = serde_json::to_string(&Century::Y2000).unwrap();
        assert_eq!(json, "\"2000\"");
        let back: Century = serde_json::from_str("\"1800\"").unwrap();
        assert_eq!(back, Century::Y1800);
    }
}
