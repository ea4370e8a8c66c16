//! # Birthdate Decoding
//!
//! Turns the first six characters of an identifier into a calendar date and
//! back again.
//!
//! Decoding resolves the century from the month field (see
//! [`crate::century`]), subtracts the century offset to get the calendar
//! month, and adds the two-digit year to the century base. The resulting
//! date must exist in the proleptic Gregorian calendar; `chrono` answers that
//! question, so February 29 follows the usual 4/100/400 rule.
//!
//! Birthdates are civil dates in the Europe/Warsaw calendar. They are
//! represented as [`NaiveDate`] because no time-of-day or offset arithmetic is
//! ever performed on them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::century::Century;
use crate::fields;

/// Date components decoded from an identifier, before calendar checks.
///
/// Only obtainable through [`decode`]; `day` may name a day that does not
/// exist in `month` (e.g. April 31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedDate {
    century: Century,
    year: i32,
    month: u32,
    day: u32,
}

impl DecodedDate {
    /// Century resolved from the month field.
    pub fn century(&self) -> Century {
        self.century
    }

    /// Full calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month, 1–12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month as written in the identifier.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The calendar date, if it exists.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// `YYYY-MM-DD` rendering of the raw components.
    pub fn iso_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Resolve the century encoded by a month field.
pub fn resolve_century(month_field: &str) -> Option<Century> {
    Century::from_month_code(month_field)
}

/// Calendar month for `month_field` under `century`.
///
/// Absent unless the subtraction leaves a strictly positive month.
pub fn real_month(century: Century, month_field: &str) -> Option<u32> {
    let encoded = fields::parse_digits(month_field)?;
    encoded
        .checked_sub(century.month_offset())
        .filter(|month| *month > 0)
}

/// Full calendar year for `year_field` under `century`.
pub fn real_year(century: Century, year_field: &str) -> Option<i32> {
    let year = i32::try_from(fields::parse_digits(year_field)?).ok()?;
    century.base_year().checked_add(year)
}

/// Decode century, year, month and day from an identifier.
///
/// Requires a resolvable century, a positive real month, a numeric year, and
/// a non-empty numeric day field. Does not check that the day exists.
pub fn decode(identifier: &str) -> Option<DecodedDate> {
    let month_field = fields::month(identifier);
    let century = resolve_century(month_field)?;
    let month = real_month(century, month_field)?;
    let year = real_year(century, fields::year(identifier))?;
    let day = fields::parse_digits(fields::day(identifier))?;
    Some(DecodedDate {
        century,
        year,
        month,
        day,
    })
}

/// Decode the birthdate of an identifier.
///
/// Absent whenever [`decode`] fails or the decoded day does not exist in the
/// Gregorian calendar (April 31, February 30, February 29 of a common year).
/// This does not apply the pattern or round-trip checks; use
/// [`Pesel::birthdate`](crate::Pesel::birthdate) for a verified date.
pub fn birthdate(identifier: &str) -> Option<NaiveDate> {
    decode(identifier)?.to_naive_date()
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Encode a date as the six-character `YYMMDD` prefix of a PESEL.
///
/// Absent for years outside 1800–2299.
pub fn encode_birthdate(date: NaiveDate) -> Option<String> {
    let century = Century::from_year(date.year())?;
    Some(format!(
        "{:02}{:02}{:02}",
        date.year() - century.base_year(),
        date.month() + century.month_offset(),
        date.day()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- real_month / real_year --

    #[test]
    fn real_month_subtracts_offset() {
        assert_eq!(real_month(Century::Y1900, "01"), Some(1));
        assert_eq!(real_month(Century::Y1800, "92"), Some(12));
        assert_eq!(real_month(Century::Y2000, "21"), Some(1));
        assert_eq!(real_month(Century::Y2200, "72"), Some(12));
    }

    #[test]
    fn real_month_rejects_zero_and_negative() {
        assert_eq!(real_month(Century::Y2000, "20"), None);
        assert_eq!(real_month(Century::Y2000, "05"), None);
        assert_eq!(real_month(Century::Y1900, "00"), None);
        assert_eq!(real_month(Century::Y1900, "ab"), None);
    }

    #[test]
    fn real_year_adds_century_base() {
        assert_eq!(real_year(Century::Y1900, "90"), Some(1990));
        assert_eq!(real_year(Century::Y2000, "00"), Some(2000));
        assert_eq!(real_year(Century::Y1800, "99"), Some(1899));
        assert_eq!(real_year(Century::Y1900, "9x"), None);
        assert_eq!(real_year(Century::Y1900, ""), None);
    }

    // -- decode --

    #[test]
    fn decode_full_identifier() {
        let decoded = decode("90011512315").unwrap();
        assert_eq!(decoded.century(), Century::Y1900);
        assert_eq!(decoded.year(), 1990);
        assert_eq!(decoded.month(), 1);
        assert_eq!(decoded.day(), 15);
        assert_eq!(decoded.iso_string(), "1990-01-15");
    }

    #[test]
    fn decode_each_century() {
        assert_eq!(decode("85870405032").unwrap().year(), 1885);
        assert_eq!(decode("04222900052").unwrap().year(), 2004);
        assert_eq!(decode("23523199976").unwrap().year(), 2123);
        assert_eq!(decode("99663001198").unwrap().year(), 2299);
    }

    #[test]
    fn decode_requires_day_field() {
        assert!(decode("9001").is_none());
        assert!(decode("9001ab").is_none());
        assert!(decode("900115").is_some());
    }

    #[test]
    fn decode_keeps_nonexistent_days() {
        let decoded = decode("90043100009").unwrap();
        assert_eq!(decoded.day(), 31);
        assert!(decoded.to_naive_date().is_none());
    }

    // -- birthdate --

    #[test]
    fn birthdate_absent_for_impossible_dates() {
        assert_eq!(birthdate("90023000000"), None); // Feb 30
        assert_eq!(birthdate("90043100009"), None); // Apr 31
        assert_eq!(birthdate("01022900000"), None); // 1901 is not leap
        assert_eq!(birthdate("00422900000"), None); // 2100 is not leap
    }

    #[test]
    fn birthdate_leap_years() {
        assert_eq!(birthdate("00222977724"), Some(ymd(2000, 2, 29)));
        assert_eq!(birthdate("04222900052"), Some(ymd(2004, 2, 29)));
        assert_eq!(birthdate("00022900000"), None); // 1900 is not leap
    }

    // -- days_in_month --

    #[test]
    fn days_in_month_gregorian() {
        assert_eq!(days_in_month(1990, 1), Some(31));
        assert_eq!(days_in_month(1990, 4), Some(30));
        assert_eq!(days_in_month(1990, 12), Some(31));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2100, 2), Some(28));
        assert_eq!(days_in_month(1990, 13), None);
        assert_eq!(days_in_month(1990, 0), None);
    }

    // -- encode_birthdate --

    #[test]
    fn encode_birthdate_applies_offset() {
        assert_eq!(encode_birthdate(ymd(1990, 1, 15)).as_deref(), Some("900115"));
        assert_eq!(encode_birthdate(ymd(1885, 7, 4)).as_deref(), Some("858704"));
        assert_eq!(encode_birthdate(ymd(2004, 2, 29)).as_deref(), Some("042229"));
        assert_eq!(encode_birthdate(ymd(2123, 12, 31)).as_deref(), Some("235231"));
        assert_eq!(encode_birthdate(ymd(2200, 1, 1)).as_deref(), Some("006101"));
    }

    #[test]
    fn encode_birthdate_outside_range() {
        assert_eq!(encode_birthdate(ymd(1799, 12, 31)), None);
        assert_eq!(encode_birthdate(ymd(2300, 1, 1)), None);
    }
}
