//! # Compose Subcommand
//!
//! Builds a checksum-correct identifier from a birthdate, a three-digit
//! serial and a gender. Useful for producing test fixtures.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use pesel_core::{Gender, Pesel};

/// Arguments for the `pesel compose` subcommand.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Birthdate to encode (YYYY-MM-DD, 1800-01-01 through 2299-12-31).
    #[arg(long)]
    pub birthdate: NaiveDate,

    /// Serial number (0-999).
    #[arg(long, default_value_t = 0)]
    pub serial: u16,

    /// Gender to encode in the parity digit.
    #[arg(long)]
    pub gender: Gender,
}

/// Execute the compose subcommand.
///
/// Returns exit code 0 after printing the identifier.
pub fn run_compose(args: &ComposeArgs) -> Result<u8> {
    let pesel = compose(args)?;
    println!("{pesel}");
    Ok(0)
}

/// Compose without printing.
pub fn compose(args: &ComposeArgs) -> Result<Pesel> {
    let pesel = Pesel::compose(args.birthdate, args.serial, args.gender)
        .context("cannot compose PESEL")?;
    tracing::debug!(pesel = %pesel, birthdate = %args.birthdate, "composed identifier");
    Ok(pesel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(date: (i32, u32, u32), serial: u16, gender: Gender) -> ComposeArgs {
        ComposeArgs {
            birthdate: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            serial,
            gender,
        }
    }

    #[test]
    fn composes_known_identifiers() {
        let male = compose(&args((1990, 1, 15), 123, Gender::Male)).unwrap();
        assert_eq!(male.as_str(), "90011512315");
        let female = compose(&args((1990, 1, 15), 123, Gender::Female)).unwrap();
        assert_eq!(female.as_str(), "90011512308");
    }

    #[test]
    fn composed_identifier_is_valid() {
        let pesel = compose(&args((2004, 2, 29), 5, Gender::Female)).unwrap();
        assert!(pesel.is_valid(Some(Gender::Female)));
        assert_eq!(pesel.birthdate(), NaiveDate::from_ymd_opt(2004, 2, 29));
    }

    #[test]
    fn rejects_out_of_range_components() {
        let err = compose(&args((1799, 12, 31), 0, Gender::Male)).unwrap_err();
        assert!(format!("{err:#}").contains("birthdate"));
        let err = compose(&args((1990, 1, 1), 1000, Gender::Male)).unwrap_err();
        assert!(format!("{err:#}").contains("serial"));
        assert!(run_compose(&args((2300, 1, 1), 0, Gender::Male)).is_err());
    }
}
