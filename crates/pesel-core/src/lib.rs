#![deny(missing_docs)]

//! # pesel-core: Polish National Identification Numbers
//!
//! Decodes and validates PESEL numbers: eleven digits encoding a birthdate,
//! a serial, a gender parity digit, and a control digit. For any input
//! string the crate answers whether it is well formed, checksum-correct and
//! date-correct, and if so which birthdate and gender it encodes.
//!
//! ```
//! use pesel_core::{Gender, Pesel};
//!
//! let pesel = Pesel::new("44051401359");
//! assert!(pesel.is_valid(None));
//! assert_eq!(pesel.gender(), Some(Gender::Male));
//! assert_eq!(pesel.birthdate().map(|d| d.to_string()).as_deref(), Some("1944-05-14"));
//! ```
//!
//! ## Design Principles
//!
//! 1. **One immutable value type.** [`Pesel`] wraps any string and decodes it
//!    eagerly at construction. Nothing is mutated afterwards and the value is
//!    `Send + Sync`.
//!
//! 2. **Stateless rule modules.** Field extraction ([`fields`]), century
//!    resolution ([`century`]), date decoding ([`date`]), parity
//!    ([`gender`]), and the control digit ([`checksum`]) are free functions
//!    over `&str`. [`validation`] composes them.
//!
//! 3. **Predicates never fail.** `is_valid*` return `false`. Only
//!    [`Pesel::validate`] returns a [`ValidationError`], naming the first
//!    broken rule in the fixed order format → weights → birthdate pattern →
//!    birthdate → gender pattern → gender.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Tables (century offsets, month codes, weights, parity digits) are
//!   `const` data and not configurable.

pub mod century;
pub mod checksum;
pub mod date;
pub mod error;
pub mod fields;
pub mod gender;
pub mod pesel;
pub mod report;
pub mod validation;

// Re-export primary types at crate root for ergonomic imports.
pub use century::Century;
pub use date::DecodedDate;
pub use error::{PeselError, ValidationError};
pub use gender::Gender;
pub use pesel::Pesel;
pub use report::PeselReport;
pub use validation::{Checks, ValidationRule};
