//! # pesel-cli: Command-Line Interface for pesel-core
//!
//! Provides the `pesel` binary.
//!
//! ## Subcommands
//!
//! - `pesel validate`: Strict validation of one or more identifiers.
//! - `pesel inspect`: Every rule outcome and decoded field for one identifier.
//! - `pesel compose`: Build a valid identifier from birthdate, serial and gender.
//!
//! ```bash
//! pesel validate 44051401359 02070803628
//! pesel validate --stdin --gender female --format json < ids.txt
//! pesel inspect 00000000000
//! pesel compose --birthdate 1990-01-15 --serial 123 --gender male
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to `pesel-core` and return a process exit code:
//!   0 on success, 1 when an identifier is invalid, 2 on usage errors.
//! - Reports go to stdout; diagnostics go to stderr through `tracing`.

pub mod compose;
pub mod inspect;
pub mod validate;

use clap::ValueEnum;

/// How reports are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON documents.
    Json,
}
