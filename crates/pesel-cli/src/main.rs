//! # pesel CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pesel_cli::compose::{run_compose, ComposeArgs};
use pesel_cli::inspect::{run_inspect, InspectArgs};
use pesel_cli::validate::{run_validate, ValidateArgs};

/// PESEL decoder and validator.
///
/// Validates Polish national identification numbers, shows the birthdate and
/// gender they encode, and composes new ones.
#[derive(Parser, Debug)]
#[command(name = "pesel", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Strictly validate identifiers given as arguments or on stdin.
    Validate(ValidateArgs),

    /// Show every rule outcome and decoded field for one identifier.
    Inspect(InspectArgs),

    /// Build a valid identifier from birthdate, serial and gender.
    Compose(ComposeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout carries reports; keep diagnostics off it.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "pesel CLI starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Inspect(args) => run_inspect(&args),
        Commands::Compose(args) => run_compose(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
