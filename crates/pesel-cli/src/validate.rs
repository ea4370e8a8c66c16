//! # Validate Subcommand
//!
//! Strict validation of identifiers supplied as arguments and/or on stdin,
//! one per line. Each identifier is reported as `OK` or with the first rule
//! it breaks.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Args;

use pesel_core::{Gender, Pesel, PeselReport};

use crate::OutputFormat;

/// Arguments for the `pesel validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifiers to validate.
    #[arg(value_name = "PESEL")]
    pub pesels: Vec<String>,

    /// Also read newline-separated identifiers from stdin.
    #[arg(long)]
    pub stdin: bool,

    /// Require the identifiers to encode this gender (female or male).
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if every identifier is valid, 1 if any is invalid,
/// 2 if no identifiers were supplied.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut inputs = args.pesels.clone();
    if args.stdin {
        let lines = read_identifiers(std::io::stdin().lock())
            .context("failed to read identifiers from stdin")?;
        inputs.extend(lines);
    }

    if inputs.is_empty() {
        eprintln!("Usage: pesel validate [--stdin] [--gender G] [--format F] [PESEL...]");
        return Ok(2);
    }

    let reports = validate_all(&inputs, args.gender);
    let invalid = reports.iter().filter(|report| !report.valid).count();
    tracing::info!(total = reports.len(), invalid, "validated identifiers");

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&reports).context("failed to serialize reports")?;
            println!("{json}");
        }
    }

    Ok(if invalid == 0 { 0 } else { 1 })
}

/// Build a report for every input.
pub fn validate_all(inputs: &[String], gender: Option<Gender>) -> Vec<PeselReport> {
    inputs
        .iter()
        .map(|input| PeselReport::new(&Pesel::new(input.as_str()), gender))
        .collect()
}

/// Read one identifier per line, dropping line terminators and blank lines.
///
/// Lines are otherwise passed through untouched: surrounding spaces make an
/// identifier invalid, and that is reported rather than hidden.
pub fn read_identifiers(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut identifiers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.is_empty() {
            identifiers.push(line.to_string());
        }
    }
    Ok(identifiers)
}

/// One line per report: `<pesel>: OK` or `<pesel>: FAIL (<rule>)`.
pub fn render_text(reports: &[PeselReport]) -> String {
    let mut out = String::new();
    for report in reports {
        match report.failed_rule {
            None => out.push_str(&format!("{}: OK\n", report.pesel)),
            Some(rule) => out.push_str(&format!("{}: FAIL ({rule})\n", report.pesel)),
        }
    }
    out
}
