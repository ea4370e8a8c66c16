//! # Inspect Subcommand
//!
//! Shows every rule outcome and every decoded field for a single
//! identifier, including the ones that a failing strict check would hide.

use anyhow::{Context, Result};
use clap::Args;

use pesel_core::{Gender, Pesel, PeselReport};

use crate::OutputFormat;

/// Arguments for the `pesel inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Identifier to inspect.
    #[arg(value_name = "PESEL")]
    pub pesel: String,

    /// Check the gender rule against this gender as well.
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the inspect subcommand.
///
/// Returns exit code 0 if the identifier is valid, 1 otherwise.
pub fn run_inspect(args: &InspectArgs) -> Result<u8> {
    let pesel = Pesel::new(args.pesel.as_str());
    let report = PeselReport::new(&pesel, args.gender);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&pesel, &report)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(if report.valid { 0 } else { 1 })
}

/// Aligned `key: value` listing.
pub fn render_text(pesel: &Pesel, report: &PeselReport) -> String {
    let verdict = |ok: bool| if ok { "ok" } else { "FAIL" };
    let checks = report.checks;

    let decoded = match pesel.decoded_date() {
        Some(decoded) => format!(
            "{} (century {})",
            decoded.iso_string(),
            decoded.century()
        ),
        None => "-".to_string(),
    };
    let birthdate = report
        .birthdate
        .map_or_else(|| "-".to_string(), |date| date.to_string());
    let gender = report.gender.map_or("-", Gender::as_str);
    let result = match report.failed_rule {
        None => "valid".to_string(),
        Some(rule) => format!("invalid ({rule})"),
    };

    let mut out = String::new();
    out.push_str(&format!("pesel:             {}\n", report.pesel));
    out.push_str(&format!("format:            {}\n", verdict(checks.format)));
    out.push_str(&format!("weights:           {}\n", verdict(checks.weights)));
    out.push_str(&format!("birthdate_pattern: {}\n", verdict(checks.birthdate_pattern)));
    out.push_str(&format!("birthdate:         {}\n", verdict(checks.birthdate)));
    out.push_str(&format!("gender_pattern:    {}\n", verdict(checks.gender_pattern)));
    out.push_str(&format!("decoded date:      {decoded}\n"));
    out.push_str(&format!("verified date:     {birthdate}\n"));
    out.push_str(&format!("gender:            {gender}\n"));
    out.push_str(&format!("result:            {result}\n"));
    out
}
