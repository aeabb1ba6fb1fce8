//! Report rendering
//!
//! Turns an assembled [`AuditReport`] into the text written to stdout. The
//! formatter never filters or reorders: what the collector built is what gets
//! rendered, byte-identical on every call.

use serde::{Deserialize, Serialize};

use crate::audit::AuditReport;
use crate::cli::OutputFormat;
use crate::error::Result;

pub mod csv;
pub mod json;

/// What CSV rendering does with an API that has no `resources`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingResources {
    /// Emit no rows for the API
    #[default]
    Skip,
    /// Abort rendering with an error
    Fail,
}

/// Render a report in the requested format.
///
/// `missing` only affects [`OutputFormat::Csv`]; JSON output shows such APIs
/// without a `resources` key.
pub fn render(
    report: &AuditReport,
    format: OutputFormat,
    missing: MissingResources,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::format_compact(report)?),
        OutputFormat::JsonPretty => Ok(json::format_pretty(report)?),
        OutputFormat::Csv => Ok(csv::format_rows(report, missing)?),
    }
}

/// Render a report and print it to stdout.
///
/// Prints nothing at all when the rendered output is empty, which happens for
/// CSV reports without any rows.
pub fn print(report: &AuditReport, format: OutputFormat, missing: MissingResources) -> Result<()> {
    let output = render(report, format, missing)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
