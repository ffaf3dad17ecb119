//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a
//! serialisable report first and render it afterwards, so text and JSON output
//! always describe the same result.

pub mod compare;
pub mod converge;
pub mod drop;
pub mod modes;
pub mod table;

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::Result;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Prints `report` to stdout in the requested format.
pub(crate) fn emit<T: Serialize>(
    format: OutputFormat,
    report: &T,
    render_text: impl FnOnce(&T) -> String,
) -> Result<()> {
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), format, report, render_text)
}

/// Writes `report` to `out` in the requested format.
pub(crate) fn write_report<W: Write, T: Serialize>(
    out: &mut W,
    format: OutputFormat,
    report: &T,
    render_text: impl FnOnce(&T) -> String,
) -> Result<()> {
    let output = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    };
    writeln!(out, "{}", output)?;
    out.flush()?;
    Ok(())
}

/// Formats a probability or error as a percentage with two decimals.
pub(crate) fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
