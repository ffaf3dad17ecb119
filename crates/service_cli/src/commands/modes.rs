//! Modes command implementation
//!
//! Lists the available sequence modes.

use sequence_core::SequenceMode;
use serde::Serialize;

use super::{emit, OutputFormat};
use crate::Result;

/// One listed mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeEntry {
    /// Identifier accepted by `--mode`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Whether draws depend on the seed
    pub randomised: bool,
}

/// Modes command output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModesReport {
    /// Modes in canonical order
    pub modes: Vec<ModeEntry>,
}

/// Collect every mode in canonical order
pub fn build() -> ModesReport {
    let modes = SequenceMode::ALL
        .iter()
        .map(|mode| ModeEntry {
            id: mode.id(),
            name: mode.name(),
            randomised: mode.is_randomised(),
        })
        .collect();

    ModesReport { modes }
}

fn render_text(report: &ModesReport) -> String {
    let mut out = format!("{:<8} {:<14} {}\n", "ID", "NAME", "SEEDED");
    for entry in &report.modes {
        out.push_str(&format!(
            "{:<8} {:<14} {}\n",
            entry.id,
            entry.name,
            if entry.randomised { "yes" } else { "no" }
        ));
    }
    out.trim_end().to_string()
}

/// Run the modes command
pub fn run(format: OutputFormat) -> Result<()> {
    emit(format, &build(), render_text)
}
