//! Table command implementation
//!
//! Prints the normalised loot table, either as configured or freshly
//! generated from the configured ranges.

use loot_engine::{LootTable, SimulationSession, TableEntry};
use serde::Serialize;
use tracing::info;

use super::{emit, percent, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

/// Table command output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    /// Seed behind a generated table; absent for the configured table
    pub seed: Option<u64>,
    /// Categories in draw order
    pub entries: Vec<TableEntry>,
}

/// Build the table report
///
/// The configured `[[table]]` is not consulted when regenerating.
pub fn build(config: &CliConfig, regenerate: bool) -> Result<TableReport> {
    let table = if regenerate {
        LootTable::reference().normalize()?
    } else {
        config.loot_table()?
    };
    let mut session = SimulationSession::new(table, &config.simulation);

    if regenerate {
        session.regenerate_table(
            config.simulation.category_count.to_range(),
            config.simulation.weight.to_range(),
        )?;
        info!(
            seed = session.seed(),
            categories = session.table().len(),
            "generated loot table"
        );
    }

    let snapshot = session.snapshot();
    Ok(TableReport {
        seed: regenerate.then_some(snapshot.seed),
        entries: snapshot.table,
    })
}

fn render_text(report: &TableReport) -> String {
    let mut out = String::new();
    if let Some(seed) = report.seed {
        out.push_str(&format!("Generated with seed {}\n", seed));
    }
    out.push_str(&format!("{:<8} {:>8}\n", "SYMBOL", "WEIGHT"));
    for entry in &report.entries {
        out.push_str(&format!("{:<8} {:>8}\n", entry.symbol, percent(entry.weight)));
    }
    out.trim_end().to_string()
}

/// Run the table command
pub fn run(config: &CliConfig, regenerate: bool, format: OutputFormat) -> Result<()> {
    let report = build(config, regenerate)?;
    emit(format, &report, render_text)
}
