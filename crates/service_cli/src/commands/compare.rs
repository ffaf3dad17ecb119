//! Compare command implementation
//!
//! Converges all four sequence modes in parallel on the same table and seed.

use loot_engine::{compare_modes, ModeOutcome};
use sequence_core::SeededRng;
use serde::Serialize;
use tracing::info;

use super::{emit, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

/// Compare command output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareReport {
    /// Seed shared by every mode
    pub seed: u64,
    /// Target tolerance
    pub tolerance: f64,
    /// Per-mode outcomes in canonical order
    pub outcomes: Vec<ModeOutcome>,
}

/// Converge every mode, overriding the configured tolerance if given
pub fn build(config: &CliConfig, tolerance: Option<f64>) -> Result<CompareReport> {
    let mut simulation = config.simulation.clone();
    let seed = simulation
        .seed
        .unwrap_or_else(|| SeededRng::from_entropy().seed());
    simulation.seed = Some(seed);
    if let Some(tolerance) = tolerance {
        simulation.tolerance = tolerance;
    }

    let outcomes = compare_modes(&config.loot_table()?, &simulation)?;
    info!(
        seed,
        converged = outcomes.iter().filter(|o| o.converged).count(),
        "comparison complete"
    );

    Ok(CompareReport {
        seed,
        tolerance: simulation.tolerance,
        outcomes,
    })
}

fn render_text(report: &CompareReport) -> String {
    let mut out = format!(
        "Tolerance {} (seed {})\n{:<14} {:>10} {:>10}  {}\n",
        report.tolerance, report.seed, "MODE", "DRAWS", "ERROR", "STATUS"
    );
    for outcome in &report.outcomes {
        out.push_str(&format!(
            "{:<14} {:>10} {:>10.6}  {}\n",
            outcome.mode.name(),
            outcome.draws,
            outcome.error,
            if outcome.converged {
                "converged"
            } else {
                "capped"
            }
        ));
    }
    out.trim_end().to_string()
}

/// Run the compare command
pub fn run(config: &CliConfig, tolerance: Option<f64>, format: OutputFormat) -> Result<()> {
    let report = build(config, tolerance)?;
    emit(format, &report, render_text)
}
