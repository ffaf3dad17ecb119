//! Drop command implementation
//!
//! Draws a fixed number of items under one sequence mode and prints the
//! resulting histogram against the target table.

use loot_engine::{SessionSnapshot, SimulationSession};
use sequence_core::SequenceMode;
use tracing::info;

use super::{emit, percent, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

/// Draw `count` items with `mode` and snapshot the session
pub fn build(config: &CliConfig, mode: SequenceMode, count: u64) -> Result<SessionSnapshot> {
    let mut session = SimulationSession::new(config.loot_table()?, &config.simulation);
    session.activate(mode);
    session.drop_n(count)?;

    info!(
        mode = %mode,
        draws = count,
        error = session.abs_error(),
        "drops complete"
    );

    Ok(session.snapshot())
}

fn render_text(snapshot: &SessionSnapshot) -> String {
    let mode = snapshot.mode.map(|m| m.name()).unwrap_or("none");
    let mut out = format!("Mode: {} (seed {})\n", mode, snapshot.seed);

    out.push_str(&format!(
        "{:<8} {:>8} {:>8} {:>10}\n",
        "SYMBOL", "TARGET", "OBSERVED", "COUNT"
    ));
    for (target, drops) in snapshot.table.iter().zip(&snapshot.histogram) {
        out.push_str(&format!(
            "{:<8} {:>8} {:>8} {:>10}\n",
            target.symbol,
            percent(target.weight),
            percent(drops.frequency),
            drops.count
        ));
    }

    out.push_str(&format!("Total draws: {}\n", snapshot.total_draws));
    out.push_str(&format!("Abs error:   {:.6}", snapshot.abs_error));
    out
}

/// Run the drop command
pub fn run(config: &CliConfig, mode: SequenceMode, count: u64, format: OutputFormat) -> Result<()> {
    let snapshot = build(config, mode, count)?;
    emit(format, &snapshot, render_text)
}
