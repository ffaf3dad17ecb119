//! Side-by-side convergence of every sequence mode.
//!
//! Each mode runs in its own [`SimulationSession`] on its own rayon task, so
//! no mutable state is shared between them.

use rayon::prelude::*;
use sequence_core::SequenceMode;
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::error::SessionError;
use crate::session::SimulationSession;
use crate::table::NormalizedLootTable;

/// Convergence outcome of one mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeOutcome {
    /// Sequence mode
    pub mode: SequenceMode,
    /// Draws made
    pub draws: u64,
    /// Final L1 error
    pub error: f64,
    /// Whether the tolerance was met within the cap
    pub converged: bool,
}

/// Converges a fresh session per mode on `table` and reports the outcomes
/// in canonical mode order.
///
/// All sessions share the seed from `config` (or one entropy seed drawn
/// here), so randomised modes are replayable as a group. A mode that hits
/// the cap is reported with `converged: false` rather than failing the
/// whole comparison.
///
/// # Errors
///
/// Any session error other than [`SessionError::ConvergenceNotReached`],
/// e.g. an invalid tolerance.
pub fn compare_modes(
    table: &NormalizedLootTable,
    config: &SimulationConfig,
) -> Result<Vec<ModeOutcome>, SessionError> {
    let seed = config
        .seed
        .unwrap_or_else(|| sequence_core::SeededRng::from_entropy().seed());
    let config = SimulationConfig {
        seed: Some(seed),
        ..config.clone()
    };

    SequenceMode::ALL
        .par_iter()
        .map(|&mode| converge_mode(mode, table, &config))
        .collect()
}

fn converge_mode(
    mode: SequenceMode,
    table: &NormalizedLootTable,
    config: &SimulationConfig,
) -> Result<ModeOutcome, SessionError> {
    let mut session = SimulationSession::new(table.clone(), config);
    session.activate(mode);

    match session.converge(config.tolerance) {
        Ok(report) => Ok(ModeOutcome {
            mode,
            draws: report.draws,
            error: report.error,
            converged: true,
        }),
        Err(SessionError::ConvergenceNotReached { draws, error, .. }) => Ok(ModeOutcome {
            mode,
            draws,
            error,
            converged: false,
        }),
        Err(err) => Err(err),
    }
}
