//! Converge command implementation
//!
//! Draws under one sequence mode until the L1 error meets the tolerance or
//! the draw cap is reached.

use loot_engine::{SessionError, SimulationSession};
use sequence_core::SequenceMode;
use serde::Serialize;

use super::{emit, OutputFormat};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Converge command output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergeReport {
    /// Sequence mode
    pub mode: SequenceMode,
    /// Seed in use
    pub seed: u64,
    /// Target tolerance
    pub tolerance: f64,
    /// Draw cap for this run
    pub cap: u64,
    /// Whether the tolerance was met
    pub converged: bool,
    /// Draws made
    pub draws: u64,
    /// Final L1 error
    pub error: f64,
}

/// Converge `mode`, overriding the configured tolerance and cap if given
pub fn build(
    config: &CliConfig,
    mode: SequenceMode,
    tolerance: Option<f64>,
    max_draws: Option<u64>,
) -> Result<ConvergeReport> {
    let mut simulation = config.simulation.clone();
    if let Some(cap) = max_draws {
        if cap == 0 {
            return Err(CliError::invalid_argument("--max-draws must be positive"));
        }
        simulation.max_converge_draws = cap;
    }
    let tolerance = tolerance.unwrap_or(simulation.tolerance);

    let mut session = SimulationSession::new(config.loot_table()?, &simulation);
    session.activate(mode);

    let (converged, draws, error) = match session.converge(tolerance) {
        Ok(report) => (true, report.draws, report.error),
        Err(SessionError::ConvergenceNotReached { draws, error, .. }) => (false, draws, error),
        Err(err) => return Err(err.into()),
    };

    Ok(ConvergeReport {
        mode,
        seed: session.seed(),
        tolerance,
        cap: simulation.max_converge_draws,
        converged,
        draws,
        error,
    })
}

fn render_text(report: &ConvergeReport) -> String {
    if report.converged {
        format!(
            "{} converged to error {:.6} (tolerance {}) after {} draws",
            report.mode.name(),
            report.error,
            report.tolerance,
            report.draws
        )
    } else {
        format!(
            "{} did not converge: error {:.6} above tolerance {} after {} draws (cap {})",
            report.mode.name(),
            report.error,
            report.tolerance,
            report.draws,
            report.cap
        )
    }
}

/// Run the converge command
pub fn run(
    config: &CliConfig,
    mode: SequenceMode,
    tolerance: Option<f64>,
    max_draws: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let report = build(config, mode, tolerance, max_draws)?;
    emit(format, &report, render_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> CliConfig {
        let mut config = CliConfig::default();
        config.simulation.seed = Some(seed);
        config
    }

    #[test]
    fn test_sobol_converges_with_default_tolerance() {
        let report = build(&seeded(1), SequenceMode::Sobol, None, None).unwrap();

        assert!(report.converged);
        assert_eq!(report.tolerance, 0.01);
        assert!(report.error <= 0.01);
        assert!(report.draws > 0);
    }

    #[test]
    fn test_cap_reports_non_convergence() {
        let report = build(&seeded(1), SequenceMode::WhiteNoise, Some(0.0), Some(25)).unwrap();

        assert!(!report.converged);
        assert_eq!(report.draws, 25);
        assert_eq!(report.cap, 25);
        assert!(render_text(&report).contains("did not converge"));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let result = build(&seeded(1), SequenceMode::Sobol, None, Some(0));
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let result = build(&seeded(1), SequenceMode::Sobol, Some(-0.5), None);
        assert!(matches!(
            result,
            Err(CliError::Session(SessionError::InvalidTolerance(_)))
        ));
    }

    #[test]
    fn test_text_output() {
        let report = build(&seeded(1), SequenceMode::GoldenRatio, Some(0.05), None).unwrap();
        let text = render_text(&report);
        assert!(text.starts_with("Golden Ratio converged"));
    }
}
