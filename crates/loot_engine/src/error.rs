//! Error types for loot tables and simulation sessions.
//!
//! This module provides:
//! - `TableError`: invalid loot tables and regeneration ranges
//! - `SessionError`: failures of session operations

use sequence_core::SequenceError;
use thiserror::Error;

/// Categorised loot table errors.
///
/// Raised at table construction or regeneration; a table that fails
/// validation is never installed into a session.
///
/// # Examples
/// ```
/// use loot_engine::TableError;
///
/// let err = TableError::NonPositiveTotal(0.0);
/// assert_eq!(format!("{}", err), "Invalid table: total weight 0 must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// The table has no categories.
    #[error("Invalid table: no categories")]
    Empty,

    /// A category weight is below zero.
    #[error("Invalid table: category '{symbol}' has negative weight {weight}")]
    NegativeWeight {
        /// Offending category symbol
        symbol: String,
        /// Offending weight
        weight: f64,
    },

    /// A category weight is NaN or infinite.
    #[error("Invalid table: category '{symbol}' has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Offending category symbol
        symbol: String,
        /// Offending weight
        weight: f64,
    },

    /// Weights sum to zero, so normalisation is undefined.
    #[error("Invalid table: total weight {0} must be positive")]
    NonPositiveTotal(f64),

    /// A regeneration range is empty or out of domain.
    #[error("Invalid {name} range: {reason}")]
    InvalidRange {
        /// Which range was rejected
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors from [`SimulationSession`](crate::SimulationSession) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Table construction or regeneration failed.
    #[error(transparent)]
    InvalidTable(#[from] TableError),

    /// The active sequence could not produce a value.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// A draw was requested while no sequence mode is selected.
    #[error("No active sequence: select a sequence mode before drawing")]
    NoActiveSequence,

    /// Converge was asked for a tolerance it cannot evaluate against.
    #[error("Invalid tolerance {0}: must be finite and non-negative")]
    InvalidTolerance(f64),

    /// Converge hit its draw cap before meeting the tolerance.
    ///
    /// Not fatal: the draws made are kept and converge may be retried.
    #[error(
        "Convergence not reached: error {error:.6} above tolerance {tolerance} after {draws} draws (cap {cap})"
    )]
    ConvergenceNotReached {
        /// Draws performed by the failed converge call
        draws: u64,
        /// Draws since the last reset, including earlier calls
        total_draws: u64,
        /// Error when the cap was hit
        error: f64,
        /// Requested tolerance
        tolerance: f64,
        /// Draw cap in force
        cap: u64,
    },
}
