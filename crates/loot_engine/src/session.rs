//! Simulation session: sequence-driven loot drops into a histogram.
//!
//! # Architecture
//!
//! ```text
//! SimulationSession
//! ├── NormalizedLootTable   (target distribution)
//! ├── Histogram             (drops since last reset)
//! ├── SequenceSource        (present only while Active)
//! └── SeededRng             (table regeneration)
//! ```
//!
//! # States
//!
//! | State | Entered by | Draws allowed |
//! |-------|------------|---------------|
//! | `Idle` | construction, [`SimulationSession::deactivate`] | no |
//! | `Active` | [`SimulationSession::activate`] | yes |
//!
//! Every operation runs to completion against the session's own state; a
//! session is not shared between threads. Independent simulations use
//! independent sessions.

use std::ops::RangeInclusive;

use sequence_core::{SeededRng, SequenceMode, SequenceSource, UnitSequence};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::convergence::{abs_error, ConvergenceReport};
use crate::error::SessionError;
use crate::histogram::Histogram;
use crate::sampler::draw_category;
use crate::table::NormalizedLootTable;

/// Mixes the session seed before seeding the table generator, so that table
/// regeneration and white noise never share a stream.
const TABLE_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Lifecycle state of a [`SimulationSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No sequence selected.
    Idle,
    /// A sequence is selected and draws are accepted.
    Active,
}

/// One loot table, one histogram, and at most one active sequence.
///
/// # Examples
///
/// ```rust
/// use loot_engine::{LootTable, SimulationSession};
/// use sequence_core::SequenceMode;
///
/// let table = LootTable::reference().normalize().unwrap();
/// let mut session = SimulationSession::with_seed(table, 42);
///
/// session.activate(SequenceMode::GoldenRatio);
/// session.drop_n(100).unwrap();
/// assert_eq!(session.total_draws(), 100);
///
/// let report = session.converge(0.01).unwrap();
/// assert!(report.error <= 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationSession {
    table: NormalizedLootTable,
    histogram: Histogram,
    source: Option<SequenceSource>,
    draw_index: u64,
    seed: u64,
    table_rng: SeededRng,
    max_converge_draws: u64,
}

impl SimulationSession {
    /// Creates an idle session over `table` using `config`.
    ///
    /// Without a configured seed, one is drawn from entropy and retained;
    /// see [`SimulationSession::seed`].
    pub fn new(table: NormalizedLootTable, config: &SimulationConfig) -> Self {
        let seed = config
            .seed
            .unwrap_or_else(|| SeededRng::from_entropy().seed());

        Self {
            histogram: Histogram::new(&table),
            table,
            source: None,
            draw_index: 0,
            seed,
            table_rng: SeededRng::from_seed(seed ^ TABLE_SEED_MIX),
            max_converge_draws: config.max_converge_draws,
        }
    }

    /// Creates an idle session with default settings and a fixed seed.
    pub fn with_seed(table: NormalizedLootTable, seed: u64) -> Self {
        let config = SimulationConfig {
            seed: Some(seed),
            ..SimulationConfig::default()
        };
        Self::new(table, &config)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Selects `mode`, creating a fresh source and clearing the histogram.
    ///
    /// Any previously active source is discarded.
    pub fn activate(&mut self, mode: SequenceMode) {
        debug!(mode = %mode, seed = self.seed, "activating sequence");
        self.source = Some(SequenceSource::new(mode, self.seed));
        self.clear_draws();
    }

    /// Discards the active source and clears the histogram. The table is kept.
    pub fn deactivate(&mut self) {
        if let Some(source) = self.source.take() {
            debug!(mode = %source.mode(), "deactivating sequence");
        }
        self.clear_draws();
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        if self.source.is_some() {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    /// Active sequence mode, if any.
    pub fn mode(&self) -> Option<SequenceMode> {
        self.source.as_ref().map(UnitSequence::mode)
    }

    /// Seed driving randomised sequences; replaying a run needs only this.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    // ========================================================================
    // Draws
    // ========================================================================

    /// Draws one loot item and returns its category index.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoActiveSequence`] while idle
    /// - [`SessionError::Sequence`] if the source cannot produce the next
    ///   value; nothing is recorded in that case
    pub fn drop_one(&mut self) -> Result<usize, SessionError> {
        let source = self.source.as_mut().ok_or(SessionError::NoActiveSequence)?;
        let u = source.next(self.draw_index)?;

        let index = draw_category(u, &self.table);
        self.histogram.record(index);
        self.draw_index += 1;
        debug_assert_eq!(self.draw_index, self.histogram.total());

        Ok(index)
    }

    /// Draws `count` items in order.
    ///
    /// Stops at the first failing draw; draws before it are kept.
    pub fn drop_n(&mut self, count: u64) -> Result<(), SessionError> {
        for _ in 0..count {
            self.drop_one()?;
        }
        Ok(())
    }

    /// Draws until the error is at most `tolerance`, capped by the configured
    /// `max_converge_draws`.
    pub fn converge(&mut self, tolerance: f64) -> Result<ConvergenceReport, SessionError> {
        self.converge_with_cap(tolerance, self.max_converge_draws)
    }

    /// Draws until the error is at most `tolerance` or `cap` draws were made
    /// by this call.
    ///
    /// No draw is made if the histogram already meets the tolerance.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InvalidTolerance`] for negative or non-finite values
    /// - [`SessionError::NoActiveSequence`] while idle
    /// - [`SessionError::ConvergenceNotReached`] when the cap is hit; the
    ///   draws made are kept
    /// - [`SessionError::Sequence`] if the source runs out of range
    pub fn converge_with_cap(
        &mut self,
        tolerance: f64,
        cap: u64,
    ) -> Result<ConvergenceReport, SessionError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(SessionError::InvalidTolerance(tolerance));
        }
        if self.source.is_none() {
            return Err(SessionError::NoActiveSequence);
        }

        let mut draws = 0u64;
        let mut error = self.abs_error();

        while error > tolerance {
            if draws >= cap {
                warn!(
                    draws,
                    error,
                    tolerance,
                    cap,
                    "converge cap reached before tolerance"
                );
                return Err(SessionError::ConvergenceNotReached {
                    draws,
                    total_draws: self.total_draws(),
                    error,
                    tolerance,
                    cap,
                });
            }

            self.drop_one()?;
            draws += 1;
            error = self.abs_error();
        }

        info!(
            mode = ?self.mode(),
            draws,
            total_draws = self.total_draws(),
            error,
            "converged"
        );

        Ok(ConvergenceReport {
            draws,
            total_draws: self.total_draws(),
            error,
        })
    }

    // ========================================================================
    // Reset and regeneration
    // ========================================================================

    /// Zeroes the histogram and draw counter and rewinds the active source.
    ///
    /// The table and the selected mode are unchanged.
    pub fn reset(&mut self) {
        if let Some(source) = self.source.as_mut() {
            source.reset();
        }
        self.histogram.reset();
        self.draw_index = 0;
        debug!(mode = ?self.mode(), "session reset");
    }

    /// Replaces the table with a random one and resets the session.
    ///
    /// On error the current table, histogram and source are left untouched.
    pub fn regenerate_table(
        &mut self,
        count: RangeInclusive<usize>,
        weight: RangeInclusive<f64>,
    ) -> Result<(), SessionError> {
        let table = NormalizedLootTable::generate(&mut self.table_rng, count, weight)?;
        debug!(categories = table.len(), "loot table regenerated");
        self.install_table(table);
        Ok(())
    }

    /// Replaces the table with `table` and resets the session.
    pub fn replace_table(&mut self, table: NormalizedLootTable) {
        self.install_table(table);
    }

    fn install_table(&mut self, table: NormalizedLootTable) {
        self.histogram = Histogram::new(&table);
        self.table = table;
        self.reset();
    }

    fn clear_draws(&mut self) {
        self.histogram.reset();
        self.draw_index = 0;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Target distribution.
    pub fn table(&self) -> &NormalizedLootTable {
        &self.table
    }

    /// Drops since the last reset.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Number of drops since the last reset.
    pub fn total_draws(&self) -> u64 {
        self.histogram.total()
    }

    /// Current L1 error of the histogram against the table.
    pub fn abs_error(&self) -> f64 {
        abs_error(&self.table, &self.histogram)
    }

    /// Serialisable view of the session for display layers.
    pub fn snapshot(&self) -> SessionSnapshot {
        let frequencies = self
            .histogram
            .frequencies()
            .unwrap_or_else(|| vec![0.0; self.histogram.len()]);

        SessionSnapshot {
            mode: self.mode(),
            state: self.state(),
            seed: self.seed,
            table: self
                .table
                .entries()
                .map(|(symbol, weight)| TableEntry {
                    symbol: symbol.to_string(),
                    weight,
                })
                .collect(),
            histogram: self
                .histogram
                .entries()
                .zip(frequencies)
                .map(|((symbol, count), frequency)| HistogramEntry {
                    symbol: symbol.to_string(),
                    count,
                    frequency,
                })
                .collect(),
            total_draws: self.total_draws(),
            abs_error: self.abs_error(),
        }
    }
}

/// Symbol and normalised weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableEntry {
    /// Category symbol
    pub symbol: String,
    /// Normalised weight
    pub weight: f64,
}

/// Symbol, drop count and observed frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramEntry {
    /// Category symbol
    pub symbol: String,
    /// Drops since the last reset
    pub count: u64,
    /// Share of drops since the last reset; 0 before the first draw
    pub frequency: f64,
}

/// Point-in-time view of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Active mode, if any
    pub mode: Option<SequenceMode>,
    /// Lifecycle state
    pub state: SessionState,
    /// Seed in use
    pub seed: u64,
    /// Target table
    pub table: Vec<TableEntry>,
    /// Drop histogram
    pub histogram: Vec<HistogramEntry>,
    /// Drops since the last reset
    pub total_draws: u64,
    /// Current L1 error
    pub abs_error: f64,
}
