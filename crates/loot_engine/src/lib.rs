//! # Loot Engine
//!
//! Weighted loot-table sampling driven by interchangeable [0, 1) sequences,
//! with convergence measurement against the target distribution.
//!
//! ## Components
//!
//! - [`LootTable`] / [`NormalizedLootTable`]: validated weighted categories
//! - [`draw_category`]: linear-scan inverse-CDF sampler with last-category
//!   fallback
//! - [`Histogram`]: drop counts parallel to the table
//! - [`abs_error`]: L1 distance between drops and target
//! - [`SimulationSession`]: orchestrates draws, reset, regeneration and
//!   converge
//! - [`compare_modes`]: converges every sequence mode side by side
//!
//! ## Control Flow
//!
//! ```text
//! SequenceSource::next(i) ──► draw_category(u, table) ──► Histogram::record
//!                                                              │
//!                               converge loop ◄── abs_error ◄──┘
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use loot_engine::{LootTable, SimulationSession, DEFAULT_TOLERANCE};
//! use sequence_core::SequenceMode;
//!
//! let table = LootTable::reference().normalize().unwrap();
//! let mut session = SimulationSession::with_seed(table, 42);
//!
//! session.activate(SequenceMode::Sobol);
//! let report = session.converge(DEFAULT_TOLERANCE).unwrap();
//!
//! assert!(report.error <= DEFAULT_TOLERANCE);
//! assert_eq!(session.total_draws(), report.draws);
//! ```

mod compare;
mod config;
mod convergence;
mod error;
mod histogram;
mod sampler;
mod session;
mod table;

pub use compare::{compare_modes, ModeOutcome};
pub use config::{Bounds, ConfigError, SimulationConfig, DEFAULT_MAX_CONVERGE_DRAWS};
pub use convergence::{abs_error, ConvergenceReport, DEFAULT_TOLERANCE};
pub use error::{SessionError, TableError};
pub use histogram::Histogram;
pub use sampler::draw_category;
pub use session::{
    HistogramEntry, SessionSnapshot, SessionState, SimulationSession, TableEntry,
};
pub use table::{symbol_for, Category, LootTable, NormalizedLootTable};

pub use sequence_core::{list_sequence_modes, SequenceMode};
