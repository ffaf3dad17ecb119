//! # Sequence Core
//!
//! Stateful generators producing canonical streams of values in [0, 1).
//!
//! Four interchangeable sources are provided, each with a different
//! convergence profile when used to drive inverse-CDF sampling:
//!
//! | Mode | Kind | Determinism |
//! |------|------|-------------|
//! | [`WhiteNoise`] | independent uniform draws | seeded |
//! | [`BlueNoise`] | progressive best-candidate point set | seeded |
//! | [`GoldenRatio`] | additive recurrence by the golden ratio conjugate | fully deterministic |
//! | [`Sobol`] | 1-D Sobol (van der Corput in Gray-code order) | fully deterministic |
//!
//! ## Dispatch
//!
//! The variant set is closed, so [`SequenceSource`] is an enum over the four
//! concrete generators. Each generator also implements [`UnitSequence`], which
//! keeps its own invariants local and allows generic use where the concrete
//! type is known. No `Box<dyn Trait>` appears in the draw path.
//!
//! ## Draw Index Contract
//!
//! Every call to [`UnitSequence::next`] passes the zero-based index of the
//! logical draw. Indices must be consumed exactly once and in order; the
//! Sobol accumulator in particular depends on which index was consumed last.
//!
//! ## Usage Example
//!
//! ```rust
//! use sequence_core::{SequenceMode, SequenceSource, UnitSequence};
//!
//! let mut source = SequenceSource::new(SequenceMode::Sobol, 42);
//!
//! assert_eq!(source.next(0).unwrap(), 0.5);
//! assert_eq!(source.next(1).unwrap(), 0.75);
//!
//! source.reset();
//! assert_eq!(source.next(0).unwrap(), 0.5);
//! ```

mod blue_noise;
mod error;
mod golden_ratio;
mod mode;
mod prng;
mod sobol;
mod source;
mod white_noise;

// Public re-exports
pub use blue_noise::BlueNoise;
pub use error::SequenceError;
pub use golden_ratio::{GoldenRatio, GOLDEN_RATIO_CONJUGATE};
pub use mode::{list_sequence_modes, SequenceMode};
pub use prng::SeededRng;
pub use sobol::{Sobol, SOBOL_MAX_INDEX};
pub use source::{SequenceSource, UnitSequence};
pub use white_noise::WhiteNoise;

#[cfg(test)]
mod tests;
