//! The common sequence contract and its closed enum dispatch.

use crate::blue_noise::BlueNoise;
use crate::error::SequenceError;
use crate::golden_ratio::GoldenRatio;
use crate::mode::SequenceMode;
use crate::sobol::Sobol;
use crate::white_noise::WhiteNoise;

/// A stateful generator of values in [0, 1).
///
/// # Index Contract
///
/// `next` must be called exactly once per logical draw with a monotonically
/// increasing, zero-based `index`. Skipping or replaying an index is not
/// supported: index-coupled sources (Sobol) would silently emit a different
/// stream.
pub trait UnitSequence {
    /// Advances the sequence and returns the value for draw `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::RangeExceeded`] when `index` lies beyond what
    /// the construction can represent.
    fn next(&mut self, index: u64) -> Result<f64, SequenceError>;

    /// Restores the state the sequence had right after construction.
    fn reset(&mut self);

    /// The mode this generator implements.
    fn mode(&self) -> SequenceMode;
}

/// One of the four sequence generators, selected by [`SequenceMode`].
///
/// Each variant exclusively owns its state. Sources are created on mode
/// selection, reset on explicit request, and dropped on mode change.
#[derive(Clone, Debug)]
pub enum SequenceSource {
    /// Independent uniform draws.
    WhiteNoise(WhiteNoise),
    /// Progressive best-candidate blue noise.
    BlueNoise(BlueNoise),
    /// Golden ratio additive recurrence.
    GoldenRatio(GoldenRatio),
    /// 1-D Sobol sequence.
    Sobol(Sobol),
}

impl SequenceSource {
    /// Creates a fresh source for `mode`.
    ///
    /// `seed` drives the randomised modes and is ignored by the deterministic
    /// ones.
    pub fn new(mode: SequenceMode, seed: u64) -> Self {
        match mode {
            SequenceMode::WhiteNoise => Self::WhiteNoise(WhiteNoise::new(seed)),
            SequenceMode::BlueNoise => Self::BlueNoise(BlueNoise::new(seed)),
            SequenceMode::GoldenRatio => Self::GoldenRatio(GoldenRatio::new()),
            SequenceMode::Sobol => Self::Sobol(Sobol::new()),
        }
    }
}

impl UnitSequence for SequenceSource {
    #[inline]
    fn next(&mut self, index: u64) -> Result<f64, SequenceError> {
        match self {
            Self::WhiteNoise(source) => source.next(index),
            Self::BlueNoise(source) => source.next(index),
            Self::GoldenRatio(source) => source.next(index),
            Self::Sobol(source) => source.next(index),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::WhiteNoise(source) => source.reset(),
            Self::BlueNoise(source) => source.reset(),
            Self::GoldenRatio(source) => source.reset(),
            Self::Sobol(source) => source.reset(),
        }
    }

    fn mode(&self) -> SequenceMode {
        match self {
            Self::WhiteNoise(_) => SequenceMode::WhiteNoise,
            Self::BlueNoise(_) => SequenceMode::BlueNoise,
            Self::GoldenRatio(_) => SequenceMode::GoldenRatio,
            Self::Sobol(_) => SequenceMode::Sobol,
        }
    }
}
