//! Independent uniform draws.

use crate::error::SequenceError;
use crate::mode::SequenceMode;
use crate::prng::SeededRng;
use crate::source::UnitSequence;

/// White noise: every value is an independent uniform draw on [0, 1).
///
/// The draw index is ignored. Resetting reseeds the generator, so a reset
/// source replays the same stream.
#[derive(Clone, Debug)]
pub struct WhiteNoise {
    rng: SeededRng,
}

impl WhiteNoise {
    /// Creates a white noise source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRng::from_seed(seed),
        }
    }

    /// The seed this source rewinds to on reset.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl UnitSequence for WhiteNoise {
    #[inline]
    fn next(&mut self, _index: u64) -> Result<f64, SequenceError> {
        Ok(self.rng.gen_uniform())
    }

    fn reset(&mut self) {
        self.rng.reseed();
    }

    fn mode(&self) -> SequenceMode {
        SequenceMode::WhiteNoise
    }
}
