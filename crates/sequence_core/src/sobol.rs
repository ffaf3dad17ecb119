//! One-dimensional Sobol sequence.
//!
//! In one dimension the Sobol sequence with the identity direction numbers is
//! the base-2 van der Corput sequence visited in Gray-code order. Each step
//! flips a single bit of a 32-bit accumulator: the bit selected by the ruler
//! function (trailing zero count) of the one-based draw number.

use crate::error::SequenceError;
use crate::mode::SequenceMode;
use crate::source::UnitSequence;

/// First draw index the 32-bit construction does not support.
pub const SOBOL_MAX_INDEX: u64 = 1 << 31;

/// Scale mapping the 32-bit accumulator onto [0, 1).
const ACCUMULATOR_SCALE: f64 = 1.0 / 4_294_967_296.0;

/// 1-D Sobol sequence with a running XOR accumulator.
///
/// # Examples
///
/// ```rust
/// use sequence_core::{Sobol, UnitSequence};
///
/// let mut sobol = Sobol::new();
/// let values: Vec<f64> = (0..4).map(|i| sobol.next(i).unwrap()).collect();
/// assert_eq!(values, vec![0.5, 0.75, 0.25, 0.375]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Sobol {
    accumulator: u32,
}

impl Sobol {
    /// Creates a sequence with a zero accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current accumulator bits.
    pub fn accumulator(&self) -> u32 {
        self.accumulator
    }
}

/// Number of trailing zero bits of `n`. `n` must be non-zero.
#[inline]
fn ruler(n: u64) -> u32 {
    debug_assert!(n != 0);
    n.trailing_zeros()
}

impl UnitSequence for Sobol {
    /// # Errors
    ///
    /// [`SequenceError::RangeExceeded`] for `index >= 2^31`; the accumulator
    /// is left untouched.
    #[inline]
    fn next(&mut self, index: u64) -> Result<f64, SequenceError> {
        if index >= SOBOL_MAX_INDEX {
            return Err(SequenceError::RangeExceeded {
                index,
                limit: SOBOL_MAX_INDEX,
            });
        }

        let direction = 1u32 << (31 - ruler(index + 1));
        self.accumulator ^= direction;
        Ok(f64::from(self.accumulator) * ACCUMULATOR_SCALE)
    }

    fn reset(&mut self) {
        self.accumulator = 0;
    }

    fn mode(&self) -> SequenceMode {
        SequenceMode::Sobol
    }
}
