//! Golden ratio additive recurrence.

use crate::error::SequenceError;
use crate::mode::SequenceMode;
use crate::source::UnitSequence;

/// Fractional part of `1 / φ`, the additive step of the recurrence.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.61803398875;

/// Golden ratio sequence: `sum = frac(sum + φ⁻¹)`.
///
/// An irrational rotation of the unit circle. Deterministic, starts at zero,
/// and returns the accumulator after each step (so the first value is
/// `φ⁻¹` itself).
///
/// # Examples
///
/// ```rust
/// use sequence_core::{GoldenRatio, UnitSequence, GOLDEN_RATIO_CONJUGATE};
///
/// let mut golden = GoldenRatio::new();
/// assert_eq!(golden.next(0).unwrap(), GOLDEN_RATIO_CONJUGATE);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GoldenRatio {
    sum: f64,
}

impl GoldenRatio {
    /// Creates a recurrence with a zero accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current accumulator value.
    pub fn sum(&self) -> f64 {
        self.sum
    }
}

impl UnitSequence for GoldenRatio {
    #[inline]
    fn next(&mut self, _index: u64) -> Result<f64, SequenceError> {
        self.sum = (self.sum + GOLDEN_RATIO_CONJUGATE).fract();
        Ok(self.sum)
    }

    fn reset(&mut self) {
        self.sum = 0.0;
    }

    fn mode(&self) -> SequenceMode {
        SequenceMode::GoldenRatio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_values() {
        let mut golden = GoldenRatio::new();

        assert_relative_eq!(golden.next(0).unwrap(), 0.61803398875, epsilon = 1e-12);
        assert_relative_eq!(golden.next(1).unwrap(), 0.2360679775, epsilon = 1e-12);
        assert_relative_eq!(golden.next(2).unwrap(), 0.85410196625, epsilon = 1e-12);
    }

    #[test]
    fn test_accumulator_stays_in_unit_interval() {
        let mut golden = GoldenRatio::new();
        for index in 0..100_000 {
            let value = golden.next(index).unwrap();
            assert!((0.0..1.0).contains(&value));
            assert_eq!(value, golden.sum());
        }
    }

    #[test]
    fn test_no_repeats_in_ten_thousand_draws() {
        let mut golden = GoldenRatio::new();
        let mut values: Vec<f64> = (0..10_000).map(|i| golden.next(i).unwrap()).collect();

        values.sort_by(|a, b| a.total_cmp(b));
        for pair in values.windows(2) {
            assert_ne!(pair[0], pair[1], "repeated value {}", pair[0]);
        }
    }

    #[test]
    fn test_reset_returns_to_zero() {
        let mut golden = GoldenRatio::new();
        for index in 0..17 {
            golden.next(index).unwrap();
        }

        golden.reset();
        assert_eq!(golden.sum(), 0.0);
        assert_eq!(golden.next(0).unwrap(), GOLDEN_RATIO_CONJUGATE);
    }
}
