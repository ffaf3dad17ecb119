//! Progressive best-candidate blue noise on the 1-D torus.
//!
//! Points are added one at a time. Each new point is the best of `n` uniform
//! candidates, where `n` is the current point count, and "best" means the
//! candidate whose nearest existing neighbour (measured with wrap-around, so
//! 0 and 1 are adjacent) is furthest away. New points therefore avoid
//! clustering near existing ones.
//!
//! ## Complexity
//!
//! Growing to `N` points evaluates `O(N²)` candidates, each with an
//! `O(log N)` binary search, plus an `O(N)` sorted insertion per point. This
//! is intended for interactive sample counts in the thousands, not millions.

use crate::error::SequenceError;
use crate::mode::SequenceMode;
use crate::prng::SeededRng;
use crate::source::UnitSequence;

/// Progressive best-candidate point set.
///
/// Two vectors are kept in sync by construction: `points` in growth order
/// (the emitted stream) and `sorted` in ascending order (for neighbour
/// search). Candidates are drawn in one batch per point into a reused
/// buffer.
///
/// # Examples
///
/// ```rust
/// use sequence_core::{BlueNoise, UnitSequence};
///
/// let mut blue = BlueNoise::new(42);
/// let first = blue.next(0).unwrap();
/// let second = blue.next(1).unwrap();
///
/// assert_eq!(blue.points(), &[first, second]);
/// ```
#[derive(Clone, Debug)]
pub struct BlueNoise {
    rng: SeededRng,
    points: Vec<f64>,
    sorted: Vec<f64>,
    candidates: Vec<f64>,
}

impl BlueNoise {
    /// Creates an empty point set whose candidates are drawn from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRng::from_seed(seed),
            points: Vec::new(),
            sorted: Vec::new(),
            candidates: Vec::new(),
        }
    }

    /// Points in the order they were added.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of points generated so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Resizes the point set to exactly `count` points.
    ///
    /// Growing adds points one at a time. Shrinking generates nothing and
    /// truncates to the first `count` points in growth order.
    pub fn resize(&mut self, count: usize) {
        if count <= self.points.len() {
            self.truncate(count);
            return;
        }

        self.points.reserve(count - self.points.len());
        self.sorted.reserve(count - self.sorted.len());
        while self.points.len() < count {
            self.grow_by_one();
        }
    }

    fn truncate(&mut self, count: usize) {
        if count == self.points.len() {
            return;
        }
        self.points.truncate(count);
        self.sorted.clear();
        self.sorted.extend_from_slice(&self.points);
        self.sorted.sort_by(|a, b| a.total_cmp(b));
    }

    fn grow_by_one(&mut self) {
        if self.sorted.is_empty() {
            let first = self.rng.gen_uniform();
            self.points.push(first);
            self.sorted.push(first);
            return;
        }

        self.candidates.resize(self.sorted.len(), 0.0);
        self.rng.fill_uniform(&mut self.candidates);

        let mut best_candidate = 0.0;
        let mut best_distance = f64::NEG_INFINITY;

        for &candidate in &self.candidates {
            let distance = toroidal_nearest_distance(&self.sorted, candidate);
            if distance > best_distance {
                best_distance = distance;
                best_candidate = candidate;
            }
        }

        self.points.push(best_candidate);
        let position = self.sorted.partition_point(|&p| p < best_candidate);
        self.sorted.insert(position, best_candidate);
    }
}

/// Distance on the unit torus from `candidate` to its nearest neighbour in
/// `sorted`, which must be non-empty and ascending.
pub(crate) fn toroidal_nearest_distance(sorted: &[f64], candidate: f64) -> f64 {
    debug_assert!(!sorted.is_empty());

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let position = sorted.partition_point(|&p| p < candidate);

    let left = if position == 0 {
        1.0 + candidate - max
    } else {
        candidate - sorted[position - 1]
    };

    let right = if position == sorted.len() {
        1.0 + min - candidate
    } else {
        sorted[position] - candidate
    };

    left.min(right)
}

impl UnitSequence for BlueNoise {
    /// Grows the point set to `index + 1` points and returns point `index`.
    #[inline]
    fn next(&mut self, index: u64) -> Result<f64, SequenceError> {
        let count = index as usize + 1;
        self.resize(count);
        Ok(self.points[index as usize])
    }

    fn reset(&mut self) {
        self.rng.reseed();
        self.points.clear();
        self.sorted.clear();
        self.candidates.clear();
    }

    fn mode(&self) -> SequenceMode {
        SequenceMode::BlueNoise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_interior_candidate() {
        let sorted = [0.1, 0.5, 0.9];
        assert_relative_eq!(toroidal_nearest_distance(&sorted, 0.3), 0.2, epsilon = 1e-12);
        assert_relative_eq!(toroidal_nearest_distance(&sorted, 0.55), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_wraps_below_minimum() {
        // Predecessor of 0.05 is 0.9 across the wrap: 1 + 0.05 - 0.9 = 0.15.
        let sorted = [0.1, 0.5, 0.9];
        assert_relative_eq!(toroidal_nearest_distance(&sorted, 0.05), 0.05, epsilon = 1e-12);
        assert_relative_eq!(toroidal_nearest_distance(&[0.2, 0.5], 0.0), 0.2, epsilon = 1e-12);
        assert_relative_eq!(toroidal_nearest_distance(&[0.3, 0.9], 0.02), 0.12, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_wraps_above_maximum() {
        // Successor of 0.95 is 0.1 across the wrap: 1 + 0.1 - 0.95 = 0.15.
        let sorted = [0.1, 0.5, 0.8];
        assert_relative_eq!(toroidal_nearest_distance(&sorted, 0.95), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_single_point() {
        let sorted = [0.25];
        assert_relative_eq!(toroidal_nearest_distance(&sorted, 0.75), 0.5, epsilon = 1e-12);
        assert_relative_eq!(toroidal_nearest_distance(&sorted, 0.1), 0.15, epsilon = 1e-12);
        assert_relative_eq!(toroidal_nearest_distance(&sorted, 0.9), 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_first_point_is_first_uniform_draw() {
        let mut blue = BlueNoise::new(11);
        let mut rng = SeededRng::from_seed(11);

        assert_eq!(blue.next(0).unwrap(), rng.gen_uniform());
    }

    #[test]
    fn test_second_point_is_single_candidate() {
        // With one existing point exactly one candidate is drawn, so point 2
        // is that candidate: trivially the one maximising distance to point 1.
        let mut blue = BlueNoise::new(11);
        let mut rng = SeededRng::from_seed(11);
        let first = rng.gen_uniform();
        let candidate = rng.gen_uniform();

        assert_eq!(blue.next(0).unwrap(), first);
        assert_eq!(blue.next(1).unwrap(), candidate);
    }

    #[test]
    fn test_third_point_is_farthest_candidate() {
        let mut blue = BlueNoise::new(2024);
        blue.resize(3);

        let mut rng = SeededRng::from_seed(2024);
        let first = rng.gen_uniform();
        let second = rng.gen_uniform();
        let mut sorted = vec![first, second];
        sorted.sort_by(|a, b| a.total_cmp(b));
        let a = rng.gen_uniform();
        let b = rng.gen_uniform();

        let expected = if toroidal_nearest_distance(&sorted, b) > toroidal_nearest_distance(&sorted, a)
        {
            b
        } else {
            a
        };

        assert_eq!(blue.points(), &[first, second, expected]);
    }

    #[test]
    fn test_candidate_batch_matches_point_count() {
        let mut blue = BlueNoise::new(13);
        blue.resize(6);

        // The sixth point was chosen from five candidates.
        assert_eq!(blue.candidates.len(), 5);
        for &candidate in &blue.candidates {
            assert!((0.0..1.0).contains(&candidate));
        }
        assert!(blue.candidates.contains(&blue.points()[5]));
    }

    #[test]
    fn test_growth_is_reproducible() {
        let mut first = BlueNoise::new(77);
        let mut second = BlueNoise::new(77);

        for index in 0..200 {
            assert_eq!(first.next(index), second.next(index));
        }
    }

    #[test]
    fn test_sorted_mirror_stays_in_sync() {
        let mut blue = BlueNoise::new(5);
        blue.resize(128);

        let mut expected = blue.points().to_vec();
        expected.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(blue.sorted, expected);
    }

    #[test]
    fn test_points_keep_minimum_spacing() {
        let mut blue = BlueNoise::new(99);
        blue.resize(64);

        let sorted = &blue.sorted;
        let mut min_gap = 1.0 + sorted[0] - sorted[sorted.len() - 1];
        for pair in sorted.windows(2) {
            min_gap = min_gap.min(pair[1] - pair[0]);
        }

        assert!(min_gap > 1e-4, "min gap {} too small", min_gap);
    }

    #[test]
    fn test_resize_truncates_without_generating() {
        let mut blue = BlueNoise::new(8);
        blue.resize(10);
        let prefix = blue.points()[..4].to_vec();

        blue.resize(4);
        assert_eq!(blue.points(), prefix.as_slice());
        assert_eq!(blue.sorted.len(), 4);

        blue.resize(4);
        assert_eq!(blue.len(), 4);
    }

    #[test]
    fn test_reset_replays_points() {
        let mut blue = BlueNoise::new(31);
        let before: Vec<f64> = (0..32).map(|i| blue.next(i).unwrap()).collect();

        blue.reset();
        assert!(blue.is_empty());

        let after: Vec<f64> = (0..32).map(|i| blue.next(i).unwrap()).collect();
        assert_eq!(before, after);
    }
}
