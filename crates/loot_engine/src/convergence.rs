//! Distance between a drop histogram and its target distribution.

use serde::Serialize;

use crate::histogram::Histogram;
use crate::table::NormalizedLootTable;

/// Reference converge tolerance on the L1 error.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// L1 distance between `target` and the empirical distribution of
/// `histogram`, in [0, 2].
///
/// An empty histogram carries no information and scores exactly 1.0.
///
/// # Examples
///
/// ```rust
/// use loot_engine::{abs_error, Histogram, LootTable};
///
/// let table = LootTable::from_pairs([("A", 1.0), ("B", 1.0)]).normalize().unwrap();
/// let mut histogram = Histogram::new(&table);
/// assert_eq!(abs_error(&table, &histogram), 1.0);
///
/// histogram.record(0);
/// assert!((abs_error(&table, &histogram) - 1.0).abs() < 1e-12);
///
/// histogram.record(1);
/// assert_eq!(abs_error(&table, &histogram), 0.0);
/// ```
pub fn abs_error(target: &NormalizedLootTable, histogram: &Histogram) -> f64 {
    debug_assert_eq!(target.len(), histogram.len());

    let total = histogram.total();
    if total == 0 {
        return 1.0;
    }

    let total = total as f64;
    target
        .weights()
        .zip(histogram.counts())
        .map(|(desired, &count)| (desired - count as f64 / total).abs())
        .sum()
}

/// Outcome of a successful converge run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergenceReport {
    /// Draws made by this converge call.
    pub draws: u64,
    /// Draws since the last reset.
    pub total_draws: u64,
    /// Error when the loop stopped; at most the tolerance.
    pub error: f64,
}
