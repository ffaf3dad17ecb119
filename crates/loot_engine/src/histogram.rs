//! Drop histogram parallel to a loot table.

use serde::Serialize;

use crate::table::NormalizedLootTable;

/// Per-category drop counts, in the same order as the table they track.
///
/// Mutated only by [`Histogram::record`] (one entry +1) and
/// [`Histogram::reset`] (all entries to zero), so the total always equals the
/// number of recorded draws since the last reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    symbols: Vec<String>,
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Creates an all-zero histogram matching `table`.
    pub fn new(table: &NormalizedLootTable) -> Self {
        Self {
            symbols: table.entries().map(|(s, _)| s.to_string()).collect(),
            counts: vec![0; table.len()],
            total: 0,
        }
    }

    /// Records one drop of category `index`.
    ///
    /// # Panics
    ///
    /// If `index` is not a category of the tracked table.
    #[inline]
    pub fn record(&mut self, index: usize) {
        self.counts[index] += 1;
        self.total += 1;
    }

    /// Zeroes every count.
    pub fn reset(&mut self) {
        self.counts.fill(0);
        self.total = 0;
    }

    /// Sum of all counts.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of categories tracked.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the histogram tracks no categories.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts in table order.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// `(symbol, count)` pairs in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.symbols
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }

    /// Empirical frequencies, or `None` before the first draw.
    pub fn frequencies(&self) -> Option<Vec<f64>> {
        if self.total == 0 {
            return None;
        }
        let total = self.total as f64;
        Some(self.counts.iter().map(|&c| c as f64 / total).collect())
    }
}
