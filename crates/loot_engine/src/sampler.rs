//! Inverse-CDF categorical sampling by linear scan.

use crate::table::NormalizedLootTable;

/// Maps a uniform value `u` in [0, 1) to a category index of `table`.
///
/// Walks the categories in order, subtracting each weight from `u`, and
/// returns the first category at which the remainder drops to zero or
/// below. If floating-point residue leaves the remainder positive after the
/// last subtraction, the last category is returned. This fallback shapes the
/// statistics at the upper table boundary and must not be changed.
///
/// # Examples
///
/// ```rust
/// use loot_engine::{draw_category, LootTable};
///
/// let table = LootTable::from_pairs([("A", 1.0), ("B", 3.0)]).normalize().unwrap();
///
/// assert_eq!(draw_category(0.1, &table), 0);
/// assert_eq!(draw_category(0.25, &table), 0);
/// assert_eq!(draw_category(0.3, &table), 1);
/// ```
#[inline]
pub fn draw_category(u: f64, table: &NormalizedLootTable) -> usize {
    let last = table.len() - 1;
    let mut remainder = u;

    for (index, weight) in table.weights().enumerate() {
        remainder -= weight;
        if remainder <= 0.0 || index == last {
            return index;
        }
    }

    last
}
