//! Loot tables: raw weighted categories and their normalised form.

use std::ops::RangeInclusive;

use rand::Rng;
use sequence_core::SeededRng;
use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// A labelled category with a non-negative weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display label
    pub symbol: String,
    /// Relative weight (raw) or probability (normalised)
    pub weight: f64,
}

impl Category {
    /// Creates a category.
    pub fn new(symbol: impl Into<String>, weight: f64) -> Self {
        Self {
            symbol: symbol.into(),
            weight,
        }
    }
}

/// An ordered, unvalidated list of weighted categories.
///
/// Weights are relative; call [`LootTable::normalize`] to validate and obtain
/// probabilities.
///
/// # Examples
///
/// ```rust
/// use loot_engine::LootTable;
///
/// let table = LootTable::from_pairs([("A", 10.0), ("B", 30.0), ("C", 1.0)]);
/// let normalized = table.normalize().unwrap();
///
/// assert!((normalized.weight(1) - 30.0 / 41.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LootTable {
    categories: Vec<Category>,
}

impl LootTable {
    /// Creates a table from categories in draw order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Creates a table from `(symbol, weight)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(symbol, weight)| Category::new(symbol, weight))
                .collect(),
        )
    }

    /// The reference table: `A:10, B:30, C:1`.
    pub fn reference() -> Self {
        Self::from_pairs([("A", 10.0), ("B", 30.0), ("C", 1.0)])
    }

    /// Categories in draw order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Sum of raw weights.
    pub fn total_weight(&self) -> f64 {
        self.categories.iter().map(|c| c.weight).sum()
    }

    /// Validates the table and divides every weight by the total.
    ///
    /// # Errors
    ///
    /// - [`TableError::Empty`] for a table without categories
    /// - [`TableError::NonFiniteWeight`] for NaN or infinite weights
    /// - [`TableError::NegativeWeight`] for weights below zero
    /// - [`TableError::NonPositiveTotal`] when all weights are zero
    pub fn normalize(&self) -> Result<NormalizedLootTable, TableError> {
        if self.categories.is_empty() {
            return Err(TableError::Empty);
        }

        for category in &self.categories {
            if !category.weight.is_finite() {
                return Err(TableError::NonFiniteWeight {
                    symbol: category.symbol.clone(),
                    weight: category.weight,
                });
            }
            if category.weight < 0.0 {
                return Err(TableError::NegativeWeight {
                    symbol: category.symbol.clone(),
                    weight: category.weight,
                });
            }
        }

        let total = self.total_weight();
        if total <= 0.0 {
            return Err(TableError::NonPositiveTotal(total));
        }

        let categories = self
            .categories
            .iter()
            .map(|c| Category::new(c.symbol.clone(), c.weight / total))
            .collect();

        Ok(NormalizedLootTable { categories })
    }
}

/// A validated, non-empty loot table whose weights sum to 1.
///
/// Immutable once built; sessions replace it wholesale on regeneration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedLootTable {
    categories: Vec<Category>,
}

impl NormalizedLootTable {
    /// Generates a random table.
    ///
    /// The category count is drawn uniformly from `count`, each weight
    /// uniformly from `weight`, and symbols are assigned sequentially
    /// (`A`, `B`, …, `Z`, `AA`, …).
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidRange`] for an empty or out-of-domain range, and
    /// any [`LootTable::normalize`] error (e.g. every weight drawn as zero).
    pub fn generate(
        rng: &mut SeededRng,
        count: RangeInclusive<usize>,
        weight: RangeInclusive<f64>,
    ) -> Result<Self, TableError> {
        validate_count_range(&count)?;
        validate_weight_range(&weight)?;

        let rng = rng.inner_mut();
        let category_count = rng.gen_range(count);
        let raw = LootTable::new(
            (0..category_count)
                .map(|index| Category::new(symbol_for(index), rng.gen_range(weight.clone())))
                .collect(),
        );

        raw.normalize()
    }

    /// Categories in draw order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories; always at least one.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false: normalisation rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Probability of category `index`.
    pub fn weight(&self, index: usize) -> f64 {
        self.categories[index].weight
    }

    /// Symbol of category `index`.
    pub fn symbol(&self, index: usize) -> &str {
        &self.categories[index].symbol
    }

    /// Probabilities in draw order.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.categories.iter().map(|c| c.weight)
    }

    /// `(symbol, probability)` pairs in draw order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.categories
            .iter()
            .map(|c| (c.symbol.as_str(), c.weight))
    }
}

impl TryFrom<LootTable> for NormalizedLootTable {
    type Error = TableError;

    fn try_from(table: LootTable) -> Result<Self, Self::Error> {
        table.normalize()
    }
}

/// Sequential symbol for category `index`: `A`..`Z`, then `AA`, `AB`, …
pub fn symbol_for(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index;
    loop {
        letters.push(char::from(b'A' + (remaining % 26) as u8));
        if remaining < 26 {
            break;
        }
        remaining = remaining / 26 - 1;
    }
    letters.iter().rev().collect()
}

fn validate_count_range(count: &RangeInclusive<usize>) -> Result<(), TableError> {
    if *count.start() == 0 {
        return Err(TableError::InvalidRange {
            name: "category count",
            reason: "minimum must be at least 1".to_string(),
        });
    }
    if count.start() > count.end() {
        return Err(TableError::InvalidRange {
            name: "category count",
            reason: format!("minimum {} exceeds maximum {}", count.start(), count.end()),
        });
    }
    Ok(())
}

fn validate_weight_range(weight: &RangeInclusive<f64>) -> Result<(), TableError> {
    let (min, max) = (*weight.start(), *weight.end());
    if !min.is_finite() || !max.is_finite() {
        return Err(TableError::InvalidRange {
            name: "weight",
            reason: format!("bounds [{}, {}] must be finite", min, max),
        });
    }
    if min < 0.0 {
        return Err(TableError::InvalidRange {
            name: "weight",
            reason: format!("minimum {} must be non-negative", min),
        });
    }
    if min > max {
        return Err(TableError::InvalidRange {
            name: "weight",
            reason: format!("minimum {} exceeds maximum {}", min, max),
        });
    }
    Ok(())
}
