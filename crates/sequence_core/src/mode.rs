//! Sequence mode identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::SequenceError;

/// Selects which sequence drives the loot draws.
///
/// The declaration order is the canonical listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SequenceMode {
    /// Independent uniform pseudo-random draws.
    WhiteNoise,
    /// Progressive best-candidate blue noise.
    BlueNoise,
    /// Golden ratio additive recurrence.
    GoldenRatio,
    /// 1-D Sobol low-discrepancy sequence.
    Sobol,
}

impl SequenceMode {
    /// All modes in canonical order.
    pub const ALL: [SequenceMode; 4] = [
        SequenceMode::WhiteNoise,
        SequenceMode::BlueNoise,
        SequenceMode::GoldenRatio,
        SequenceMode::Sobol,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SequenceMode::WhiteNoise => "White Noise",
            SequenceMode::BlueNoise => "Blue Noise",
            SequenceMode::GoldenRatio => "Golden Ratio",
            SequenceMode::Sobol => "Sobol",
        }
    }

    /// Short identifier accepted by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            SequenceMode::WhiteNoise => "white",
            SequenceMode::BlueNoise => "blue",
            SequenceMode::GoldenRatio => "golden",
            SequenceMode::Sobol => "sobol",
        }
    }

    /// Whether the mode consumes entropy from its seed.
    pub fn is_randomised(&self) -> bool {
        matches!(self, SequenceMode::WhiteNoise | SequenceMode::BlueNoise)
    }
}

/// Names of every sequence mode, in canonical order.
pub fn list_sequence_modes() -> Vec<&'static str> {
    SequenceMode::ALL.iter().map(SequenceMode::name).collect()
}

impl FromStr for SequenceMode {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "white" | "white-noise" => Ok(SequenceMode::WhiteNoise),
            "blue" | "blue-noise" => Ok(SequenceMode::BlueNoise),
            "golden" | "golden-ratio" => Ok(SequenceMode::GoldenRatio),
            "sobol" => Ok(SequenceMode::Sobol),
            _ => Err(SequenceError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for SequenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
