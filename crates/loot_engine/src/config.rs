//! Simulation configuration management.
//!
//! Handles loading simulation settings from TOML files with environment
//! variable override support.

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convergence::DEFAULT_TOLERANCE;

/// Default safety cap on draws per converge call.
pub const DEFAULT_MAX_CONVERGE_DRAWS: u64 = 1_000_000;

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Environment variable could not be parsed
    #[error("Environment variable {name} has invalid value '{value}'")]
    Env {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
    },

    /// Validation errors
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Inclusive `[min, max]` bounds as written in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    /// Lower bound (inclusive)
    pub min: T,
    /// Upper bound (inclusive)
    pub max: T,
}

impl<T: Copy> Bounds<T> {
    /// Creates bounds.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// The bounds as a `RangeInclusive`.
    pub fn to_range(&self) -> RangeInclusive<T> {
        self.min..=self.max
    }
}

/// Simulation settings.
///
/// # Examples
///
/// ```rust
/// use loot_engine::SimulationConfig;
///
/// let config = SimulationConfig::from_toml_str(
///     r#"
///     seed = 42
///     tolerance = 0.005
///
///     [category_count]
///     min = 3
///     max = 5
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.category_count.to_range(), 3..=5);
/// assert_eq!(config.max_converge_draws, 1_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for randomised sequences and table regeneration; drawn from
    /// entropy when absent
    pub seed: Option<u64>,

    /// Converge tolerance on the L1 error
    pub tolerance: f64,

    /// Safety cap on draws per converge call
    pub max_converge_draws: u64,

    /// Category count range for table regeneration
    pub category_count: Bounds<usize>,

    /// Raw weight range for table regeneration
    pub weight: Bounds<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tolerance: DEFAULT_TOLERANCE,
            max_converge_draws: DEFAULT_MAX_CONVERGE_DRAWS,
            category_count: Bounds::new(2, 8),
            weight: Bounds::new(1.0, 50.0),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides
    ///
    /// Reads `LOOTCONV_SEED`, `LOOTCONV_TOLERANCE` and
    /// `LOOTCONV_MAX_CONVERGE_DRAWS`.
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        if let Ok(seed) = std::env::var("LOOTCONV_SEED") {
            self.seed = Some(seed.trim().parse().map_err(|_| ConfigError::Env {
                name: "LOOTCONV_SEED",
                value: seed.clone(),
            })?);
        }

        if let Ok(tolerance) = std::env::var("LOOTCONV_TOLERANCE") {
            self.tolerance = tolerance.trim().parse().map_err(|_| ConfigError::Env {
                name: "LOOTCONV_TOLERANCE",
                value: tolerance.clone(),
            })?;
        }

        if let Ok(cap) = std::env::var("LOOTCONV_MAX_CONVERGE_DRAWS") {
            self.max_converge_draws = cap.trim().parse().map_err(|_| ConfigError::Env {
                name: "LOOTCONV_MAX_CONVERGE_DRAWS",
                value: cap.clone(),
            })?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            errors.push(format!(
                "tolerance {} must be finite and non-negative",
                self.tolerance
            ));
        }

        if self.max_converge_draws == 0 {
            errors.push("max_converge_draws must be greater than 0".to_string());
        }

        if self.category_count.min == 0 {
            errors.push("category_count.min must be at least 1".to_string());
        }
        if self.category_count.min > self.category_count.max {
            errors.push(format!(
                "category_count.min {} exceeds category_count.max {}",
                self.category_count.min, self.category_count.max
            ));
        }

        if !self.weight.min.is_finite() || !self.weight.max.is_finite() {
            errors.push("weight bounds must be finite".to_string());
        } else {
            if self.weight.min < 0.0 {
                errors.push(format!("weight.min {} must be non-negative", self.weight.min));
            }
            if self.weight.min > self.weight.max {
                errors.push(format!(
                    "weight.min {} exceeds weight.max {}",
                    self.weight.min, self.weight.max
                ));
            }
            if self.weight.max <= 0.0 {
                errors.push("weight.max must be positive".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    /// Serialises tests that touch process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets an environment variable and restores its previous value on drop.
    struct EnvVarGuard {
        name: &'static str,
        previous: Option<String>,
        _lock: MutexGuard<'static, ()>,
    }

    impl EnvVarGuard {
        fn set(name: &'static str, value: &str) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let previous = std::env::var(name).ok();
            std::env::set_var(name, value);
            Self {
                name,
                previous,
                _lock: lock,
            }
        }

        fn update(&self, value: &str) {
            std::env::set_var(self.name, value);
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match &self.previous {
                Some(value) => std::env::set_var(self.name, value),
                None => std::env::remove_var(self.name),
            }
        }
    }

    #[test]
    fn test_default_config_validates() {
        let config = SimulationConfig::default();
        assert_eq!(config.tolerance, 0.01);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SimulationConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let result = SimulationConfig::from_toml_str("tolerance = \"tight\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7\nmax_converge_draws = 500\n[weight]\nmin = 0.5\nmax = 2.0").unwrap();

        let config = SimulationConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_converge_draws, 500);
        assert_eq!(config.weight, Bounds::new(0.5, 2.0));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SimulationConfig::load(Path::new("/nonexistent/lootconv.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = SimulationConfig {
            tolerance: -1.0,
            max_converge_draws: 0,
            category_count: Bounds::new(0, 0),
            weight: Bounds::new(5.0, 1.0),
            ..Default::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("tolerance")));
                assert!(errors.iter().any(|e| e.contains("max_converge_draws")));
                assert!(errors.iter().any(|e| e.contains("category_count.min")));
                assert!(errors.iter().any(|e| e.contains("weight.min")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_env_override() {
        let guard = EnvVarGuard::set("LOOTCONV_MAX_CONVERGE_DRAWS", "1234");
        let config = SimulationConfig::default().with_env_override().unwrap();
        assert_eq!(config.max_converge_draws, 1234);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 3").unwrap();
        let config = SimulationConfig::load_with_env_and_validate(file.path()).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.max_converge_draws, 1234);

        guard.update("lots");
        let result = SimulationConfig::default().with_env_override();
        assert!(matches!(
            result,
            Err(ConfigError::Env { name: "LOOTCONV_MAX_CONVERGE_DRAWS", .. })
        ));
    }

    #[test]
    fn test_env_guard_restores_previous_value() {
        {
            let _outer = EnvVarGuard::set("LOOTCONV_SEED", "11");
            let config = SimulationConfig::default().with_env_override().unwrap();
            assert_eq!(config.seed, Some(11));
        }

        let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        assert!(std::env::var("LOOTCONV_SEED").is_err());
        let config = SimulationConfig::default().with_env_override().unwrap();
        assert_eq!(config.seed, None);
    }
}
