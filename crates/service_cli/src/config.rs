//! CLI configuration file (`lootconv.toml`).
//!
//! ```toml
//! log_level = "info"
//!
//! [simulation]
//! seed = 42
//! tolerance = 0.01
//!
//! [[table]]
//! symbol = "Common"
//! weight = 70.0
//!
//! [[table]]
//! symbol = "Rare"
//! weight = 5.0
//! ```
//!
//! A missing file yields the defaults; simulation settings still receive
//! `LOOTCONV_*` environment overrides.

use std::path::Path;
use std::str::FromStr;

use loot_engine::{Category, ConfigError, LootTable, NormalizedLootTable, SimulationConfig};
use serde::{Deserialize, Serialize};

/// Top-level CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,

    /// Simulation settings
    pub simulation: SimulationConfig,

    /// Custom loot table; the `A:10, B:30, C:1` reference table when absent
    pub table: Option<Vec<Category>>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            simulation: SimulationConfig::default(),
            table: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise start from the defaults; then
    /// apply environment overrides and validate.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };

        config.simulation = config.simulation.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = match self.simulation.validate() {
            Ok(()) => Vec::new(),
            Err(ConfigError::Validation(errors)) => errors,
            Err(other) => return Err(other),
        };

        if tracing::Level::from_str(&self.log_level).is_err() {
            errors.push(format!(
                "log_level '{}' must be one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        if matches!(&self.table, Some(categories) if categories.is_empty()) {
            errors.push("table must list at least one category".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// The configured loot table, normalised.
    pub fn loot_table(&self) -> Result<NormalizedLootTable, loot_engine::TableError> {
        match &self.table {
            Some(categories) => LootTable::new(categories.clone()).normalize(),
            None => LootTable::reference().normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loot_engine::TableError;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = CliConfig::load_or_default(Path::new("/nonexistent/lootconv.toml")).unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.table.is_none());
        assert_eq!(config.loot_table().unwrap().len(), 3);
    }

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"

[simulation]
seed = 9
tolerance = 0.02

[[table]]
symbol = "Common"
weight = 3.0

[[table]]
symbol = "Rare"
weight = 1.0
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.simulation.seed, Some(9));
        assert_eq!(config.simulation.tolerance, 0.02);

        let table = config.loot_table().unwrap();
        assert_eq!(table.symbol(0), "Common");
        assert!((table.weight(0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = [").unwrap();

        let result = CliConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_collects_cli_and_simulation_errors() {
        let mut config = CliConfig {
            log_level: "loud".to_string(),
            table: Some(Vec::new()),
            ..CliConfig::default()
        };
        config.simulation.tolerance = f64::NAN;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("tolerance")));
                assert!(errors.iter().any(|e| e.contains("table")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_custom_table() {
        let config = CliConfig {
            table: Some(vec![Category::new("A", -1.0), Category::new("B", 2.0)]),
            ..CliConfig::default()
        };

        assert!(matches!(
            config.loot_table(),
            Err(TableError::NegativeWeight { .. })
        ));
    }
}
