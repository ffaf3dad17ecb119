//! Error types for the lootconv CLI.

use loot_engine::{ConfigError, SessionError, TableError};
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or environment problem
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configured loot table is invalid
    #[error("Loot table error: {0}")]
    Table(#[from] TableError),

    /// Simulation failure
    #[error("Simulation error: {0}")]
    Session(#[from] SessionError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias used throughout the CLI
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::invalid_argument("--max-draws must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid argument: --max-draws must be positive"
        );
    }

    #[test]
    fn test_session_error_conversion() {
        let err: CliError = SessionError::NoActiveSequence.into();
        assert!(matches!(err, CliError::Session(SessionError::NoActiveSequence)));
    }
}
