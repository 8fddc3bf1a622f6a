//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

use crate::http_server::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Refusing to overwrite an existing config file
    #[error("Config file already exists: {}", .0.display())]
    AlreadyInitialized(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Server failed to boot or run
    #[error("Boot failed: {0}")]
    BootFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_initialized_names_the_path() {
        let err = CliError::AlreadyInitialized(PathBuf::from("./fruitstand.json"));
        assert!(err.to_string().contains("fruitstand.json"));
    }
}
