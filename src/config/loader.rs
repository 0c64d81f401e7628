//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, EngineConfig, ServerConfig};

/// Loads and provides access to the service configuration.
///
/// The configuration file has the following shape; every key is optional:
/// ```text
/// engine:
///   payment_date_inclusion: true
/// server:
///   bind_address: "0.0.0.0:3000"
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_rate::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary-rate.yaml").unwrap();
/// println!("Include payment date: {}", loader.engine().payment_date_inclusion);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or mistyped fields
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<AppConfig>(path)?;

        info!(
            path = %path.display(),
            payment_date_inclusion = config.engine.payment_date_inclusion,
            "Loaded configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        // An empty document deserializes to unit, not to an all-defaults struct.
        let content = if content.trim().is_empty() {
            "{}"
        } else {
            content.as_str()
        };

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the engine settings.
    pub fn engine(&self) -> &EngineConfig {
        &self.config.engine
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/salary-rate.yaml"
    }

    fn write_temp_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("salary-rate-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert!(loader.engine().payment_date_inclusion);
        assert_eq!(loader.server().bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/salary-rate.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("salary-rate.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = write_temp_config("invalid.yaml", "engine:\n  payment_date_inclusion: sometimes\n");

        match ConfigLoader::load(&path) {
            Err(EngineError::ConfigParseError { path: p, message }) => {
                assert!(p.contains("invalid.yaml"));
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let path = write_temp_config("empty.yaml", "");
        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config(), &AppConfig::default());
    }

    #[test]
    fn test_load_overrides_payment_date_inclusion() {
        let path = write_temp_config(
            "exclusive.yaml",
            "engine:\n  payment_date_inclusion: false\nserver:\n  bind_address: \"127.0.0.1:8080\"\n",
        );
        let loader = ConfigLoader::load(&path).unwrap();
        assert!(!loader.engine().payment_date_inclusion);
        assert_eq!(loader.server().bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn test_default_loader_matches_reference_behavior() {
        let loader = ConfigLoader::default();
        assert!(loader.engine().payment_date_inclusion);
    }
}
