//! Configuration module for the Kilo keyword matcher.
//!
//! This module provides a layered configuration system: built-in defaults,
//! overridden by an optional file (TOML, YAML, JSON), overridden in turn by
//! environment variables. All configuration values are validated before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod matcher;

pub use matcher::MatcherConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KILO";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the Kilo keyword matcher.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KiloConfig {
    /// Matcher configuration
    pub matcher: MatcherConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl KiloConfig {
    /// Renders the configuration as a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

impl Validate for KiloConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.matcher.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the Kilo keyword matcher.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file, and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(KiloConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<KiloConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&KiloConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let kilo_config: KiloConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        kilo_config.validate()?;

        tracing::debug!(
            path = ?self.config_path,
            case_sensitive = kilo_config.matcher.case_sensitive,
            "Configuration loaded"
        );
        Ok(kilo_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = KiloConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.matcher.case_sensitive);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = KiloConfig::default();
        config.log.level = "verbose".to_string();

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration validation error: Invalid log level: verbose"
        );
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let loader = ConfigLoader::new(None::<&Path>, "KILO_TEST_DEFAULTS");
        let config = loader.load().unwrap();
        assert_eq!(config, KiloConfig::default());
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kilo.toml");
        fs::write(
            &path,
            r#"
[matcher]
case_sensitive = true

[log]
level = "debug"
json = true
source_location = false
"#,
        )
        .unwrap();

        let config = ConfigLoader::new(Some(&path), "KILO_TEST_TOML").load().unwrap();
        assert!(config.matcher.case_sensitive);
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
        assert!(!config.log.source_location);
    }

    #[test]
    fn test_load_partial_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kilo.json");
        fs::write(&path, r#"{ "log": { "level": "warn" } }"#).unwrap();

        let config = ConfigLoader::new(Some(&path), "KILO_TEST_JSON").load().unwrap();
        assert_eq!(config.log.level, "warn");
        assert!(!config.matcher.case_sensitive);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = KiloConfig::default();
        config.matcher.case_sensitive = true;

        let dir = tempdir().unwrap();
        let path = dir.path().join("generated.toml");
        fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        let loaded = ConfigLoader::new(Some(&path), "KILO_TEST_GENERATED")
            .load()
            .unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = ConfigLoader::new(Some(&path), ENV_PREFIX).load().unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kilo.ini");
        fs::write(&path, "").unwrap();

        let err = ConfigLoader::new(Some(&path), ENV_PREFIX).load().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_file_value_fails_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[log]\nlevel = \"loud\"\n").unwrap();

        let err = ConfigLoader::new(Some(&path), "KILO_TEST_BAD").load().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_environment_override() {
        std::env::set_var("KILO_TEST_ENV__MATCHER__CASE_SENSITIVE", "true");
        let config = ConfigLoader::new(None::<&Path>, "KILO_TEST_ENV").load().unwrap();
        std::env::remove_var("KILO_TEST_ENV__MATCHER__CASE_SENSITIVE");

        assert!(config.matcher.case_sensitive);
    }
}
