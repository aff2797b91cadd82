//! Logging setup.
//!
//! The library itself only emits `tracing` events; applications embedding it
//! call [`init_logging`] once to install a subscriber that prints them.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{KiloError, KiloResult};

/// Builds the event filter for the configured level.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn build_filter(config: &LogConfig) -> KiloResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| KiloError::Logging(format!("Invalid log filter: {e}"))),
    }
}

/// Initialize the logging system.
///
/// # Errors
///
/// Returns [`KiloError::Logging`] if the filter is invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> KiloResult<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(config.source_location)
        .with_file(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| KiloError::Logging(format!("Failed to set global tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_from_config() {
        let config = LogConfig {
            level: "debug".to_string(),
            ..LogConfig::default()
        };
        assert!(build_filter(&config).is_ok());
    }
}
