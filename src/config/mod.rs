//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AIHE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use aihe_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("alpha = {}", config.engine.alpha);
//! ```

mod catalog;
mod engine;
mod error;
mod logging;

pub use catalog::CatalogConfig;
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a valid
/// configuration using the built-in catalogs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Weighting and composite score parameters
    #[serde(default)]
    pub engine: EngineConfig,

    /// Reference catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AIHE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AIHE__ENGINE__ALPHA=0.3` -> `engine.alpha = 0.3`
    /// - `AIHE__CATALOG__PATH=catalogs.yaml` -> `catalog.path = ...`
    /// - `AIHE__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("AIHE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("AIHE__ENGINE__ALPHA");
        env::remove_var("AIHE__ENGINE__WEIGHT_FLOOR");
        env::remove_var("AIHE__CATALOG__PATH");
        env::remove_var("AIHE__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.engine, EngineConfig::default());
        assert!(config.catalog.uses_builtin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AIHE__ENGINE__ALPHA", "0.3");
        env::set_var("AIHE__CATALOG__PATH", "catalogs.yaml");
        env::set_var("AIHE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.alpha, 0.3);
        assert_eq!(config.engine.beta, 0.5);
        assert_eq!(
            config.catalog.path.as_deref(),
            Some(std::path::Path::new("catalogs.yaml"))
        );
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_floor() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AIHE__ENGINE__WEIGHT_FLOOR", "0.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidWeightFloor(0.5))
        );
    }
}
