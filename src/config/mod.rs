//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `CAREER_CATALOG_` prefix and nested values use double underscores
//! as separators.
//!
//! # Example
//!
//! ```no_run
//! use career_catalog::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let policy = config.scholarship.policy();
//! ```

mod error;
mod scholarship;

pub use error::{ConfigError, ValidationError};
pub use scholarship::ScholarshipConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Scholarship contribution weights
    #[serde(default)]
    pub scholarship: ScholarshipConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAREER_CATALOG` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAREER_CATALOG__SCHOLARSHIP__ENTERPRISE_BASE=1500`
    /// - `CAREER_CATALOG__SCHOLARSHIP__STEAM_MULTIPLIER=3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAREER_CATALOG")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!("configuration loaded");
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scholarship.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scholarship: ScholarshipConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CAREER_CATALOG__SCHOLARSHIP__ENTERPRISE_BASE");
        env::remove_var("CAREER_CATALOG__SCHOLARSHIP__STEAM_MULTIPLIER");
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();
        assert_eq!(
            config.scholarship.policy(),
            ScholarshipConfig::default().policy()
        );
    }

    #[test]
    fn load_reads_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CAREER_CATALOG__SCHOLARSHIP__ENTERPRISE_BASE", "1500");
        env::set_var("CAREER_CATALOG__SCHOLARSHIP__STEAM_MULTIPLIER", "3");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scholarship.enterprise_base, Decimal::new(1500, 0));
        assert_eq!(config.scholarship.steam_multiplier, Decimal::new(3, 0));
    }

    #[test]
    fn default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
