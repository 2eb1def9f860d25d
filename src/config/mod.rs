//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TALENT_SCOUT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use talent_scout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Using model {}", config.ai.model);
//! ```

mod ai;
mod error;
mod logging;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Plain variable accepted for the API key when the prefixed one is unset.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AI provider configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TALENT_SCOUT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `OPENAI_API_KEY` when no prefixed key is set
    ///
    /// # Environment Variable Format
    ///
    /// - `TALENT_SCOUT__AI__MODEL=gpt-4o-mini` -> `ai.model = gpt-4o-mini`
    /// - `TALENT_SCOUT__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TALENT_SCOUT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if config.ai.openai_api_key.is_none() {
            config.ai.openai_api_key = std::env::var(OPENAI_API_KEY_VAR).ok();
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
