//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `BOT_TOKEN`.
//!
//! # Example
//!
//! ```no_run
//! use tarotbot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::assets::{AssetsConfig, HistoryConfig, PredictionsConfig};
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Telegram bot configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Card image directories.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Predictions source file.
    #[serde(default)]
    pub predictions: PredictionsConfig,

    /// Prediction history window.
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load the file if it exists, otherwise start from defaults.
    ///
    /// Returns whether the file was found alongside the config.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        if path.as_ref().exists() {
            return Self::load(path).map(|config| (config, true));
        }
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok((config, false))
    }

    /// Parse configuration from TOML content.
    ///
    /// Loads the bot token from the environment.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        // Token from the environment only, never from the config file.
        self.telegram.bot_token = TelegramAppConfig::token_from_env();
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.history.cache_duration_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache_duration_secs",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if self.assets.cards_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "cards_dir" }.into());
        }
        if self.assets.backs_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "backs_dir" }.into());
        }
        if self.predictions.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "path" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected `pretty` or `json`, got `{}`", self.logging.format),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize tracing from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// History window as a [`Duration`].
    #[must_use]
    pub fn cache_duration(&self) -> Duration {
        self.history.cache_duration()
    }
}
