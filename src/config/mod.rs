//! Configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional and
//! falls back to defaults. A `.env` file is honoured, and these environment
//! variables override the file:
//!
//! - `FOODORDER_API_URL` → `backend.base_url`
//! - `FOODORDER_LOG_LEVEL` → `logging.level`

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

mod backend;
mod currency;
mod logging;

pub use backend::BackendConfig;
pub use currency::CurrencyConfig;
pub use logging::LoggingConfig;

/// Environment variable overriding `backend.base_url`.
pub const API_URL_ENV: &str = "FOODORDER_API_URL";

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "FOODORDER_LOG_LEVEL";

/// Main configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from a TOML file, then apply `.env` and process environment
    /// overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let _ = dotenvy::dotenv();
        Self::from_toml_with(&content, |key| std::env::var(key).ok())
    }

    /// Parse TOML text and apply overrides from `lookup`.
    pub fn from_toml_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.is_empty()) {
            self.backend.base_url = url;
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.is_empty()) {
            self.logging.level = level;
        }
    }

    fn validate(&self) -> Result<()> {
        self.backend.validate()?;
        self.currency.validate()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
