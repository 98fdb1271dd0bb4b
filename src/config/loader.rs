use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/catalog-browser/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("catalog-browser").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.page_size` is at least 1
    /// - `api.base_url` is an http(s) URL
    /// - carousel and tick intervals are non-zero
    /// - `ui.load_more_threshold` is in `(0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.page_size == 0 {
            return Err(invalid("api.page_size must be at least 1"));
        }

        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid(format!(
                "api.base_url '{}' must start with http:// or https://",
                self.api.base_url
            )));
        }
        if reqwest::Url::parse(base_url).is_err() {
            return Err(invalid(format!(
                "api.base_url '{}' is not a valid URL",
                self.api.base_url
            )));
        }

        if self.api.timeout_seconds == 0 {
            return Err(invalid("api.timeout_seconds must be greater than 0"));
        }
        if self.api.connect_timeout_seconds == 0 {
            return Err(invalid("api.connect_timeout_seconds must be greater than 0"));
        }

        if self.carousel.interval_ms == 0 {
            return Err(invalid("carousel.interval_ms must be greater than 0"));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms must be greater than 0"));
        }

        let threshold = self.ui.load_more_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(invalid(format!(
                "ui.load_more_threshold must be in (0, 1], got {}",
                threshold
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
