use crate::config::{Config, ConfigError};
use clap::Parser;
use std::path::PathBuf;

/// Terminal browser for a paginated product catalog.
///
/// Configuration priority: CLI args > config file > defaults.
#[derive(Parser, Debug, Default)]
#[command(name = "catalog-browser")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse a paginated product catalog in the terminal", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/catalog-browser/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the catalog API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Products requested per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Delay between carousel images in milliseconds
    #[arg(long)]
    pub carousel_interval_ms: Option<u64>,

    /// Artificial delay before every fetch in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,
}

impl Cli {
    /// Loads the config file, applies overrides and validates the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.api.page_size = page_size;
        }
        if let Some(interval) = self.carousel_interval_ms {
            config.carousel.interval_ms = interval;
        }
        if let Some(latency) = self.latency_ms {
            config.api.simulated_latency_ms = latency;
        }
    }
}
