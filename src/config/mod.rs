//! Configuration: TOML file plus command-line overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, CarouselConfig, Config, UiConfig};
