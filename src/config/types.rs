use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote product source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API (e.g., "https://dummyjson.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Records requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Artificial delay before every fetch, in milliseconds (default: 0).
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

/// Detail-view image carousel timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Delay between image advances (default: 1500).
    #[serde(default = "default_carousel_interval")]
    pub interval_ms: u64,
    /// Delay before the loading skeleton is dropped (default: 1500).
    #[serde(default = "default_loading_delay")]
    pub loading_delay_ms: u64,
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Fraction of the visible rows from the end of the list at which the
    /// next page is requested.
    #[serde(default = "default_load_more_threshold")]
    pub load_more_threshold: f32,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_page_size() -> u32 {
    12
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_carousel_interval() -> u64 {
    1500
}

fn default_loading_delay() -> u64 {
    1500
}

fn default_tick_rate() -> u64 {
    250
}

fn default_load_more_threshold() -> f32 {
    0.2
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            simulated_latency_ms: 0,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_carousel_interval(),
            loading_delay_ms: default_loading_delay(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            load_more_threshold: default_load_more_threshold(),
        }
    }
}

impl ApiConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
