// In crates/app-config/src/types.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use strategies::types::MACrossoverSettings;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// The application's general settings.
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub strategies: StrategySettings,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,
    /// The log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StrategySettings {
    #[serde(default)]
    pub ma_crossover: MACrossoverSettings,
}

// --- Structs for price feed files ---

/// A recorded sequence of price updates for one instrument.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PriceFeed {
    pub symbol: Option<String>,
    #[serde(default)]
    pub updates: Vec<PriceUpdate>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceUpdate {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

fn default_environment() -> String { "development".into() }
fn default_log_level() -> String { "info".into() }
