// In crates/app-config/src/lib.rs

use std::path::Path;

use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, PriceFeed, PriceUpdate, Settings, StrategySettings};

/// Loads the application settings from the `config/` directory.
///
/// The environment is taken from `APP_ENVIRONMENT`, defaulting to "development".
pub fn load_settings() -> Result<Settings> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());
    load_settings_from(Path::new("config"), &environment)
}

/// Loads settings from an explicit directory.
///
/// Sources are layered in order, each overriding the last:
/// 1. `base.toml`
/// 2. `{environment}.toml`
/// 3. Environment variables prefixed with `ALERTER` (e.g. `ALERTER__APP__LOG_LEVEL=debug`).
///
/// Every file is optional; missing values fall back to the defaults.
pub fn load_settings_from(dir: &Path, environment: &str) -> Result<Settings> {
    build_settings(dir, environment, "ALERTER")
}

fn build_settings(dir: &Path, environment: &str, env_prefix: &str) -> Result<Settings> {
    let settings = Config::builder()
        .add_source(File::from(dir.join("base")).required(false))
        .add_source(File::from(dir.join(environment)).required(false))
        .add_source(Environment::with_prefix(env_prefix).separator("__"))
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;
    settings.app.environment = environment.to_owned();

    Ok(settings)
}

/// Loads a recorded price feed from a TOML file.
pub fn load_price_feed(path: &Path) -> Result<PriceFeed> {
    let content = std::fs::read_to_string(path)?;

    let feed: PriceFeed = toml::from_str(&content)?;
    Ok(feed)
}
