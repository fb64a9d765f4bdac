//! Configuration management for `weathercast`
//!
//! Handles loading configuration from files and environment variables,
//! and validates the settings before any request is made.

use crate::WeathercastError;
use crate::models::UnitSystem;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum number of forecast days the provider returns per request
pub const MAX_FORECAST_DAYS: u32 = 7;

/// Root configuration structure for the `weathercast` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeathercastConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather provider (OpenWeatherMap) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,
    /// Base URL for the provider API
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Unit system used when none is given on the command line
    #[serde(default)]
    pub units: UnitSystem,
    /// Number of forecast days to request (1..=7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_provider_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_provider_timeout() -> u32 {
    10
}

fn default_forecast_days() -> u32 {
    MAX_FORECAST_DAYS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_provider_base_url(),
            timeout_seconds: default_provider_timeout(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl WeathercastConfig {
    /// Load configuration from the default locations and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the given path, falling back to
    /// `$WEATHERCAST_CONFIG` and then `weathercast.toml` in the working
    /// directory. Environment variables with the `WEATHERCAST_` prefix
    /// override file values (e.g. `WEATHERCAST_PROVIDER__API_KEY`).
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path
            .or_else(|| std::env::var("WEATHERCAST_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("weathercast.toml"));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("WEATHERCAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut config: Self = builder
            .build()
            .with_context(|| "Failed to build configuration")?
            .try_deserialize()
            .with_context(|| "Failed to parse configuration")?;

        // The original deployment used OPENWEATHER_API_KEY; keep honoring it.
        if config.provider.api_key.is_none() {
            config.provider.api_key = std::env::var("OPENWEATHER_API_KEY").ok();
        }

        config.defaults.forecast_days = config.defaults.forecast_days.clamp(1, MAX_FORECAST_DAYS);

        Ok(config)
    }

    /// Validate the configuration, failing fast before any request is made
    pub fn validate(&self) -> Result<(), WeathercastError> {
        match &self.provider.api_key {
            Some(key) if !key.trim().is_empty() => {}
            _ => {
                return Err(WeathercastError::config(
                    "no API key set (WEATHERCAST_PROVIDER__API_KEY or OPENWEATHER_API_KEY)",
                ));
            }
        }

        if self.provider.base_url.trim().is_empty() {
            return Err(WeathercastError::config("provider base_url is empty"));
        }

        if self.provider.timeout_seconds == 0 {
            return Err(WeathercastError::config("timeout_seconds must be positive"));
        }

        Ok(())
    }
}
