//! Weather API client for OpenWeatherMap
//!
//! One blocking HTTP request per call, no retries: failures surface
//! immediately. Current conditions are fetched by city name, the daily
//! forecast by coordinates via the one-call endpoint.

use crate::config::WeathercastConfig;
use crate::models::{CurrentConditions, UnitSystem, openweather};
use crate::{Result, WeathercastError};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Weather API client for OpenWeatherMap
#[derive(Debug)]
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// Provider base URL
    base_url: String,
    /// API key credential
    api_key: String,
}

impl WeatherApiClient {
    /// Create a new weather API client from a validated configuration
    pub fn new(config: &WeathercastConfig) -> Result<Self> {
        let api_key = config
            .provider
            .api_key
            .clone()
            .ok_or_else(|| WeathercastError::config("no API key set"))?;

        let timeout = Duration::from_secs(config.provider.timeout_seconds.into());
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weathercast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeathercastError::provider(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.provider.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetch current conditions for a city name.
    ///
    /// # Errors
    ///
    /// Returns [`WeathercastError::NotFound`] when the provider cannot resolve
    /// the city (HTTP 404) and [`WeathercastError::Provider`] for any other
    /// non-success status or a malformed payload.
    #[instrument(skip(self), fields(city = city))]
    pub fn fetch_current(&self, city: &str, units: UnitSystem) -> Result<CurrentConditions> {
        info!("Fetching current weather for '{}'", city);

        let url = format!(
            "{}/data/2.5/weather?q={}&units={}&appid={}",
            self.base_url,
            urlencoding::encode(city),
            units.query_param(),
            self.api_key
        );
        debug!("Current weather request: {}", redact_key(&url));

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| WeathercastError::provider(format!("request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("City '{}' not found (HTTP 404)", city);
            return Err(WeathercastError::not_found(city));
        }
        if !status.is_success() {
            warn!("Current weather request failed with HTTP {}", status);
            return Err(WeathercastError::provider(format!(
                "current weather request returned HTTP {status}"
            )));
        }

        let body: openweather::CurrentWeatherResponse = response
            .json()
            .map_err(|e| WeathercastError::provider(format!("malformed weather payload: {e}")))?;

        let current = CurrentConditions::from(&body);
        info!(
            "Current weather in {}: {:.1}{} ({})",
            current.location.name,
            current.temperature,
            units.temperature_label(),
            current.description
        );
        Ok(current)
    }

    /// Fetch the daily temperature series for coordinates, oldest first,
    /// truncated to at most `days` entries.
    ///
    /// Never fails: any provider error or malformed payload yields an empty
    /// vector, which callers must treat as "forecast unavailable".
    #[instrument(skip(self), fields(lat, lon))]
    pub fn fetch_daily_series(&self, lat: f64, lon: f64, units: UnitSystem, days: u32) -> Vec<f64> {
        info!("Fetching {}-day forecast for {:.4}, {:.4}", days, lat, lon);

        match self.try_fetch_daily_series(lat, lon, units, days) {
            Ok(series) => {
                info!("Retrieved forecast with {} data points", series.len());
                series
            }
            Err(e) => {
                warn!("Forecast unavailable: {}", e);
                Vec::new()
            }
        }
    }

    fn try_fetch_daily_series(
        &self,
        lat: f64,
        lon: f64,
        units: UnitSystem,
        days: u32,
    ) -> Result<Vec<f64>> {
        let url = format!(
            "{}/data/3.0/onecall?lat={}&lon={}&exclude=minutely,hourly,alerts&units={}&appid={}",
            self.base_url,
            lat,
            lon,
            units.query_param(),
            self.api_key
        );
        debug!("Forecast request: {}", redact_key(&url));

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| WeathercastError::provider(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeathercastError::provider(format!(
                "forecast request returned HTTP {status}"
            )));
        }

        let body: openweather::OneCallResponse = response
            .json()
            .map_err(|e| WeathercastError::provider(format!("malformed forecast payload: {e}")))?;

        Ok(daily_temps(&body, days))
    }
}

/// Extract day temperatures from a one-call response, truncated to `days`
fn daily_temps(response: &openweather::OneCallResponse, days: u32) -> Vec<f64> {
    response
        .daily
        .iter()
        .take(days as usize)
        .map(|entry| entry.temp.day)
        .collect()
}

/// Strip the API key from a request URL before logging it
fn redact_key(url: &str) -> &str {
    url.split("appid=").next().unwrap_or(url)
}
