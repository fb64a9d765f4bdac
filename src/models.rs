//! Data models for weather information and provider API responses
//!
//! Contains the internal data structures handed to the rendering layer as well
//! as the OpenWeatherMap response types they are converted from.

use serde::{Deserialize, Serialize};

/// Unit system for provider requests and display labels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius and m/s
    #[default]
    Metric,
    /// Fahrenheit and mph
    Imperial,
}

impl UnitSystem {
    /// Value of the provider's `units` query parameter
    pub fn query_param(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Display suffix for temperatures
    pub fn temperature_label(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Display label for wind speeds
    pub fn wind_speed_label(&self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }
}

/// Resolved location, immutable once a current-conditions lookup succeeds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Resolved city name
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: Option<String>,
}

impl Location {
    /// Format location as coordinates string
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Current weather conditions for a resolved location
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentConditions {
    /// Resolved location with coordinates
    pub location: Location,
    /// Temperature in the requested unit system
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in the requested unit system
    pub wind_speed: f64,
    /// Human-readable condition description
    pub description: String,
}

/// Predicted next-day temperature with a matching clothing suggestion
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Outlook {
    /// Predicted temperature in the requested unit system
    pub predicted_temp: f64,
    /// Clothing advice derived from the prediction
    pub clothing: crate::predictor::Clothing,
}

/// Everything the rendering layer needs for one request
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherReport {
    /// Current conditions at the resolved location
    pub current: CurrentConditions,
    /// Unit system every value in this report is expressed in
    pub units: UnitSystem,
    /// Daily temperatures, oldest first, at most seven entries.
    /// Empty means the forecast was unavailable.
    pub series: Vec<f64>,
    /// Absent when the series has fewer than two points
    pub outlook: Option<Outlook>,
}

/// OpenWeatherMap API response structures
pub mod openweather {
    use super::*;

    /// Response from the current-weather-by-name endpoint (`/data/2.5/weather`)
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherResponse {
        pub name: String,
        pub sys: SysInfo,
        pub coord: Coord,
        pub main: MainInfo,
        pub wind: Option<WindInfo>,
        #[serde(default)]
        pub weather: Vec<ConditionInfo>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SysInfo {
        pub country: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Coord {
        pub lat: f64,
        pub lon: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainInfo {
        pub temp: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindInfo {
        pub speed: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionInfo {
        pub description: String,
    }

    /// Response from the one-call endpoint (`/data/3.0/onecall`)
    #[derive(Debug, Deserialize)]
    pub struct OneCallResponse {
        #[serde(default)]
        pub daily: Vec<DailyEntry>,
    }

    /// One day of the one-call forecast
    #[derive(Debug, Deserialize)]
    pub struct DailyEntry {
        pub temp: DailyTemp,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyTemp {
        pub day: f64,
    }
}

impl From<&openweather::CurrentWeatherResponse> for CurrentConditions {
    fn from(response: &openweather::CurrentWeatherResponse) -> Self {
        Self {
            location: Location {
                latitude: response.coord.lat,
                longitude: response.coord.lon,
                name: response.name.clone(),
                country: response.sys.country.clone(),
            },
            temperature: response.main.temp,
            humidity: response.main.humidity,
            wind_speed: response.wind.as_ref().map(|w| w.speed).unwrap_or(0.0),
            description: response
                .weather
                .first()
                .map(|w| w.description.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}
