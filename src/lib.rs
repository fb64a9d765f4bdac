//! `weathercast` - current weather, short-range forecast, and a naive
//! next-day temperature estimate with matching clothing advice.
//!
//! The pipeline is a straight line: [`WeatherApiClient`] fetches current
//! conditions and the daily temperature series, [`predictor`] turns the series
//! into a prediction and a clothing recommendation, and [`report`] bundles
//! everything for the rendering layer.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod predictor;
pub mod report;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use config::WeathercastConfig;
pub use error::WeathercastError;
pub use models::{CurrentConditions, Location, Outlook, UnitSystem, WeatherReport};
pub use predictor::{Clothing, predict_next_temp, recommend_clothing};
pub use report::build_report;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeathercastError>;
