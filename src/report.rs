//! Report assembly
//!
//! Drives one request through the pipeline: current conditions by city name,
//! daily series by the resolved coordinates, then prediction and clothing
//! advice. The rendering layer receives a single [`WeatherReport`] bundle and
//! decides all user-visible messaging.

use crate::api::WeatherApiClient;
use crate::models::{Outlook, UnitSystem, WeatherReport};
use crate::predictor::{predict_next_temp, recommend_clothing};
use crate::{Result, WeathercastError};
use tracing::{debug, info, warn};

/// Build a weather report for a city.
///
/// # Errors
///
/// Fails when the city cannot be resolved or the current-conditions request
/// fails; an unavailable forecast is not an error and yields a report with an
/// empty series and no outlook.
pub fn build_report(
    client: &WeatherApiClient,
    city: &str,
    units: UnitSystem,
    days: u32,
) -> Result<WeatherReport> {
    let city = city.trim();
    if city.is_empty() {
        return Err(WeathercastError::not_found(city));
    }

    info!("Building weather report for '{}'", city);

    let current = client.fetch_current(city, units)?;
    debug!(
        "Resolved '{}' to {} at {}",
        city,
        current.location.name,
        current.location.format_coordinates()
    );

    let series = client.fetch_daily_series(
        current.location.latitude,
        current.location.longitude,
        units,
        days,
    );

    let outlook = predict_next_temp(&series).map(|predicted_temp| Outlook {
        predicted_temp,
        clothing: recommend_clothing(predicted_temp, units),
    });

    match &outlook {
        Some(outlook) => info!(
            "Predicted {:.2}{} for tomorrow ({:?})",
            outlook.predicted_temp,
            units.temperature_label(),
            outlook.clothing
        ),
        None => warn!(
            "No prediction available: series has {} point(s)",
            series.len()
        ),
    }

    Ok(WeatherReport {
        current,
        units,
        series,
        outlook,
    })
}
