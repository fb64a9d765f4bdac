//! Next-day temperature prediction and clothing recommendation
//!
//! The predictor fits a least-squares line through (day index, temperature)
//! pairs and evaluates it one step past the end of the series. The clothing
//! recommendation is a pure mapping from the predicted temperature to a fixed
//! set of advice bands.

use crate::models::UnitSystem;
use serde::{Deserialize, Serialize};

/// Clothing advice bands, ordered coldest to warmest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Clothing {
    /// Below 5 °C
    HeavyWinter,
    /// 5 °C up to (excluding) 15 °C
    Jacket,
    /// 15 °C up to (excluding) 25 °C
    Light,
    /// 25 °C and above
    Summer,
}

impl Clothing {
    /// Get the user-facing advice string
    pub fn advice(&self) -> &'static str {
        match self {
            Self::HeavyWinter => "Heavy winter clothing recommended.",
            Self::Jacket => "Wear a jacket or sweater.",
            Self::Light => "Light and comfortable clothing.",
            Self::Summer => "Very hot, wear breathable summer clothes.",
        }
    }
}

/// Predict the next value of a daily temperature series.
///
/// Day indices 0..n-1 are the independent variable; a least-squares line
/// through (index, temperature) is evaluated at index n and rounded to two
/// decimal places. Series with fewer than two points carry no trend and yield
/// `None`.
pub fn predict_next_temp(series: &[f64]) -> Option<f64> {
    let n = series.len();
    if n < 2 {
        return None;
    }

    let n_f = n as f64;
    let x_mean = (n_f - 1.0) / 2.0;
    let y_mean = series.iter().sum::<f64>() / n_f;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &y) in series.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxy += dx * (y - y_mean);
        sxx += dx * dx;
    }

    // sxx > 0 whenever n >= 2, so the division is safe
    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    Some(round2(slope.mul_add(n_f, intercept)))
}

/// Map a predicted temperature to clothing advice.
///
/// Total and deterministic over all inputs. Bands are defined on the Celsius
/// scale as half-open `[lower, upper)` ranges, so a boundary value belongs to
/// the warmer band; an imperial temperature is converted before banding.
pub fn recommend_clothing(temperature: f64, units: UnitSystem) -> Clothing {
    let celsius = match units {
        UnitSystem::Metric => temperature,
        UnitSystem::Imperial => fahrenheit_to_celsius(temperature),
    };

    if celsius < 5.0 {
        Clothing::HeavyWinter
    } else if celsius < 15.0 {
        Clothing::Jacket
    } else if celsius < 25.0 {
        Clothing::Light
    } else {
        Clothing::Summer
    }
}

/// Convert temperature from Fahrenheit to Celsius
fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_exact_trend_continuation() {
        // +2 per day continues to 24.0 at the next index
        let series = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0];
        assert_eq!(predict_next_temp(&series), Some(24.0));
    }

    #[test]
    fn test_flat_series_predicts_flat() {
        let series = [18.0, 18.0, 18.0, 18.0];
        assert_eq!(predict_next_temp(&series), Some(18.0));
    }

    #[test]
    fn test_too_short_series() {
        assert_eq!(predict_next_temp(&[]), None);
        assert_eq!(predict_next_temp(&[21.3]), None);
    }

    #[test]
    fn test_two_points_extrapolate() {
        assert_eq!(predict_next_temp(&[10.0, 13.0]), Some(16.0));
    }

    #[test]
    fn test_reordering_changes_prediction() {
        let ascending = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0];
        let descending: Vec<f64> = ascending.iter().rev().copied().collect();

        assert_eq!(predict_next_temp(&ascending), Some(24.0));
        assert_eq!(predict_next_temp(&descending), Some(8.0));
    }

    #[test]
    fn test_prediction_is_rounded() {
        // exact fit evaluates to 2.666..., reported as 2.67
        assert_eq!(predict_next_temp(&[1.0, 2.0, 2.0]), Some(2.67));
    }

    #[rstest]
    #[case(-10.0, Clothing::HeavyWinter)]
    #[case(4.99, Clothing::HeavyWinter)]
    #[case(5.0, Clothing::Jacket)]
    #[case(14.99, Clothing::Jacket)]
    #[case(15.0, Clothing::Light)]
    #[case(24.99, Clothing::Light)]
    #[case(25.0, Clothing::Summer)]
    #[case(40.0, Clothing::Summer)]
    fn test_metric_bands(#[case] temp: f64, #[case] expected: Clothing) {
        assert_eq!(recommend_clothing(temp, UnitSystem::Metric), expected);
    }

    #[rstest]
    #[case(20.0, Clothing::HeavyWinter)] // -6.7 °C
    #[case(41.0, Clothing::Jacket)] // exactly 5 °C
    #[case(68.0, Clothing::Light)] // 20 °C
    #[case(77.0, Clothing::Summer)] // exactly 25 °C
    fn test_imperial_bands(#[case] temp: f64, #[case] expected: Clothing) {
        assert_eq!(recommend_clothing(temp, UnitSystem::Imperial), expected);
    }

    #[test]
    fn test_bands_are_monotonic() {
        let mut previous = recommend_clothing(-40.0, UnitSystem::Metric);
        let mut t = -40.0;
        while t <= 45.0 {
            let current = recommend_clothing(t, UnitSystem::Metric);
            assert!(current >= previous, "band regressed at {t}");
            previous = current;
            t += 0.25;
        }
    }

    #[test]
    fn test_advice_strings() {
        assert_eq!(
            Clothing::HeavyWinter.advice(),
            "Heavy winter clothing recommended."
        );
        assert_eq!(Clothing::Jacket.advice(), "Wear a jacket or sweater.");
    }
}
