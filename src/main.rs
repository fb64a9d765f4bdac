//! `weathercast` CLI entry point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use weathercast::config::MAX_FORECAST_DAYS;
use weathercast::{
    UnitSystem, WeatherApiClient, WeatherReport, WeathercastConfig, build_report,
};

/// Current weather, 7-day forecast, and a naive next-day temperature
/// estimate with matching clothing advice.
#[derive(Parser, Debug)]
#[command(name = "weathercast", version, about)]
struct Args {
    /// City to look up; prompted for interactively when omitted
    city: Option<String>,

    /// Unit system for provider requests and display
    #[arg(long, value_enum)]
    units: Option<UnitSystem>,

    /// Number of forecast days to request (1-7)
    #[arg(long)]
    days: Option<u32>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        if let Some(app_err) = e.downcast_ref::<weathercast::WeathercastError>() {
            eprintln!("Error: {}", app_err.user_message());
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = WeathercastConfig::load_from_path(args.config.clone())?;

    init_logging(&config, args.verbose);
    config.validate()?;

    let units = args.units.unwrap_or(config.defaults.units);
    let days = args
        .days
        .unwrap_or(config.defaults.forecast_days)
        .clamp(1, MAX_FORECAST_DAYS);

    let city = match args.city {
        Some(city) => city,
        None => prompt_city()?,
    };

    let client = WeatherApiClient::new(&config)?;
    let report = build_report(&client, &city, units, days)?;
    render_report(&report);

    Ok(())
}

fn init_logging(config: &WeathercastConfig, verbose: bool) {
    let level = if verbose { "debug" } else { &config.logging.level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weathercast={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt_city() -> std::io::Result<String> {
    print!("Enter a city: ");
    std::io::stdout().flush()?;

    let mut city = String::new();
    std::io::stdin().read_line(&mut city)?;
    Ok(city.trim().to_string())
}

fn render_report(report: &WeatherReport) {
    let current = &report.current;
    let temp_label = report.units.temperature_label();

    match &current.location.country {
        Some(country) => println!("Weather in {}, {}", current.location.name, country),
        None => println!("Weather in {}", current.location.name),
    }
    println!("  Temperature: {:.1}{}", current.temperature, temp_label);
    println!("  Condition:   {}", title_case(&current.description));
    println!("  Humidity:    {}%", current.humidity);
    println!(
        "  Wind speed:  {:.1} {}",
        current.wind_speed,
        report.units.wind_speed_label()
    );

    println!();
    if report.series.is_empty() {
        println!("Unable to fetch forecast data.");
        return;
    }

    println!("Forecast ({} days):", report.series.len());
    render_series_chart(&report.series, temp_label);

    println!();
    match &report.outlook {
        Some(outlook) => {
            println!(
                "Predicted temperature for tomorrow: {:.2}{}",
                outlook.predicted_temp, temp_label
            );
            println!("Clothing recommendation: {}", outlook.clothing.advice());
        }
        None => println!("Not enough forecast data for a prediction."),
    }
}

/// Horizontal bar chart of the daily series, one row per day
fn render_series_chart(series: &[f64], temp_label: &str) {
    const MAX_BAR: usize = 30;

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    for (i, &temp) in series.iter().enumerate() {
        let bar_len = if span > 0.0 {
            // Coldest day still gets a visible bar
            1 + ((temp - min) / span * (MAX_BAR - 1) as f64).round() as usize
        } else {
            MAX_BAR / 2
        };
        println!(
            "  Day {}  {:>7.1}{}  {}",
            i + 1,
            temp,
            temp_label,
            "█".repeat(bar_len)
        );
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("clear sky"), "Clear Sky");
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case(""), "");
    }
}
