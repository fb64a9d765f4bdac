//! Error types and handling for `weathercast`

use thiserror::Error;

/// Main error type for the `weathercast` application
#[derive(Error, Debug)]
pub enum WeathercastError {
    /// Configuration-related errors (missing API key, bad config file)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The provider could not resolve the requested city
    #[error("Location not found: {city}")]
    NotFound { city: String },

    /// Provider communication errors (non-success status, malformed payload)
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeathercastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new not-found error for a city name
    pub fn not_found<S: Into<String>>(city: S) -> Self {
        Self::NotFound { city: city.into() }
    }

    /// Create a new provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeathercastError::Config { message } => {
                format!("Configuration error: {message}. Check your config file and API key.")
            }
            WeathercastError::NotFound { city } => {
                format!("Could not find \"{city}\". Check the spelling and try again.")
            }
            WeathercastError::Provider { .. } => {
                "Unable to fetch weather data. Please check your internet connection and try again."
                    .to_string()
            }
            WeathercastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
