//! Error types for fetching and reshaping forecasts.

use thiserror::Error;

/// Errors that can occur while loading settings or fetching a forecast.
///
/// Every variant is terminal to the current fetch action only; the app shows
/// the message in a dialog and stays usable.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The API credential is not set in the environment.
    #[error("{0} environment variable not set.")]
    MissingApiKey(&'static str),

    /// The city field was empty when the fetch action was triggered.
    #[error("Please enter a city name.")]
    EmptyCity,

    /// HTTP request failed before a response was received.
    #[error("Error fetching weather data: {0}")]
    Request(String),

    /// Timeout waiting for response.
    #[error("Error fetching weather data: request timed out")]
    Timeout,

    /// The weather service answered with a non-success status.
    #[error("Error fetching weather data: {status} {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message reported by the service, or the status reason.
        message: String,
    },

    /// Failed to parse response.
    #[error("Failed to parse weather data: {0}")]
    Parse(String),

    /// The response contained no forecast entries.
    #[error("No forecast data returned for {0}")]
    EmptyForecast(String),

    /// Settings could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WeatherError::Timeout
        } else if err.is_decode() {
            WeatherError::Parse(err.to_string())
        } else {
            WeatherError::Request(err.to_string())
        }
    }
}

impl From<config::ConfigError> for WeatherError {
    fn from(err: config::ConfigError) -> Self {
        WeatherError::Config(err.to_string())
    }
}
