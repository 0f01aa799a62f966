//! Forecast API access.
//!
//! [`OpenWeatherClient`] performs the HTTP request. The app talks to it through
//! the [`ForecastSource`] trait, implemented by [`BlockingSource`] for the
//! synchronous UI loop and by in-memory stubs in tests.

mod blocking;
mod client;
mod response;

pub use blocking::BlockingSource;
pub use client::{ApiConfig, OpenWeatherClient};
pub use response::{
    ApiErrorBody, CityInfo, ForecastEntry, ForecastResponse, MainReadings, WeatherDescription,
};

use std::fmt::Debug;

use crate::error::WeatherError;

/// Trait for fetching forecasts by city name.
///
/// # Example
///
/// ```no_run
/// use weatherwatch::{ApiConfig, BlockingSource, ForecastSource, Units};
///
/// let config = ApiConfig {
///     base_url: "https://api.openweathermap.org/data/2.5".into(),
///     api_key: "your-key".into(),
///     units: Units::Metric,
///     timeout_secs: 30,
/// };
/// let mut source = BlockingSource::new(config).unwrap();
/// let forecast = source.fetch("Berlin").unwrap();
/// println!("Got {} entries", forecast.list.len());
/// ```
pub trait ForecastSource: Debug {
    /// Fetch the forecast for `city`, blocking until it completes.
    fn fetch(&mut self, city: &str) -> Result<ForecastResponse, WeatherError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the status bar.
    fn description(&self) -> &str;
}
