//! Blocking forecast source for the UI thread.

use tokio::runtime::{Builder, Runtime};

use super::{ApiConfig, ForecastResponse, ForecastSource, OpenWeatherClient};
use crate::error::WeatherError;

/// A forecast source that blocks the caller until the HTTP response arrives.
///
/// Owns a current-thread tokio runtime so the async client can be driven
/// from the synchronous event loop.
#[derive(Debug)]
pub struct BlockingSource {
    runtime: Runtime,
    client: OpenWeatherClient,
    description: String,
}

impl BlockingSource {
    /// Create a new blocking source for the given API configuration.
    pub fn new(config: ApiConfig) -> Result<Self, WeatherError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| WeatherError::Request(e.to_string()))?;
        let description = format!("openweathermap: {}", config.base_url);
        let client = OpenWeatherClient::new(config)?;

        Ok(Self { runtime, client, description })
    }
}

impl ForecastSource for BlockingSource {
    fn fetch(&mut self, city: &str) -> Result<ForecastResponse, WeatherError> {
        self.runtime.block_on(self.client.get_forecast(city))
    }

    fn description(&self) -> &str {
        &self.description
    }
}
