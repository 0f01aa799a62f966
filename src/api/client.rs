//! OpenWeatherMap HTTP client.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use super::response::{ApiErrorBody, ForecastResponse};
use crate::config::Units;
use crate::error::WeatherError;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base URL without trailing slash.
    pub base_url: String,
    /// OpenWeatherMap API key.
    pub api_key: String,
    /// Measurement system.
    pub units: Units,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Async client for the forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: ApiConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Fetch the multi-day forecast for `city`.
    #[instrument(skip(self), fields(units = %self.config.units))]
    pub async fn get_forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        let response = self
            .client
            .get(self.forecast_url())
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_query()),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "forecast response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = api_error(status, &body);
            warn!(%err, "forecast request rejected");
            return Err(err);
        }

        let body = response.text().await?;
        let forecast: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        debug!(entries = forecast.list.len(), "forecast decoded");
        Ok(forecast)
    }
}

/// Build an error from a non-success response, preferring the service's message.
fn api_error(status: StatusCode, body: &str) -> WeatherError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    WeatherError::Api { status: status.as_u16(), message }
}
