//! Runtime settings.
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional settings file, then `WEATHERWATCH_*` environment variables. The
//! API key is always read from [`API_KEY_VAR`].

use std::fmt;
use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::api::ApiConfig;
use crate::error::WeatherError;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Prefix for environment overrides (e.g. `WEATHERWATCH_TIMEOUT_SECS`).
pub const ENV_PREFIX: &str = "WEATHERWATCH";

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Measurement system requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius.
    #[default]
    Metric,
    /// Fahrenheit.
    Imperial,
}

impl Units {
    /// Value of the `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Temperature suffix for display.
    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Settings loaded from defaults, file and environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the forecast API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Measurement system.
    pub units: Units,
}

impl Settings {
    /// Load settings, optionally merging a settings file.
    ///
    /// A missing file is an error when a path is given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self, WeatherError> {
        let mut builder = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("units", Units::default().as_query())?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Combine these settings with the API key into a client configuration.
    pub fn api_config(&self, api_key: String) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            api_key,
            units: self.units,
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Read the API key from the environment.
pub fn api_key_from_env() -> Result<String, WeatherError> {
    api_key_from(std::env::var(API_KEY_VAR).ok())
}

/// Validate a raw API key value. Unset or blank counts as missing.
pub fn api_key_from(value: Option<String>) -> Result<String, WeatherError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(WeatherError::MissingApiKey(API_KEY_VAR)),
    }
}
