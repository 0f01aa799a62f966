// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # weatherwatch
//!
//! A terminal weather forecast viewer. Type a city, press Enter, and the
//! multi-day OpenWeatherMap forecast is drawn as an interactive
//! temperature/humidity chart.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(reshaping)    │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │ fetch action                                        │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │   api   │──── HTTP GET ───▶ OpenWeatherMap /forecast     │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, the fetch action, chart cursor and dialogs
//! - **[`api`]**: HTTP client ([`OpenWeatherClient`]) and the [`ForecastSource`]
//!   trait the app fetches through
//! - **[`data`]**: Reshapes a response into parallel time/temperature/humidity
//!   sequences ([`Forecast`]) and derives the current-conditions label
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`config`]**: Settings layered from defaults, file and environment
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! export OPENWEATHER_API_KEY=...
//! weatherwatch
//!
//! # Pre-fill the city and fetch on start
//! weatherwatch --city Berlin --units imperial
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use weatherwatch::{Forecast, OpenWeatherClient, Settings};
//!
//! # tokio_test::block_on(async {
//! let settings = Settings::load(None).unwrap();
//! let client = OpenWeatherClient::new(settings.api_config("your-key".into())).unwrap();
//! let response = client.get_forecast("Berlin").await.unwrap();
//! let forecast = Forecast::from_response("Berlin", &response).unwrap();
//! println!("{} samples, now {}", forecast.len(), forecast.current.description);
//! # });
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod ui;

// Re-export main types for convenience
pub use api::{ApiConfig, BlockingSource, ForecastResponse, ForecastSource, OpenWeatherClient};
pub use app::App;
pub use crate::config::{Settings, Units};
pub use data::{weather_symbol, CurrentConditions, Forecast, WeatherCondition};
pub use error::WeatherError;
