//! Forecast data models.
//!
//! ## Submodules
//!
//! - [`forecast`]: Reshapes an API response into the parallel sequences the
//!   chart draws ([`Forecast`]) and provides nearest-sample lookup
//! - [`condition`]: Weather condition groups, their symbols and the
//!   current-conditions label ([`CurrentConditions`])
//!
//! ## Data Flow
//!
//! ```text
//! ForecastResponse (raw JSON)
//!        │
//!        ▼
//! Forecast::from_response()
//!        │
//!        ├──▶ times / temperatures / humidity
//!        │
//!        └──▶ CurrentConditions (first entry)
//! ```

pub mod condition;
pub mod forecast;

pub use condition::{weather_symbol, CurrentConditions, WeatherCondition, DEFAULT_SYMBOL};
pub use forecast::Forecast;
