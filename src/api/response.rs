//! Wire types for the OpenWeatherMap 5 day / 3 hour forecast endpoint.
//!
//! Only the fields the viewer uses are declared; everything else in the
//! document is ignored by serde.

use serde::{Deserialize, Serialize};

/// Top-level forecast document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Forecast entries in ascending time order.
    pub list: Vec<ForecastEntry>,
    /// Resolved city metadata, when the service includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<CityInfo>,
}

/// One timestamped forecast sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp (seconds, UTC).
    pub dt: i64,
    /// Measurements for this sample.
    pub main: MainReadings,
    /// Weather conditions; the first element is the primary one.
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
    /// Human-readable timestamp (`"2024-01-15 12:00:00"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt_txt: Option<String>,
}

/// Temperature and humidity readings of an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature in the requested units.
    pub temp: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

/// Weather condition of an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherDescription {
    /// Condition group (e.g. "Rain", "Clouds").
    #[serde(default)]
    pub main: String,
    /// Condition within the group (e.g. "light rain").
    #[serde(default)]
    pub description: String,
}

/// City metadata attached to a forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityInfo {
    /// City name as resolved by the service.
    pub name: String,
    /// ISO country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Error document returned with non-success statuses.
///
/// `cod` is a string for some errors and a number for others.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Status code as echoed by the service.
    #[serde(default)]
    pub cod: serde_json::Value,
    /// Error message.
    #[serde(default)]
    pub message: String,
}

impl ForecastEntry {
    /// The primary weather condition, if any.
    pub fn primary_weather(&self) -> Option<&WeatherDescription> {
        self.weather.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_forecast() {
        let json = r#"{
            "cod": "200",
            "cnt": 2,
            "list": [
                {
                    "dt": 1705320000,
                    "main": { "temp": 5.5, "feels_like": 2.1, "humidity": 75 },
                    "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
                    "dt_txt": "2024-01-15 12:00:00"
                },
                {
                    "dt": 1705330800,
                    "main": { "temp": 4.25, "humidity": 80 },
                    "weather": []
                }
            ],
            "city": { "name": "Berlin", "country": "DE" }
        }"#;

        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.list.len(), 2);
        assert_eq!(response.list[0].dt, 1705320000);
        assert!((response.list[0].main.humidity - 75.0).abs() < f64::EPSILON);
        assert_eq!(response.list[0].primary_weather().unwrap().main, "Rain");
        assert!(response.list[1].primary_weather().is_none());
        assert_eq!(response.city.unwrap().name, "Berlin");
    }

    #[test]
    fn test_missing_list_is_error() {
        let result: Result<ForecastResponse, _> = serde_json::from_str(r#"{"cod": "200"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_body_numeric_or_string_cod() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"cod": 401, "message": "Invalid API key"}"#).unwrap();
        assert_eq!(body.message, "Invalid API key");

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"cod": "404", "message": "city not found"}"#).unwrap();
        assert_eq!(body.cod, serde_json::json!("404"));
    }
}
