//! Weather condition groups and the current-conditions label.

use crate::api::ForecastEntry;
use crate::config::Units;

/// Default symbol for conditions without a dedicated one.
pub const DEFAULT_SYMBOL: &str = "🌍";

/// Weather condition group as reported by the forecast service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Haze,
    Fog,
    /// Any group without a dedicated symbol.
    Other,
}

impl WeatherCondition {
    /// Parse a condition group name, ignoring case.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "clear" => WeatherCondition::Clear,
            "clouds" => WeatherCondition::Clouds,
            "rain" => WeatherCondition::Rain,
            "drizzle" => WeatherCondition::Drizzle,
            "thunderstorm" => WeatherCondition::Thunderstorm,
            "snow" => WeatherCondition::Snow,
            "mist" => WeatherCondition::Mist,
            "haze" => WeatherCondition::Haze,
            "fog" => WeatherCondition::Fog,
            _ => WeatherCondition::Other,
        }
    }

    /// Returns the display symbol for this condition.
    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀️",
            WeatherCondition::Clouds => "☁️",
            WeatherCondition::Rain => "🌧️",
            WeatherCondition::Drizzle => "🌦️",
            WeatherCondition::Thunderstorm => "⛈️",
            WeatherCondition::Snow => "❄️",
            WeatherCondition::Mist | WeatherCondition::Fog => "🌫️",
            WeatherCondition::Haze => "🌁",
            WeatherCondition::Other => DEFAULT_SYMBOL,
        }
    }
}

/// Symbol for a free-text description, keyed on its first word.
pub fn weather_symbol(description: &str) -> &'static str {
    let first = description.split_whitespace().next().unwrap_or_default();
    WeatherCondition::from_label(first).symbol()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Conditions of the first forecast entry, shown above the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: f64,
    /// Capitalized description (e.g. "Light rain").
    pub description: String,
    pub condition: WeatherCondition,
}

impl CurrentConditions {
    /// Build from a forecast entry.
    ///
    /// The symbol is keyed on the first word of the description, so
    /// "light rain" gets the default symbol while "rain" gets 🌧️.
    pub fn from_entry(entry: &ForecastEntry) -> Self {
        let description = capitalize(
            entry.primary_weather().map(|w| w.description.as_str()).unwrap_or_default(),
        );
        let first = description.split_whitespace().next().unwrap_or_default();

        Self {
            temperature: entry.main.temp,
            humidity: entry.main.humidity,
            condition: WeatherCondition::from_label(first),
            description,
        }
    }

    /// Multi-line label text.
    pub fn display(&self, units: Units) -> String {
        format!(
            "🌡 Temperature: {}{}\n💧 Humidity: {}%\n☁️ Weather: {} {}",
            self.temperature,
            units.temperature_symbol(),
            self.humidity,
            self.description,
            self.condition.symbol()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MainReadings, WeatherDescription};

    fn entry(main: &str, description: &str) -> ForecastEntry {
        ForecastEntry {
            dt: 1_705_320_000,
            main: MainReadings { temp: 5.5, humidity: 75.0 },
            weather: vec![WeatherDescription {
                main: main.to_string(),
                description: description.to_string(),
            }],
            dt_txt: None,
        }
    }

    #[test]
    fn test_known_descriptions_map_to_symbols() {
        assert_eq!(weather_symbol("Clear"), "☀️");
        assert_eq!(weather_symbol("Clouds"), "☁️");
        assert_eq!(weather_symbol("Rain"), "🌧️");
        assert_eq!(weather_symbol("Thunderstorm"), "⛈️");
        assert_eq!(weather_symbol("Fog"), "🌫️");
        assert_eq!(weather_symbol("Clear sky"), "☀️");
        assert_eq!(weather_symbol("snow"), "❄️");
    }

    #[test]
    fn test_unknown_description_falls_back() {
        assert_eq!(weather_symbol("Tornado"), DEFAULT_SYMBOL);
        assert_eq!(weather_symbol("Overcast clouds"), DEFAULT_SYMBOL);
        assert_eq!(weather_symbol(""), DEFAULT_SYMBOL);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("light rain"), "Light rain");
        assert_eq!(capitalize("OVERCAST CLOUDS"), "Overcast clouds");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_conditions_key_on_description_first_word() {
        let conditions = CurrentConditions::from_entry(&entry("Clouds", "overcast clouds"));
        assert_eq!(conditions.condition, WeatherCondition::Other);
        assert_eq!(conditions.description, "Overcast clouds");

        let conditions = CurrentConditions::from_entry(&entry("Clear", "clear sky"));
        assert_eq!(conditions.condition, WeatherCondition::Clear);

        let conditions = CurrentConditions::from_entry(&entry("", "mist"));
        assert_eq!(conditions.condition, WeatherCondition::Mist);
    }

    #[test]
    fn test_conditions_without_weather() {
        let mut no_weather = entry("", "");
        no_weather.weather.clear();
        let conditions = CurrentConditions::from_entry(&no_weather);
        assert_eq!(conditions.condition, WeatherCondition::Other);
        assert_eq!(conditions.description, "");
    }

    #[test]
    fn test_display_text() {
        let conditions = CurrentConditions::from_entry(&entry("Rain", "light rain"));
        assert_eq!(
            conditions.display(Units::Metric),
            "🌡 Temperature: 5.5°C\n💧 Humidity: 75%\n☁️ Weather: Light rain 🌍"
        );

        let conditions = CurrentConditions::from_entry(&entry("Rain", "rain"));
        assert!(conditions.display(Units::Metric).ends_with("Weather: Rain 🌧️"));
        assert!(conditions.display(Units::Imperial).contains("5.5°F"));
    }
}
