//! Forecast reshaping and the lookups the chart needs.

use std::time::Instant;

use chrono::{DateTime, Local, TimeZone};

use super::condition::CurrentConditions;
use crate::api::ForecastResponse;
use crate::error::WeatherError;

/// Denominator padding for the temperature gradient, so a flat series maps to shade 0.
const SHADE_EPSILON: f64 = 1e-5;

/// One fetched forecast as parallel ordered sequences.
///
/// `times`, `temperatures` and `humidity` always have the same length and
/// are never empty.
#[derive(Debug, Clone)]
pub struct Forecast {
    /// City name as typed by the user.
    pub city: String,
    pub times: Vec<DateTime<Local>>,
    pub temperatures: Vec<f64>,
    pub humidity: Vec<f64>,
    /// Conditions of the first entry.
    pub current: CurrentConditions,
    /// When this forecast was fetched.
    pub fetched_at: Instant,
}

impl Forecast {
    /// Reshape an API response into parallel sequences.
    pub fn from_response(city: &str, response: &ForecastResponse) -> Result<Self, WeatherError> {
        let first = response
            .list
            .first()
            .ok_or_else(|| WeatherError::EmptyForecast(city.to_string()))?;

        let mut times = Vec::with_capacity(response.list.len());
        let mut temperatures = Vec::with_capacity(response.list.len());
        let mut humidity = Vec::with_capacity(response.list.len());

        for entry in &response.list {
            let time = Local
                .timestamp_opt(entry.dt, 0)
                .single()
                .ok_or_else(|| WeatherError::Parse(format!("Invalid timestamp: {}", entry.dt)))?;
            times.push(time);
            temperatures.push(entry.main.temp);
            humidity.push(entry.main.humidity);
        }

        Ok(Self {
            city: city.to_string(),
            times,
            temperatures,
            humidity,
            current: CurrentConditions::from_entry(first),
            fetched_at: Instant::now(),
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when there are no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamp of sample `index` in unix seconds, as a chart coordinate.
    pub fn x(&self, index: usize) -> Option<f64> {
        self.times.get(index).map(|t| t.timestamp() as f64)
    }

    /// First and last timestamp in seconds.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        Some((self.x(0)?, self.x(self.len().checked_sub(1)?)?))
    }

    /// Minimum and maximum temperature.
    pub fn temperature_bounds(&self) -> Option<(f64, f64)> {
        min_max(self.temperatures.iter().copied())
    }

    /// Minimum and maximum over both temperature and humidity.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        min_max(self.temperatures.iter().chain(self.humidity.iter()).copied())
    }

    /// Index of the sample nearest to `x` (unix seconds).
    ///
    /// Ties resolve to the earlier sample.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, t) in self.times.iter().enumerate() {
            let distance = (t.timestamp() as f64 - x).abs();
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((i, distance)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Gradient shade in `0..levels` for each temperature, scaled between the
    /// coldest and warmest sample.
    pub fn temperature_shades(&self, levels: usize) -> Vec<usize> {
        let Some((min, max)) = self.temperature_bounds() else {
            return Vec::new();
        };
        if levels == 0 {
            return vec![0; self.len()];
        }

        let top = levels - 1;
        self.temperatures
            .iter()
            .map(|&t| {
                let scaled = (t - min) / (max - min + SHADE_EPSILON) * top as f64;
                (scaled as usize).min(top)
            })
            .collect()
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ForecastEntry, MainReadings, WeatherDescription};

    const START: i64 = 1_705_320_000;
    const STEP: i64 = 3 * 3600;

    fn response(samples: &[(f64, f64)]) -> ForecastResponse {
        ForecastResponse {
            list: samples
                .iter()
                .enumerate()
                .map(|(i, &(temp, humidity))| ForecastEntry {
                    dt: START + i as i64 * STEP,
                    main: MainReadings { temp, humidity },
                    weather: vec![WeatherDescription {
                        main: "Clear".into(),
                        description: "clear sky".into(),
                    }],
                    dt_txt: None,
                })
                .collect(),
            city: None,
        }
    }

    fn forecast(samples: &[(f64, f64)]) -> Forecast {
        Forecast::from_response("Berlin", &response(samples)).unwrap()
    }

    #[test]
    fn test_from_response_builds_parallel_sequences() {
        let f = forecast(&[(5.0, 70.0), (7.5, 65.0), (3.0, 90.0)]);
        assert_eq!(f.city, "Berlin");
        assert_eq!(f.len(), 3);
        assert_eq!(f.temperatures, vec![5.0, 7.5, 3.0]);
        assert_eq!(f.humidity, vec![70.0, 65.0, 90.0]);
        assert_eq!(f.times[1].timestamp(), START + STEP);
        assert!((f.current.temperature - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_response_is_error() {
        let result = Forecast::from_response("Nowhere", &ForecastResponse::default());
        assert!(matches!(result, Err(WeatherError::EmptyForecast(ref c)) if c == "Nowhere"));
    }

    #[test]
    fn test_bounds() {
        let f = forecast(&[(5.0, 70.0), (-2.0, 65.0), (3.0, 90.0)]);
        assert_eq!(f.temperature_bounds(), Some((-2.0, 5.0)));
        assert_eq!(f.value_bounds(), Some((-2.0, 90.0)));
        assert_eq!(f.time_bounds(), Some((START as f64, (START + 2 * STEP) as f64)));
    }

    #[test]
    fn test_nearest_index() {
        let f = forecast(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        assert_eq!(f.nearest_index(START as f64 - 10_000.0), Some(0));
        assert_eq!(f.nearest_index((START + STEP + 100) as f64), Some(1));
        assert_eq!(f.nearest_index((START + 2 * STEP - 100) as f64), Some(2));
        assert_eq!(f.nearest_index((START + 10 * STEP) as f64), Some(2));
    }

    #[test]
    fn test_nearest_index_tie_prefers_earlier() {
        let f = forecast(&[(1.0, 1.0), (2.0, 2.0)]);
        let midpoint = (START + STEP / 2) as f64;
        assert_eq!(f.nearest_index(midpoint), Some(0));
    }

    #[test]
    fn test_temperature_shades() {
        let f = forecast(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        assert_eq!(f.temperature_shades(3), vec![0, 0, 1]);
        assert_eq!(f.temperature_shades(11), vec![0, 4, 9]);

        let shades = f.temperature_shades(1);
        assert_eq!(shades, vec![0, 0, 0]);
    }

    #[test]
    fn test_temperature_shades_flat_series() {
        let f = forecast(&[(4.0, 0.0), (4.0, 0.0)]);
        assert_eq!(f.temperature_shades(5), vec![0, 0]);
    }
}
