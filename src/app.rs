//! Application state and the fetch action.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::api::ForecastSource;
use crate::config::Units;
use crate::data::Forecast;
use crate::error::WeatherError;
use crate::ui::chart::PlotArea;
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The city text box.
    #[default]
    Input,
    /// The chart (cursor navigation).
    Chart,
}

impl Focus {
    /// Switch to the other widget.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::Chart,
            Focus::Chart => Focus::Input,
        }
    }
}

/// A modal message the user must dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

/// Screen regions recorded during rendering, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitAreas {
    pub input: Option<Rect>,
    pub button: Option<Rect>,
    pub plot: Option<PlotArea>,
}

/// The sample under the chart cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: DateTime<Local>,
    pub temperature: f64,
    pub humidity: f64,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub focus: Focus,
    pub show_help: bool,

    // Data source
    source: Box<dyn ForecastSource>,
    pub units: Units,
    pub forecast: Option<Forecast>,

    // Fetch action
    pub city_input: String,
    pending_fetch: Option<String>,

    // Chart cursor (index into the forecast sequences)
    pub cursor: Option<usize>,

    // Overlays
    pub dialog: Option<Dialog>,

    // UI
    pub theme: Theme,
    pub hit_areas: HitAreas,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given forecast source.
    pub fn new(source: Box<dyn ForecastSource>, units: Units, theme: Theme) -> Self {
        Self {
            running: true,
            focus: Focus::Input,
            show_help: false,
            source,
            units,
            forecast: None,
            city_input: String::new(),
            pending_fetch: None,
            cursor: None,
            dialog: None,
            theme,
            hit_areas: HitAreas::default(),
            status_message: None,
        }
    }

    /// Returns a description of the forecast source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    /// Whether a fetch is waiting to run on the next loop iteration.
    pub fn fetch_pending(&self) -> bool {
        self.pending_fetch.is_some()
    }

    /// Trigger the fetch action for the city in the text box.
    ///
    /// An empty city opens an error dialog and never reaches the network.
    /// Otherwise the fetch is queued so the "Fetching" status can be drawn
    /// before [`App::run_pending_fetch`] blocks.
    pub fn request_fetch(&mut self) -> bool {
        let city = self.city_input.trim();
        if city.is_empty() {
            self.show_error(&WeatherError::EmptyCity);
            return false;
        }

        let city = city.to_string();
        self.set_status_message(format!("Fetching weather for {}...", city));
        self.pending_fetch = Some(city);
        true
    }

    /// Run a queued fetch, blocking until the source returns.
    ///
    /// Returns true if a fetch ran. Failures open the error dialog and leave
    /// the previous forecast in place.
    pub fn run_pending_fetch(&mut self) -> bool {
        let Some(city) = self.pending_fetch.take() else {
            return false;
        };

        let result = self
            .source
            .fetch(&city)
            .and_then(|response| Forecast::from_response(&city, &response));

        match result {
            Ok(forecast) => {
                info!(city = %city, samples = forecast.len(), "forecast loaded");
                self.set_status_message(format!(
                    "Loaded {} samples for {}",
                    forecast.len(),
                    city
                ));
                self.forecast = Some(forecast);
                self.cursor = None;
            }
            Err(err) => {
                warn!(city = %city, %err, "forecast fetch failed");
                self.status_message = None;
                self.show_error(&err);
            }
        }
        true
    }

    /// Open the error dialog with the given error's message.
    pub fn show_error(&mut self, err: &WeatherError) {
        self.dialog = Some(Dialog {
            title: "Error".to_string(),
            message: err.to_string(),
        });
    }

    /// Close the dialog if open.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Append a character to the city input.
    pub fn input_push(&mut self, c: char) {
        self.city_input.push(c);
    }

    /// Remove the last character from the city input.
    pub fn input_pop(&mut self) {
        self.city_input.pop();
    }

    /// Clear the city input.
    pub fn input_clear(&mut self) {
        self.city_input.clear();
    }

    /// Move keyboard focus to the other widget.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    fn sample_count(&self) -> usize {
        self.forecast.as_ref().map_or(0, Forecast::len)
    }

    /// Move the chart cursor to the next sample.
    pub fn cursor_next(&mut self) {
        let count = self.sample_count();
        if count == 0 {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => (i + 1).min(count - 1),
            None => 0,
        });
    }

    /// Move the chart cursor to the previous sample.
    pub fn cursor_prev(&mut self) {
        let count = self.sample_count();
        if count == 0 {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => i.saturating_sub(1),
            None => count - 1,
        });
    }

    /// Jump the cursor to the first sample.
    pub fn cursor_first(&mut self) {
        if self.sample_count() > 0 {
            self.cursor = Some(0);
        }
    }

    /// Jump the cursor to the last sample.
    pub fn cursor_last(&mut self) {
        if let Some(last) = self.sample_count().checked_sub(1) {
            self.cursor = Some(last);
        }
    }

    /// Hide the cursor and tooltip.
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    /// Select the sample nearest to the time under a terminal column.
    ///
    /// Columns outside the plot area hide the tooltip.
    pub fn hover_column(&mut self, column: u16) {
        let x = self.hit_areas.plot.and_then(|plot| plot.x_at(column));
        self.cursor = match (x, &self.forecast) {
            (Some(x), Some(forecast)) => forecast.nearest_index(x),
            _ => None,
        };
    }

    /// The sample under the cursor, if any.
    pub fn selected_sample(&self) -> Option<Sample> {
        let forecast = self.forecast.as_ref()?;
        let i = self.cursor?;
        Some(Sample {
            time: *forecast.times.get(i)?,
            temperature: *forecast.temperatures.get(i)?,
            humidity: *forecast.humidity.get(i)?,
        })
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
