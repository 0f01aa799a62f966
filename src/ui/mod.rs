//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`chart`]: Temperature/humidity chart with current-time marker and cursor tooltip
//! - [`common`]: Shared components (header, city input, conditions, status bar, help)
//! - [`dialog`]: Modal error dialog
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ City: [........] [ Get Weather ]     │
//! │ (common::render_input)               │
//! ├──────────────────────────────────────┤
//! │ Conditions (common::render_conditions)│
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Chart (chart::render)                │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - dialog::render_overlay
//!    - common::render_help
//! ```

pub mod chart;
pub mod common;
pub mod dialog;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub use chart::PlotArea;
pub use theme::Theme;

/// Minimum terminal size for a usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 18;

/// Draw one full frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5)
            .intersection(area);
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(3), // City input and button
        Constraint::Length(3), // Current conditions
        Constraint::Min(8),    // Chart
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_input(frame, app, chunks[1]);
    common::render_conditions(frame, app, chunks[2]);
    chart::render(frame, app, chunks[3]);
    common::render_status_bar(frame, app, chunks[4]);

    if app.dialog.is_some() {
        dialog::render_overlay(frame, app, area);
    }

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::app::tests::{app_with, sample_response};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_draw_before_fetch_shows_hint() {
        let (mut app, _) = app_with(sample_response);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Get Weather"));
        assert!(text.contains("Enter a city"));
        assert!(app.hit_areas.button.is_some());
        assert!(app.hit_areas.plot.is_none());
    }

    #[test]
    fn test_draw_forecast_records_plot_area() {
        let (mut app, _) = app_with(sample_response);
        app.city_input = "Berlin".into();
        app.request_fetch();
        app.run_pending_fetch();
        app.cursor_first();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Weather Forecast for Berlin"));
        assert!(text.contains("Temp: 2.0°C"));

        let plot = app.hit_areas.plot.unwrap();
        assert!(plot.width > 0);
    }

    #[test]
    fn test_plot_area_starts_after_drawn_axis() {
        let (mut app, _) = app_with(sample_response);
        app.city_input = "Berlin".into();
        app.request_fetch();
        app.run_pending_fetch();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        // The axis corner is the lowest `└` inside the chart borders.
        let buffer = terminal.backend().buffer();
        let corner = (0..buffer.area.height).rev().find_map(|y| {
            (1..buffer.area.width - 1).find(|&x| buffer[(x, y)].symbol() == "└")
        });
        let axis = corner.expect("y axis drawn");

        let plot = app.hit_areas.plot.unwrap();
        assert_eq!(plot.left, axis + 1);
        assert_eq!(plot.left + plot.width, buffer.area.width - 1);
        assert_eq!(plot.x_at(plot.left), Some(plot.x_min));
    }

    #[test]
    fn test_draw_error_dialog() {
        let (mut app, _) = app_with(sample_response);
        app.request_fetch();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        assert!(buffer_text(&terminal).contains("Please enter a city name."));
    }

    #[test]
    fn test_draw_small_terminal() {
        let (mut app, _) = app_with(sample_response);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        assert!(buffer_text(&terminal).contains("Terminal too small"));
    }
}
