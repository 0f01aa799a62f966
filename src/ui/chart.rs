//! Forecast chart rendering.
//!
//! Draws temperature (colored by a gradient from coldest to warmest sample)
//! and humidity over time, a marker at the current time, and a cursor with a
//! tooltip for the selected sample.

use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::data::Forecast;

/// Number of time labels on the x axis.
const X_LABELS: usize = 5;
/// Number of value labels on the y axis.
const Y_LABELS: usize = 3;
/// Tooltip size including borders.
const TOOLTIP_WIDTH: u16 = 20;
const TOOLTIP_HEIGHT: u16 = 5;

/// Terminal columns covered by the plotted data and the time range they span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    /// First column of the plot.
    pub left: u16,
    /// Width of the plot in columns.
    pub width: u16,
    pub x_min: f64,
    pub x_max: f64,
}

impl PlotArea {
    /// Chart x coordinate (unix seconds) under `column`.
    pub fn x_at(&self, column: u16) -> Option<f64> {
        if self.width == 0 || column < self.left || column >= self.left + self.width {
            return None;
        }
        let span = (self.width - 1).max(1) as f64;
        let frac = (column - self.left) as f64 / span;
        Some(self.x_min + frac * (self.x_max - self.x_min))
    }

    /// Column closest to chart x coordinate `x`, clamped to the plot.
    pub fn column_at(&self, x: f64) -> u16 {
        if self.width == 0 || self.x_max <= self.x_min {
            return self.left;
        }
        let frac = ((x - self.x_min) / (self.x_max - self.x_min)).clamp(0.0, 1.0);
        self.left + (frac * (self.width - 1) as f64).round() as u16
    }
}

/// Render the forecast chart, or a placeholder before the first fetch.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Chart;
    let Some(forecast) = app.forecast.as_ref() else {
        app.hit_areas.plot = None;
        let block = Block::default()
            .title(" Weather Forecast ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(app.theme.focus_style(focused));
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Enter a city and press Enter to fetch the forecast",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let Some((x_min, x_max)) = padded_time_bounds(forecast) else {
        return;
    };
    let (y_min, y_max) = padded_value_bounds(forecast);
    let unit = app.units.temperature_symbol();

    // Temperature is drawn one segment per sample pair so each gets its own shade.
    let points: Vec<(f64, f64)> = (0..forecast.len())
        .filter_map(|i| Some((forecast.x(i)?, forecast.temperatures[i])))
        .collect();
    let segments: Vec<&[(f64, f64)]> = if points.len() > 1 {
        points.windows(2).collect()
    } else {
        vec![points.as_slice()]
    };
    let shades = forecast.temperature_shades(forecast.len());

    let humidity: Vec<(f64, f64)> = (0..forecast.len())
        .filter_map(|i| Some((forecast.x(i)?, forecast.humidity[i])))
        .collect();

    let now = Local::now();
    let now_x = now.timestamp() as f64;
    let now_line = [(now_x, y_min), (now_x, y_max)];

    let cursor_x = app.cursor.and_then(|i| forecast.x(i));
    let cursor_line = cursor_x.map(|x| [(x, y_min), (x, y_max)]);

    let mut datasets = Vec::with_capacity(segments.len() + 3);
    for (i, segment) in segments.iter().enumerate() {
        let color =
            app.theme.temperature_color(shades.get(i).copied().unwrap_or(0), forecast.len());
        let mut dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(if segment.len() > 1 { GraphType::Line } else { GraphType::Scatter })
            .style(Style::default().fg(color))
            .data(segment);
        if i == 0 {
            dataset = dataset.name(format!("Temperature ({})", unit));
        }
        datasets.push(dataset);
    }

    datasets.push(
        Dataset::default()
            .name("Humidity (%)")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.humidity))
            .data(&humidity),
    );

    if (x_min..=x_max).contains(&now_x) {
        datasets.push(
            Dataset::default()
                .name(format!("Current Time: {}", now.format("%H:%M")))
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(app.theme.now_line))
                .data(&now_line),
        );
    }

    if let Some(ref line) = cursor_line {
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(app.theme.cursor))
                .data(line),
        );
    }

    let x_labels = time_labels(x_min, x_max);
    let y_labels = value_labels(y_min, y_max);
    let y_label_width = y_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let first_x_label_width = x_labels.first().map_or(0, |l| l.chars().count());

    let block = Block::default()
        .title(Span::styled(
            format!(" Weather Forecast for {} ", forecast.city),
            app.theme.header,
        ))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.focus_style(focused));
    let inner = block.inner(area);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time of Day")
                .style(Style::default().fg(app.theme.border))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(Style::default().fg(app.theme.border))
                .bounds([y_min, y_max])
                .labels(y_labels),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);

    let plot = plot_area(inner, y_label_width as u16, first_x_label_width as u16, x_min, x_max);
    app.hit_areas.plot = Some(plot);

    if let (Some(sample), Some(x)) = (app.selected_sample(), cursor_x) {
        let lines = vec![
            Line::from(format!("Time: {}", sample.time.format("%H:%M"))),
            Line::from(format!("Temp: {:.1}{}", sample.temperature, unit)),
            Line::from(format!("Hum:  {:.0}%", sample.humidity)),
        ];
        render_tooltip(frame, app, inner, plot.column_at(x), lines);
    }
}

/// Columns the chart widget plots into, given the label widths it lays out.
///
/// The y axis sits after the wider of the y labels and the part of the
/// left-aligned first x label that overhangs it, capped at a third of the
/// inner width. Data starts one column after the axis line.
fn plot_area(
    inner: Rect,
    y_label_width: u16,
    first_x_label_width: u16,
    x_min: f64,
    x_max: f64,
) -> PlotArea {
    let labels = y_label_width
        .max(first_x_label_width.saturating_sub(1))
        .min(inner.width / 3);
    let axis = inner.x + labels;
    let left = if axis + 1 < inner.right() { axis + 1 } else { axis };
    PlotArea {
        left,
        width: inner.right().saturating_sub(left),
        x_min,
        x_max,
    }
}

/// Draw the tooltip box next to the cursor column, flipping left near the edge.
fn render_tooltip(frame: &mut Frame, app: &App, inner: Rect, column: u16, lines: Vec<Line>) {
    if inner.width < TOOLTIP_WIDTH + 2 || inner.height < TOOLTIP_HEIGHT + 1 {
        return;
    }

    let right_edge = inner.x + inner.width;
    let x = if column + 2 + TOOLTIP_WIDTH <= right_edge {
        column + 2
    } else {
        column.saturating_sub(TOOLTIP_WIDTH + 1).max(inner.x)
    };
    let tooltip_area = Rect::new(x, inner.y + 1, TOOLTIP_WIDTH, TOOLTIP_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.cursor));

    frame.render_widget(Clear, tooltip_area);
    frame.render_widget(Paragraph::new(lines).block(block), tooltip_area);
}

/// Time range of the forecast, widened by an hour each side for a single sample.
fn padded_time_bounds(forecast: &Forecast) -> Option<(f64, f64)> {
    let (lo, hi) = forecast.time_bounds()?;
    if hi > lo {
        Some((lo, hi))
    } else {
        Some((lo - 3600.0, hi + 3600.0))
    }
}

/// Value range over temperature and humidity with 5% headroom.
fn padded_value_bounds(forecast: &Forecast) -> (f64, f64) {
    let (lo, hi) = forecast.value_bounds().unwrap_or((0.0, 100.0));
    let pad = ((hi - lo) * 0.05).max(1.0);
    (lo - pad, hi + pad)
}

/// Evenly spaced `day HH:MM` labels across the time range.
fn time_labels(x_min: f64, x_max: f64) -> Vec<String> {
    (0..X_LABELS)
        .map(|i| {
            let x = x_min + (x_max - x_min) * i as f64 / (X_LABELS - 1) as f64;
            Local
                .timestamp_opt(x.round() as i64, 0)
                .single()
                .map(|t| t.format("%d %H:%M").to_string())
                .unwrap_or_default()
        })
        .collect()
}

fn value_labels(y_min: f64, y_max: f64) -> Vec<String> {
    (0..Y_LABELS)
        .map(|i| {
            let y = y_min + (y_max - y_min) * i as f64 / (Y_LABELS - 1) as f64;
            format!("{:.0}", y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> PlotArea {
        PlotArea { left: 10, width: 11, x_min: 0.0, x_max: 100.0 }
    }

    #[test]
    fn test_x_at_maps_columns_linearly() {
        let plot = plot();
        assert_eq!(plot.x_at(10), Some(0.0));
        assert_eq!(plot.x_at(15), Some(50.0));
        assert_eq!(plot.x_at(20), Some(100.0));
    }

    #[test]
    fn test_x_at_outside_plot() {
        let plot = plot();
        assert_eq!(plot.x_at(9), None);
        assert_eq!(plot.x_at(21), None);

        let empty = PlotArea { width: 0, ..plot };
        assert_eq!(empty.x_at(10), None);
    }

    #[test]
    fn test_column_at_is_inverse_and_clamped() {
        let plot = plot();
        assert_eq!(plot.column_at(50.0), 15);
        assert_eq!(plot.column_at(-20.0), 10);
        assert_eq!(plot.column_at(500.0), 20);
    }

    #[test]
    fn test_plot_area_follows_axis_layout() {
        // "15 12:00" overhangs the axis by 7 columns, wider than the "100" y label.
        let plot = plot_area(Rect::new(1, 1, 98, 20), 3, 8, 0.0, 1.0);
        assert_eq!(plot.left, 1 + 7 + 1);
        assert_eq!(plot.width, 99 - plot.left);

        let wide_y = plot_area(Rect::new(0, 0, 60, 20), 9, 8, 0.0, 1.0);
        assert_eq!(wide_y.left, 10);
        assert_eq!(wide_y.width, 50);
    }

    #[test]
    fn test_plot_area_caps_labels_at_a_third() {
        let plot = plot_area(Rect::new(0, 0, 12, 10), 8, 8, 0.0, 1.0);
        assert_eq!(plot.left, 5);
        assert_eq!(plot.width, 7);
    }

    #[test]
    fn test_value_labels() {
        assert_eq!(value_labels(0.0, 100.0), vec!["0", "50", "100"]);
    }

    #[test]
    fn test_time_labels_count() {
        let labels = time_labels(1_705_320_000.0, 1_705_320_000.0 + 4.0 * 86_400.0);
        assert_eq!(labels.len(), X_LABELS);
        assert!(labels.iter().all(|l| l.len() == "15 12:00".len()));
    }
}
