//! Common UI components.
//!
//! This module contains the header bar, city input row, conditions label,
//! status bar, and help overlay.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

/// Label shown on the fetch button.
pub const BUTTON_LABEL: &str = "Get Weather";

/// Render the header bar with the loaded city and sample count.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " WEATHERWATCH ",
        Style::default().add_modifier(Modifier::BOLD),
    )];

    match app.forecast {
        Some(ref forecast) => {
            spans.push(Span::raw("│ "));
            spans.push(Span::styled(forecast.city.clone(), app.theme.header));
            spans.push(Span::raw(format!(" │ {} samples │ ", forecast.len())));
        }
        None => spans.push(Span::raw("│ No forecast loaded │ ")),
    }
    spans.push(Span::styled(
        app.source_description().to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the city label, text box and fetch button.
///
/// Records the text box and button positions for mouse hit-testing.
pub fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Length(7),                             // Label
        Constraint::Min(20),                               // Text box
        Constraint::Length(BUTTON_LABEL.len() as u16 + 4), // Button
    ])
    .split(area);

    let label = Paragraph::new(Line::from(Span::styled("City:", app.theme.header)))
        .alignment(Alignment::Right);
    // Align the label with the text inside the bordered box.
    let label_area = Rect::new(chunks[0].x, chunks[0].y + 1, chunks[0].width.saturating_sub(1), 1);
    frame.render_widget(label, label_area);

    let focused = app.focus == Focus::Input;
    let input = Paragraph::new(app.city_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(app.theme.focus_style(focused)),
    );
    frame.render_widget(input, chunks[1]);

    if focused && app.dialog.is_none() && !app.show_help {
        let max_x = chunks[1].x + chunks[1].width.saturating_sub(2);
        let x = (chunks[1].x + 1 + app.city_input.chars().count() as u16).min(max_x);
        frame.set_cursor_position((x, chunks[1].y + 1));
    }

    let button_style = if app.fetch_pending() {
        app.theme.button.add_modifier(Modifier::DIM)
    } else {
        app.theme.button
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", BUTTON_LABEL),
        button_style,
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );
    frame.render_widget(button, chunks[2]);

    app.hit_areas.input = Some(chunks[1]);
    app.hit_areas.button = Some(chunks[2]);
}

/// Render the current-conditions label for the first forecast entry.
pub fn render_conditions(frame: &mut Frame, app: &App, area: Rect) {
    let text: Vec<Line> = match app.forecast {
        Some(ref forecast) => forecast
            .current
            .display(app.units)
            .lines()
            .map(|l| Line::from(format!(" {}", l)))
            .collect(),
        None => vec![Line::from(Span::styled(
            " No data yet",
            Style::default().add_modifier(Modifier::DIM),
        ))],
    };

    frame.render_widget(Paragraph::new(text), area);
}

/// Render the status bar at the bottom.
///
/// Shows temporary status messages first, then focus-dependent controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.focus {
        Focus::Input => "Type a city | Enter:fetch Tab:chart ?:help Ctrl-C:quit",
        Focus::Chart => "←→:cursor Home/End c:hide Enter:fetch Tab:input ?:help q:quit",
    };

    let status = match app.forecast {
        Some(ref forecast) => format!(
            " Updated {:.0}s ago | {}",
            forecast.fetched_at.elapsed().as_secs_f64(),
            controls
        ),
        None => format!(" {}", controls),
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " City input",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Enter       Fetch forecast"),
        Line::from("  Ctrl-U      Clear input"),
        Line::from("  Tab         Focus chart"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Chart",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Move cursor"),
        Line::from("  Home/End    First/last sample"),
        Line::from("  c           Hide cursor"),
        Line::from("  Mouse       Hover for details"),
        Line::from("  Tab or /    Focus input"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  q           Quit (chart focus)"),
        Line::from("  Ctrl-C      Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 23u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
