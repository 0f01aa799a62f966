//! Error dialog rendering.
//!
//! Displays a modal overlay with a message the user must dismiss.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Preferred dialog width; shrinks on narrow terminals.
const DIALOG_WIDTH: u16 = 56;
/// Minimum height required for the dialog to render properly.
const MIN_DIALOG_HEIGHT: u16 = 7;

/// Render the open dialog, if any, centered on `area`.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref dialog) = app.dialog else {
        return;
    };

    let width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
    if width < 20 || area.height < MIN_DIALOG_HEIGHT {
        return;
    }

    // Grow with the wrapped message, leaving room for borders, spacing and footer.
    let text_width = width.saturating_sub(4).max(1) as usize;
    let message_lines = dialog
        .message
        .lines()
        .map(|l| l.chars().count().div_ceil(text_width).max(1))
        .sum::<usize>() as u16;
    let height = (message_lines + 5).clamp(MIN_DIALOG_HEIGHT, area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let dialog_area = Rect::new(x, y, width, height);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.error));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Spacing
        Constraint::Min(1),    // Message
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let message = Paragraph::new(dialog.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press Enter or Esc to close",
        Style::default().add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}
