use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Focus};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ignore key releases reported by some terminals
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl-C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The dialog is modal: only dismissal keys do anything
    if app.dialog.is_some() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q')
        ) {
            app.close_dialog();
        }
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::Chart => handle_chart_key(app, key),
    }
}

/// Handle key input while the city text box has focus
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Fetch action
        KeyCode::Enter => {
            app.request_fetch();
        }

        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),

        // Clear the input
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_clear();
        }

        KeyCode::Backspace => app.input_pop(),

        // Esc leaves the text box
        KeyCode::Esc => app.focus = Focus::Chart,

        // Help on an empty box, otherwise it is a character like any other
        KeyCode::Char('?') if app.city_input.is_empty() => app.toggle_help(),

        // Type characters
        KeyCode::Char(c) => app.input_push(c),

        _ => {}
    }
}

/// Handle key input while the chart has focus
fn handle_chart_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Cursor
        KeyCode::Left | KeyCode::Char('h') => app.cursor_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.cursor_next(),
        KeyCode::Home => app.cursor_first(),
        KeyCode::End => app.cursor_last(),
        KeyCode::Char('c') | KeyCode::Esc => app.clear_cursor(),

        // Fetch action (re-fetch the city in the box)
        KeyCode::Enter | KeyCode::Char('r') => {
            app.request_fetch();
        }

        // Back to the text box
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') | KeyCode::Char('i') => {
            app.focus = Focus::Input;
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

fn contains(rect: Option<Rect>, column: u16, row: u16) -> bool {
    rect.is_some_and(|r| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    })
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.dialog.is_some() {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            app.close_dialog();
        }
        return;
    }

    match mouse.kind {
        // Hover over the chart moves the cursor to the nearest sample
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            if app.forecast.is_some() {
                app.hover_column(mouse.column);
            }
        }

        MouseEventKind::Down(MouseButton::Left) => {
            let (column, row) = (mouse.column, mouse.row);

            if contains(app.hit_areas.button, column, row) {
                app.request_fetch();
            } else if contains(app.hit_areas.input, column, row) {
                app.focus = Focus::Input;
            } else if app.hit_areas.plot.is_some() {
                app.focus = Focus::Chart;
                app.hover_column(column);
            }
        }

        // Scroll wheel steps through samples
        MouseEventKind::ScrollUp => app.cursor_prev(),
        MouseEventKind::ScrollDown => app.cursor_next(),

        // Right-click hides the tooltip
        MouseEventKind::Down(MouseButton::Right) => app.clear_cursor(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app_with, sample_response};
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key_event(app, key(KeyCode::Char(c)));
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_typing_and_enter_queues_fetch() {
        let (mut app, calls) = app_with(sample_response);
        type_text(&mut app, "Oslo");
        assert_eq!(app.city_input, "Oslo");

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.fetch_pending());
        assert!(calls.borrow().is_empty());

        app.run_pending_fetch();
        assert_eq!(calls.borrow().as_slice(), ["Oslo"]);
    }

    #[test]
    fn test_enter_on_empty_input_opens_dialog() {
        let (mut app, _) = app_with(sample_response);
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.dialog.is_some());
        assert!(!app.fetch_pending());

        // Typing is swallowed while the dialog is open
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert!(app.city_input.is_empty());

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.dialog.is_none());
        assert!(app.running);
    }

    #[test]
    fn test_q_types_in_input_but_quits_from_chart() {
        let (mut app, _) = app_with(sample_response);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.city_input, "q");
        assert!(app.running);

        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Chart);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits_and_ctrl_u_clears() {
        let (mut app, _) = app_with(sample_response);
        type_text(&mut app, "Paris");
        handle_key_event(&mut app, ctrl('u'));
        assert!(app.city_input.is_empty());

        handle_key_event(&mut app, ctrl('c'));
        assert!(!app.running);
    }

    #[test]
    fn test_release_events_ignored() {
        let (mut app, _) = app_with(sample_response);
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert!(app.city_input.is_empty());
    }

    #[test]
    fn test_chart_keys_move_cursor() {
        let (mut app, _) = app_with(sample_response);
        type_text(&mut app, "Berlin");
        handle_key_event(&mut app, key(KeyCode::Enter));
        app.run_pending_fetch();

        handle_key_event(&mut app, key(KeyCode::Tab));
        handle_key_event(&mut app, key(KeyCode::End));
        assert_eq!(app.cursor, Some(3));
        handle_key_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.cursor, Some(2));
        handle_key_event(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.cursor, None);
    }

    #[test]
    fn test_help_toggle_and_close() {
        let (mut app, _) = app_with(sample_response);
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('z')));
        assert!(!app.show_help);
        assert!(app.city_input.is_empty());
    }

    #[test]
    fn test_click_button_triggers_fetch() {
        let (mut app, _) = app_with(sample_response);
        app.city_input = "Rome".into();
        app.hit_areas.button = Some(Rect::new(80, 1, 15, 3));
        app.hit_areas.input = Some(Rect::new(7, 1, 73, 3));
        app.focus = Focus::Chart;

        handle_mouse_event(&mut app, click(10, 2));
        assert_eq!(app.focus, Focus::Input);
        assert!(!app.fetch_pending());

        handle_mouse_event(&mut app, click(85, 2));
        assert!(app.fetch_pending());
    }

    #[test]
    fn test_click_closes_dialog() {
        let (mut app, _) = app_with(sample_response);
        app.request_fetch();
        assert!(app.dialog.is_some());

        handle_mouse_event(&mut app, click(0, 0));
        assert!(app.dialog.is_none());
    }
}
