//! Event handling and key bindings

use super::app::{App, View};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handle one terminal event, returning whether it changed anything
pub fn handle_events(event: &Event, app: &mut App) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(*key, app),
        _ => false,
    }
}

fn handle_key(key: KeyEvent, app: &mut App) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return true;
    }

    // An error message swallows Esc so it can be dismissed without quitting
    if app.error_message.is_some() && key.code == KeyCode::Esc {
        app.error_message = None;
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            true
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_view();
            true
        }
        KeyCode::Char('1') => {
            app.view = View::Dashboard;
            true
        }
        KeyCode::Char('2') => {
            app.view = View::Board;
            true
        }
        KeyCode::Char('r') => {
            app.reload();
            true
        }
        _ => false,
    }
}
