use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::data::SortKey;

/// Where `e` writes the standings.
pub const EXPORT_FILE: &str = "medal_standings.json";

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
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Direct column selection, in header order
        KeyCode::Char('1') => {
            app.set_sort(SortKey::Gold);
        }
        KeyCode::Char('2') => {
            app.set_sort(SortKey::Silver);
        }
        KeyCode::Char('3') => {
            app.set_sort(SortKey::Bronze);
        }
        KeyCode::Char('4') => {
            app.set_sort(SortKey::Total);
        }
        KeyCode::Char('s') | KeyCode::Tab => {
            app.cycle_sort();
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('r') => app.retry(),
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_FILE);
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        // Click on a column header to sort by it
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(key) = app.sort_key_at(mouse.column, mouse.row) {
                app.set_sort(key);
            }
        }

        _ => {}
    }
}
