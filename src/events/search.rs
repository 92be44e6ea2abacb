//! Key handling while the search input has focus.

use crossterm::event::KeyCode;

use crate::state::{AppState, Focus};

/// Handle one key press on the search input. Returns `true` to exit.
pub fn handle_key(code: KeyCode, app: &mut AppState) -> bool {
    match code {
        KeyCode::Enter | KeyCode::Esc => app.focus = Focus::Table,
        KeyCode::Backspace => {
            if app.filters.search.pop().is_some() {
                app.request_refresh();
            }
        }
        KeyCode::Char(c) => {
            app.filters.search.push(c);
            app.request_refresh();
        }
        _ => {}
    }
    false
}
