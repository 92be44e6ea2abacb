//! Event handling layer for Ventry's TUI.
//!
//! This module exposes `handle_event` and delegates modal and pane-specific
//! logic to submodules to keep files small and maintainable. Key presses
//! are routed to an open modal first; otherwise to the focused pane.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::api::Mutation;
use crate::state::{AppState, Focus, Modal};

mod form;
mod modals;
mod search;
mod table;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    mutate_tx: &mpsc::UnboundedSender<Mutation>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Modal handling takes priority over pane focus.
    match &app.modal {
        Modal::Alert { .. } => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::Form(_) => {
            form::handle_key(ke.code, app, mutate_tx);
            return false;
        }
        Modal::ConfirmDelete { .. } | Modal::ConfirmMarkPage { .. } => {
            modals::handle_key(ke.code, app, mutate_tx);
            return false;
        }
        Modal::None => {}
    }

    match app.focus {
        Focus::Search => search::handle_key(ke.code, app),
        Focus::Table => table::handle_key(ke.code, app, mutate_tx),
    }
}
