//! Key handling for the confirmation dialogs.

use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use crate::api::Mutation;
use crate::state::{AppState, Modal};

/// Handle one key press while a confirmation dialog is open.
pub fn handle_key(code: KeyCode, app: &mut AppState, mutate_tx: &mpsc::UnboundedSender<Mutation>) {
    match code {
        KeyCode::Enter | KeyCode::Char('y') => {
            confirm(app, mutate_tx);
            app.modal = Modal::None;
        }
        KeyCode::Esc | KeyCode::Char('n') => app.modal = Modal::None,
        _ => {}
    }
}

fn confirm(app: &mut AppState, mutate_tx: &mpsc::UnboundedSender<Mutation>) {
    match &app.modal {
        Modal::ConfirmDelete { item } => {
            let _ = mutate_tx.send(Mutation::Delete(item.id));
        }
        Modal::ConfirmMarkPage { .. } => {
            // Mark every row on the page, skipping ones already out.
            for id in app.table.row_ids() {
                if !app.table.is_marked_out(id) {
                    app.table.set_mark(id, true);
                    let _ = mutate_tx.send(Mutation::MarkOutOfStock(id));
                }
            }
        }
        _ => {}
    }
}
