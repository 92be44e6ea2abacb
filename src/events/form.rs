//! Key handling for the create/edit product form.

use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use crate::api::Mutation;
use crate::state::{AppState, Modal};
use crate::util::today;

/// Handle one key press while the form modal is open.
///
/// Enter submits but leaves the form on screen; the runtime closes it when
/// the backend confirms, or reports the failure inline so the buffered
/// input survives.
pub fn handle_key(code: KeyCode, app: &mut AppState, mutate_tx: &mpsc::UnboundedSender<Mutation>) {
    let Modal::Form(form) = &mut app.modal else {
        return;
    };
    match code {
        KeyCode::Esc => app.modal = Modal::None,
        KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
        KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.input_char(c),
        KeyCode::Enter => {
            if form.submitting {
                return;
            }
            match form.validate(today()) {
                Ok(item) => {
                    let mutation = form.editing.map_or_else(
                        || Mutation::Create(item.clone()),
                        |id| Mutation::Update(id, item.clone()),
                    );
                    form.submitting = true;
                    form.error = None;
                    let _ = mutate_tx.send(mutation);
                }
                Err(msg) => form.error = Some(msg),
            }
        }
        _ => {}
    }
}
