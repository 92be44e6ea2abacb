//! Key handling while the product table has focus.

use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use crate::api::Mutation;
use crate::state::{AppState, Focus, Modal, ProductForm, SortColumn};

/// Handle one key press on the table pane. Returns `true` to exit.
pub fn handle_key(
    code: KeyCode,
    app: &mut AppState,
    mutate_tx: &mpsc::UnboundedSender<Mutation>,
) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('j') | KeyCode::Down => app.table.move_selection(1),
        KeyCode::Char('k') | KeyCode::Up => app.table.move_selection(-1),
        KeyCode::Char('h') | KeyCode::Left => {
            if app.pages.prev_page() {
                app.request_refresh();
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.pages.next_page() {
                app.request_refresh();
            }
        }
        KeyCode::Char('z') => {
            app.pages.cycle_page_size();
            app.request_refresh();
        }
        KeyCode::Char('n') => toggle_sort(app, SortColumn::Name),
        KeyCode::Char('c') => toggle_sort(app, SortColumn::Category),
        KeyCode::Char('p') => toggle_sort(app, SortColumn::Price),
        KeyCode::Char('x') => toggle_sort(app, SortColumn::ExpiryDate),
        KeyCode::Char('s') => toggle_sort(app, SortColumn::Stock),
        KeyCode::Char('f') => {
            app.filters.cycle_stock_status();
            app.request_refresh();
        }
        KeyCode::Char('m') => app.metrics_visible = !app.metrics_visible,
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char(' ') => toggle_badge(app, mutate_tx),
        KeyCode::Char('a') => {
            if !app.table.is_empty() {
                app.modal = Modal::ConfirmMarkPage {
                    count: app.table.len(),
                };
            }
        }
        KeyCode::Char('d') => {
            if let Some(item) = app.table.selected_row() {
                app.modal = Modal::ConfirmDelete { item: item.clone() };
            }
        }
        KeyCode::Char('N') => app.modal = Modal::Form(ProductForm::new()),
        KeyCode::Enter => {
            if let Some(item) = app.table.selected_row() {
                app.modal = Modal::Form(ProductForm::edit(item));
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(name) = app.categories.get(idx).cloned() {
                app.filters.toggle_category(&name);
                app.request_refresh();
            }
        }
        _ => {}
    }
    false
}

fn toggle_sort(app: &mut AppState, column: SortColumn) {
    app.sort.toggle(column);
    app.request_refresh();
}

/// Flip the selected row's stock badge immediately and tell the backend;
/// a failed call is rolled back when its outcome arrives.
fn toggle_badge(app: &mut AppState, mutate_tx: &mpsc::UnboundedSender<Mutation>) {
    let Some(id) = app.table.selected_row().map(|it| it.id) else {
        return;
    };
    let now_out = app.table.toggle_mark(id);
    let mutation = if now_out {
        Mutation::MarkOutOfStock(id)
    } else {
        Mutation::MarkInStock(id)
    };
    let _ = mutate_tx.send(mutation);
}
