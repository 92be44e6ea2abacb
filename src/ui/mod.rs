//! Rendering layer for Ventry's TUI.
//!
//! `ui` draws the whole frame each tick: search bar, filter line, product
//! table, pager, the optional metrics pane, and a help line, with any open
//! modal drawn last on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, Modal};
use crate::theme::theme;

mod form;
mod metrics;
mod modals;
mod pager;
mod search;
mod table;

/// Render one frame of the interface.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let metrics_h: u16 = if app.metrics_visible { 9 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search
            Constraint::Length(1), // filter line
            Constraint::Min(4),    // table
            Constraint::Length(1), // pager
            Constraint::Length(metrics_h),
            Constraint::Length(1), // help
        ])
        .split(area);

    search::render_search(f, chunks[0], app);
    search::render_filters(f, chunks[1], app);
    table::render_table(f, chunks[2], app);
    pager::render_pager(f, chunks[3], app);
    if app.metrics_visible {
        metrics::render_metrics(f, chunks[4], app);
    }
    search::render_help(f, chunks[5], app);

    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => modals::render_alert(f, area, message),
        Modal::Form(form) => form::render_form(f, area, form),
        Modal::ConfirmDelete { item } => modals::render_confirm_delete(f, area, item),
        Modal::ConfirmMarkPage { count } => modals::render_confirm_mark_page(f, area, *count),
    }
}
