//! The create/edit product form modal.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::{FormField, ProductForm};
use crate::theme::theme;
use crate::ui::modals::{centered_rect, render_box};

/// Render the product form with one line per field.
pub fn render_form(f: &mut Frame, area: Rect, form: &ProductForm) {
    let th = theme();
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];
    for field in FormField::ALL {
        let focused = field == form.field;
        let marker = if focused { "> " } else { "  " };
        let value = match field {
            FormField::Name => form.name.clone(),
            FormField::Category => form.category.clone(),
            FormField::Stock => form.stock.clone(),
            FormField::Price => form.price.clone(),
            FormField::Expiry => form.expiry.clone(),
        };
        let label_style = if focused {
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext1)
        };
        let cursor = if focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<16}", field.label()), label_style),
            Span::styled(format!("{value}{cursor}"), Style::default().fg(th.text)),
        ]));
    }
    lines.push(Line::from(""));
    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(th.red),
        )));
    } else if form.submitting {
        lines.push(Line::from(Span::styled(
            "Saving...",
            Style::default().fg(th.subtext0),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab next field   Enter save   Esc cancel",
            Style::default().fg(th.subtext0),
        )));
    }

    let title = if form.editing.is_some() {
        "Edit product"
    } else {
        "New product"
    };
    render_box(f, centered_rect(area, 64, 12), title, lines);
}
