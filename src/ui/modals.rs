//! Centered overlay modals: alerts and confirmation dialogs.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::InventoryItem;
use crate::theme::theme;

/// Centered rectangle for a modal of at most `max_w` by `max_h`.
pub fn centered_rect(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(8).min(max_w);
    let h = area.height.saturating_sub(8).min(max_h);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Render a double-bordered modal box with a styled title.
pub fn render_box(f: &mut Frame, rect: Rect, title: &str, lines: Vec<Line<'static>>) {
    let th = theme();
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}

/// Informational alert dismissed with Enter or Esc.
pub fn render_alert(f: &mut Frame, area: Rect, message: &str) {
    let th = theme();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(th.red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            Style::default().fg(th.subtext0),
        )),
    ];
    render_box(f, centered_rect(area, 60, 8), "Notice", lines);
}

/// Confirmation before deleting one inventory record.
pub fn render_confirm_delete(f: &mut Frame, area: Rect, item: &InventoryItem) {
    let th = theme();
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(
                item.product.name.clone(),
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("?"),
        ]),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(th.subtext1),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/y confirm   Esc/n cancel",
            Style::default().fg(th.subtext0),
        )),
    ];
    render_box(f, centered_rect(area, 60, 8), "Delete product", lines);
}

/// Confirmation before marking every row on the page out of stock.
pub fn render_confirm_mark_page(f: &mut Frame, area: Rect, count: usize) {
    let th = theme();
    let lines = vec![
        Line::from(""),
        Line::from(format!(
            "Mark all {count} products on this page as out of stock?"
        )),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(th.subtext1),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/y confirm   Esc/n cancel",
            Style::default().fg(th.subtext0),
        )),
    ];
    render_box(f, centered_rect(area, 64, 8), "Mark page", lines);
}
