//! Metrics pane: totals plus a per-category breakdown.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::util::fmt_money;

/// Render the aggregate metrics pane.
pub fn render_metrics(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            " Metrics ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1));

    let Some(metrics) = &app.metrics else {
        f.render_widget(
            Paragraph::new(Span::styled(
                "Loading metrics...",
                Style::default().fg(th.subtext0),
            ))
            .block(block),
            area,
        );
        return;
    };

    let header = Row::new(
        ["Category", "In stock", "Total value", "Avg price"].map(|h| {
            Cell::from(Span::styled(
                h,
                Style::default().fg(th.subtext1).add_modifier(Modifier::BOLD),
            ))
        }),
    );
    let mut rows: Vec<Row> = metrics
        .category_metrics
        .iter()
        .map(|m| {
            Row::new(vec![
                Cell::from(Span::styled(m.category.clone(), Style::default().fg(th.text))),
                Cell::from(Span::styled(
                    m.total_products_in_stock.to_string(),
                    Style::default().fg(th.text),
                )),
                Cell::from(Span::styled(
                    fmt_money(m.total_value_in_stock),
                    Style::default().fg(th.green),
                )),
                Cell::from(Span::styled(
                    fmt_money(m.average_price_in_stock),
                    Style::default().fg(th.text),
                )),
            ])
        })
        .collect();
    rows.push(Row::new(vec![
        Cell::from(Span::styled(
            "Overall",
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
        )),
        Cell::from(""),
        Cell::from(Span::styled(
            fmt_money(metrics.total_value_in_stock),
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        )),
        Cell::from(Span::styled(
            fmt_money(metrics.average_price_in_stock),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
    ]));

    let widths = [
        Constraint::Percentage(40),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(12),
    ];
    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}
