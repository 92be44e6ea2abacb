//! The product table: sortable header, severity-colored cells, and the
//! per-row stock badge.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

use crate::state::{AppState, Focus, InventoryItem, SortColumn, SortDirection};
use crate::theme::{Theme, theme};
use crate::util::{ExpiryBand, StockBand, expiry_band, fmt_money, stock_band, today};

/// Render the inventory table with its sortable header.
pub fn render_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let th = theme();
    let today = today();

    let mut header_cells: Vec<Cell> = SortColumn::ALL
        .iter()
        .map(|&col| header_cell(&th, app, col))
        .collect();
    header_cells.push(Cell::from(Span::styled(
        "Status",
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .table
        .rows()
        .iter()
        .map(|item| product_row(&th, app, item, today))
        .collect();

    let focused = app.focus == Focus::Table;
    let border = if focused { th.sapphire } else { th.overlay1 };
    let widths = [
        Constraint::Percentage(28),
        Constraint::Percentage(16),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Length(8),
        Constraint::Length(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(Span::styled(
                    " Inventory ",
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        )
        .row_highlight_style(
            Style::default()
                .bg(th.surface1)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(table, area, &mut app.table.view);
}

/// Header cell for one column: label, direction arrow, and a superscript
/// precedence marker when two sorts are active.
fn header_cell<'a>(th: &Theme, app: &AppState, col: SortColumn) -> Cell<'a> {
    let mut text = col.label().to_string();
    let style = app.sort.status_of(col).map_or_else(
        || Style::default().fg(th.subtext1),
        |(precedence, dir)| {
            text.push(' ');
            text.push(dir.arrow());
            if app.sort.entries().len() > 1 {
                text.push(if precedence == 0 { '¹' } else { '²' });
            }
            let color = match dir {
                SortDirection::Descending => th.sapphire,
                SortDirection::Ascending => th.lavender,
            };
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        },
    );
    Cell::from(Span::styled(text, style))
}

/// One data row. Cell colors follow the expiry and stock severity bands and
/// depleted rows are crossed out.
fn product_row<'a>(
    th: &Theme,
    app: &AppState,
    item: &InventoryItem,
    today: chrono::NaiveDate,
) -> Row<'a> {
    let depleted = item.quantity <= 0;
    let base = if depleted {
        Style::default()
            .fg(th.overlay1)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(th.text)
    };

    let expiry_color = match expiry_band(item.product.expiry_date, today) {
        ExpiryBand::Imminent => th.red,
        ExpiryBand::Near => th.yellow,
        ExpiryBand::Far => th.green,
        ExpiryBand::None => th.subtext0,
    };
    let expiry_text = item
        .product
        .expiry_date
        .map_or_else(|| "-".to_string(), |d| d.to_string());

    let stock_color = match stock_band(item.quantity) {
        StockBand::Critical => th.red,
        StockBand::Low => th.peach,
        StockBand::Normal => th.text,
    };

    let (badge, badge_color) = if app.table.is_marked_out(item.id) {
        ("Out of Stock", th.red)
    } else {
        ("In Stock", th.green)
    };

    Row::new(vec![
        Cell::from(Span::styled(item.product.name.clone(), base)),
        Cell::from(Span::styled(
            item.product.category.clone(),
            base.patch(Style::default().fg(th.subtext1)),
        )),
        Cell::from(Span::styled(fmt_money(item.product.price), base)),
        Cell::from(Span::styled(
            expiry_text,
            base.patch(Style::default().fg(expiry_color)),
        )),
        Cell::from(Span::styled(
            item.quantity.to_string(),
            base.patch(Style::default().fg(stock_color)),
        )),
        Cell::from(Line::from(Span::styled(
            badge,
            Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
        ))),
    ])
}
