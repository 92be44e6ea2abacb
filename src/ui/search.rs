//! Search bar, filter line, and the bottom help line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus, StockStatus};
use crate::theme::theme;

/// Render the free-text search input.
pub fn render_search(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let border = if focused { th.sapphire } else { th.overlay1 };
    let content = if app.filters.search.is_empty() && !focused {
        Span::styled("Search products...", Style::default().fg(th.subtext0))
    } else {
        Span::styled(app.filters.search.clone(), Style::default().fg(th.text))
    };
    let boxw = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(Span::styled(
                " Search ",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(boxw, area);
    if focused {
        let x = area.x + 1 + u16::try_from(app.filters.search.chars().count()).unwrap_or(0);
        f.set_cursor_position((x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

/// Render the category and availability filter line.
pub fn render_filters(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let mut segs: Vec<Span> = Vec::new();
    for (i, name) in app.categories.iter().enumerate().take(9) {
        let active = app.filters.categories.iter().any(|c| c == name);
        let style = if active {
            Style::default().fg(th.base).bg(th.lavender)
        } else {
            Style::default().fg(th.subtext1)
        };
        segs.push(Span::styled(format!(" {}:{name} ", i + 1), style));
    }
    let avail = app
        .filters
        .stock_status
        .map_or("Availability", StockStatus::label);
    let avail_style = if app.filters.stock_status.is_some() {
        Style::default().fg(th.base).bg(th.sapphire)
    } else {
        Style::default().fg(th.subtext1)
    };
    segs.push(Span::raw("  "));
    segs.push(Span::styled(format!(" f:{avail} "), avail_style));
    f.render_widget(Paragraph::new(Line::from(segs)), area);
}

/// Render the single-line key hint footer.
pub fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let hint = match app.focus {
        Focus::Search => "Enter/Esc back to table",
        Focus::Table => {
            "/ search  1-9 category  f availability  n/c/p/x/s sort  h/l page  z size  \
             Space stock  Enter edit  N new  d delete  a mark page  m metrics  q quit"
        }
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(th.subtext0))),
        area,
    );
}
