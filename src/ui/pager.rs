//! One-line pager status under the table.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::theme;

/// Render "page X of Y" along with the total count and page size.
pub fn render_pager(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let pages = app.pages;
    let page_count = pages.page_count().max(1);
    let line = Line::from(vec![
        Span::styled(" Page ", Style::default().fg(th.subtext0)),
        Span::styled(
            format!("{}/{page_count}", pages.current_page()),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} items", pages.total_items()),
            Style::default().fg(th.subtext0),
        ),
        Span::styled(
            format!("  {} per page", pages.page_size()),
            Style::default().fg(th.subtext0),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
