use crate::app::AppState;
use crate::domain::{month_short, GridRow, Scope, TRACKED_YEAR};
use crate::ui::styles::{
    border_style, invalid_cell_style, monthly_label_style, selected_style, status_style,
    title_style, today_style, weekly_label_style,
};
use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the row-label column ("WG4 ")
const LABEL_WIDTH: usize = 4;

/// Cut `text` to `width` characters, padding with spaces
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.push_str(&" ".repeat(width.saturating_sub(len)));
    out
}

/// First visible row so the cursor stays on screen
fn scroll_offset(current: usize, cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    if cursor < current {
        cursor
    } else if cursor >= current + visible {
        cursor + 1 - visible
    } else {
        current
    }
}

/// Render the year grid: one column per month, day rows with weekly rows
/// interleaved, and a monthly row at the bottom
pub fn render_grid_pane(f: &mut Frame, app: &mut AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Daily Progress Tracker ", title_style()))
        .style(border_style());

    let inner_width = area.width.saturating_sub(2) as usize;
    // One separator space per month column
    let cell_width = (inner_width.saturating_sub(LABEL_WIDTH) / 12).saturating_sub(1).max(1);
    let visible_rows = area.height.saturating_sub(3) as usize;

    app.grid_scroll = scroll_offset(app.grid_scroll, app.cursor_row, visible_rows);

    let mut lines = Vec::with_capacity(visible_rows + 1);

    // Header row
    let mut header = vec![Span::styled(fit("Day", LABEL_WIDTH), title_style())];
    for month in 0..12 {
        header.push(Span::styled(fit(month_short(month), cell_width), title_style()));
        header.push(Span::raw(" "));
    }
    lines.push(Line::from(header));

    let today_scope = (app.today.year() == TRACKED_YEAR).then(|| Scope::for_date(app.today));

    for (row_idx, row) in app
        .rows
        .iter()
        .enumerate()
        .skip(app.grid_scroll)
        .take(visible_rows)
    {
        let label_style = match row {
            GridRow::Day(_) => Style::default(),
            GridRow::Week(_) => weekly_label_style(),
            GridRow::Month => monthly_label_style(),
        };
        let mut spans = vec![Span::styled(fit(&row.label(), LABEL_WIDTH), label_style)];

        for month in 0..12 {
            let is_cursor = row_idx == app.cursor_row && month == app.cursor_month;

            let (text, mut style) = match row.scope(month) {
                None => (fit("·", cell_width), invalid_cell_style()),
                Some(scope) => match app.data.store.get(&scope) {
                    Some(entry) => (fit(&entry.text, cell_width), status_style(entry.status)),
                    None if today_scope == Some(scope) => (fit("•", cell_width), today_style()),
                    None => (fit("", cell_width), Style::default()),
                },
            };
            if is_cursor {
                style = selected_style();
            }

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
