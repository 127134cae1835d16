use crate::app::AppState;
use crate::domain::{calendar_weeks, month_short, Scope};
use crate::ui::layout::calendar_cells;
use crate::ui::styles::{border_style, hint_style, status_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const WEEKDAYS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Render the Year Overview mini calendars: January to June, plus July to
/// December when expanded
pub fn render_calendar_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let toggle = if app.calendar_expanded {
        "Show Less ▲ (c)"
    } else {
        "Show All ▼ (c)"
    };
    let block = Block::default()
        .borders(Borders::TOP)
        .title(Line::from(vec![
            Span::styled(" Year Overview ", title_style()),
            Span::styled(toggle, hint_style()),
        ]))
        .style(border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (month, cell) in calendar_cells(inner, app.calendar_expanded).into_iter().enumerate() {
        render_mini_calendar(f, app, month as u32, cell);
    }
}

fn render_mini_calendar(f: &mut Frame, app: &AppState, month: u32, area: Rect) {
    let mut lines = Vec::with_capacity(7);

    let weekday_spans: Vec<Span> = WEEKDAYS
        .iter()
        .map(|d| Span::styled(format!("{:>2} ", d), hint_style()))
        .collect();
    lines.push(Line::from(weekday_spans));

    for week in calendar_weeks(month) {
        let mut spans = Vec::with_capacity(14);
        for day in week {
            match day {
                None => spans.push(Span::raw("   ")),
                Some(day) => {
                    let style = app
                        .data
                        .store
                        .get(&Scope::Daily { month, day })
                        .map(|entry| status_style(entry.status))
                        .unwrap_or_default();
                    spans.push(Span::styled(format!("{:>2}", day), style));
                    spans.push(Span::raw(" "));
                }
            }
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::NONE)
        .title(Span::styled(month_short(month), title_style()));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
