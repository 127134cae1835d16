use crate::app::AppState;
use crate::domain::MONTH_NAMES;
use crate::ui::styles::{band_style, border_style, default_style, gauge_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the Progress box: counts, rates, streak and consistency
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.stats();
    let month_name = MONTH_NAMES[stats.current_month as usize];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Progress ", title_style()))
        .style(border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:>4}", stats.daily.tracked), default_style()),
            Span::raw(" tracked      "),
            Span::styled(format!("{}", stats.daily.success), band_style(stats.bands.outcome)),
            Span::raw(" / "),
            Span::styled(format!("{}", stats.daily.failure), band_style(stats.bands.outcome)),
            Span::raw(" achieved / missed"),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{:>3}%", stats.monthly_rate),
                band_style(stats.bands.monthly_rate),
            ),
            Span::raw(format!(" {} rate", month_name)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:>3}%", stats.yearly_rate), default_style()),
            Span::raw(" yearly rate"),
        ]),
        Line::from(vec![
            Span::styled(format!("{:>4}", stats.streak), band_style(stats.bands.streak)),
            Span::raw(" day streak   "),
            Span::styled(
                format!("{}/{}", stats.this_month.achieved, stats.this_month.elapsed),
                band_style(stats.bands.this_month),
            ),
            Span::raw(" this month"),
        ]),
        Line::from(vec![
            Span::styled(format!("{:>3}%", stats.consistency), band_style(stats.bands.consistency)),
            Span::raw(" consistency"),
        ]),
        Line::from(vec![Span::raw(format!(
            "     WG {}/{}  MG {}/{} achieved",
            stats.weekly.success, stats.weekly.tracked, stats.monthly.success, stats.monthly.tracked
        ))]),
    ];

    f.render_widget(Paragraph::new(lines), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(stats.monthly_rate.min(100) as u16)
        .label("");
    f.render_widget(gauge, chunks[1]);
}
