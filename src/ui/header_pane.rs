use crate::app::AppState;
use crate::domain::{UiMode, TRACKED_YEAR};
use crate::ui::styles::{border_style, hint_style, modal_title_style, selected_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the year badge and the yearly goal
pub fn render_header_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let is_editing = app.ui_mode == UiMode::EditingGoal;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Your Yearly Goal ")
        .style(if is_editing { selected_style() } else { border_style() });

    let badge = Span::styled(format!(" {} ", TRACKED_YEAR), modal_title_style());
    let goal = if app.data.goal.is_empty() && !is_editing {
        Span::styled(
            format!("Enter your main goal for {}... (g to edit)", TRACKED_YEAR),
            hint_style(),
        )
    } else {
        Span::raw(app.data.goal.clone())
    };

    let paragraph = Paragraph::new(Line::from(vec![badge, Span::raw(" "), goal])).block(block);
    f.render_widget(paragraph, area);

    if is_editing {
        // Badge (6) + separator (1)
        let cursor_x = area.x + 1 + 7 + app.data.goal.chars().count() as u16;
        if cursor_x < area.x + area.width - 1 {
            f.set_cursor(cursor_x, area.y + 1);
        }
    }
}
