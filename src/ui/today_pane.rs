use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, hint_style, selected_style};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render today's free-text notes
pub fn render_today_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let is_editing = app.ui_mode == UiMode::EditingNotes;

    let date = app.today.format("%b %-d");
    let title = if is_editing {
        format!(" Today ({}) - [Editing] ", date)
    } else {
        format!(" Today ({}) ", date)
    };

    let style = if is_editing {
        selected_style()
    } else {
        border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(style);

    let lines: Vec<Line> = if app.data.today_notes.is_empty() && !is_editing {
        vec![Line::styled("Your goals for today... (n to edit)", hint_style())]
    } else {
        app.data
            .today_notes
            .split('\n')
            .map(|line| Line::raw(line.to_string()))
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);

    // Cursor sits at the end of the text
    if is_editing {
        let last_line = app.data.today_notes.split('\n').last().unwrap_or("");
        let line_number = app.data.today_notes.matches('\n').count();
        let cursor_x = area.x + 1 + last_line.chars().count() as u16;
        let cursor_y = area.y + 1 + line_number as u16;

        if cursor_x < area.x + area.width - 1 && cursor_y < area.y + area.height - 1 {
            f.set_cursor(cursor_x, cursor_y);
        }
    }
}
