use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints = match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ←↑↓→ move   "),
            Span::raw("Enter edit   "),
            Span::raw("t today   "),
            Span::raw("g goal   "),
            Span::raw("n notes   "),
            Span::raw("c calendars   "),
            Span::raw("? guide   "),
            Span::raw("e export   "),
            Span::raw("i import   "),
            Span::raw("q quit"),
        ]),
        UiMode::EditingEntry => Line::from(vec![
            Span::raw(" type text   "),
            Span::raw("Tab status   "),
            Span::raw("Alt+1 achieved  Alt+2 missed  Alt+3 pending   "),
            Span::raw("Enter save   "),
            Span::raw("Esc cancel"),
        ]),
        UiMode::EditingGoal => Line::raw(" type your goal   Enter/Esc done"),
        UiMode::EditingNotes => Line::raw(" type notes   Enter newline   Esc done"),
        UiMode::ImportPrompt => Line::raw(" backup file path   Enter import   Esc cancel"),
        UiMode::Notice => Line::raw(" any key to dismiss"),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
