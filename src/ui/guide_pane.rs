use crate::ui::styles::{border_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const GUIDE: [(&str, &str); 7] = [
    ("Enter", "open the cell under the cursor"),
    ("Tab / Alt+1-3", "achieved, missed or pending"),
    ("WG / MG", "weekly and monthly goal rows"),
    ("·", "day that does not exist that month"),
    ("Future days", "can only be saved as pending"),
    ("e / i", "export or import a JSON backup"),
    ("?", "collapse this guide"),
];

/// Render the collapsible how-to guide
pub fn render_guide_pane(f: &mut Frame, area: Rect) {
    let mut lines = Vec::with_capacity(GUIDE.len() * 2);
    for (key, text) in GUIDE {
        lines.push(Line::from(Span::styled(key, title_style())));
        lines.push(Line::from(Span::styled(format!("  {}", text), hint_style())));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Guide ")
                .style(border_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
