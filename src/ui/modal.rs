use crate::app::AppState;
use crate::domain::{Scope, Status};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style, status_style},
};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the entry editor
pub fn render_entry_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(editor) = &app.editor {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let placeholder = match editor.scope {
            Scope::Daily { .. } => "What did you work on?",
            _ => "What's your goal?",
        };

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw(placeholder));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(&editor.text, modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ]));
        lines.push(Line::raw(""));

        // Status buttons; unavailable ones are dimmed
        let allowed = editor.scope.allowed_statuses(app.today);
        let mut buttons = Vec::new();
        for (idx, status) in Status::all().iter().enumerate() {
            let label = format!(" Alt+{} {} ", idx + 1, status.label());
            let style = if *status == editor.status {
                status_style(*status).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if allowed.contains(status) {
                status_style(*status)
            } else {
                status_style(*status).add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
            };
            buttons.push(Span::styled(label, style));
            buttons.push(Span::raw("  "));
        }
        lines.push(Line::from(buttons));

        if allowed.len() == 1 {
            lines.push(Line::raw(""));
            lines.push(Line::raw("Future day: only pending can be saved."));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter]", modal_title_style()),
            Span::raw(" Save Entry  "),
            Span::styled("[Esc]", modal_title_style()),
            Span::raw(" Cancel"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        format!(" {} ", editor.scope.title()),
                        modal_title_style(),
                    ))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the import path prompt
pub fn render_import_prompt(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw("Path to a goal-planner backup (.json):"),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(&app.import_path, modal_title_style()),
            Span::styled("█", modal_title_style()),
        ]),
        Line::raw(""),
        Line::raw("Fields present in the backup replace current data."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter]", modal_title_style()),
            Span::raw(" Import  "),
            Span::styled("[Esc]", modal_title_style()),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" ↑ Import ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render a blocking notice (import/export results, storage problems)
pub fn render_notice(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(notice) = &app.notice {
        let modal_area = create_modal_area(area);
        f.render_widget(Clear, modal_area);

        let message_style = if notice.is_error {
            error_style()
        } else {
            modal_title_style()
        };

        let lines = vec![
            Line::raw(""),
            Line::styled(notice.message.as_str(), message_style),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[any key]", modal_title_style()),
                Span::raw(" OK"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(format!(" {} ", notice.title), modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
