pub mod calendar_pane;
pub mod grid_pane;
pub mod guide_pane;
pub mod header_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod stats_pane;
pub mod styles;
pub mod today_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use calendar_pane::render_calendar_pane;
use grid_pane::render_grid_pane;
use guide_pane::render_guide_pane;
use header_pane::render_header_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_entry_modal, render_import_prompt, render_notice};
use ratatui::Frame;
use stats_pane::render_stats_pane;
use today_pane::render_today_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size, app.calendar_expanded, !app.data.guide_collapsed);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);

    render_header_pane(f, app, layout.header_area);
    render_stats_pane(f, app, layout.stats_area);
    render_today_pane(f, app, layout.today_area);
    render_calendar_pane(f, app, layout.calendars_area);
    render_grid_pane(f, app, layout.grid_area);

    if let Some(guide_area) = layout.guide_area {
        render_guide_pane(f, guide_area);
    }

    // Notice takes precedence over other modals
    if app.ui_mode == UiMode::Notice {
        render_notice(f, app, size);
        return;
    }

    if app.editor.is_some() {
        render_entry_modal(f, app, size);
    }

    if app.ui_mode == UiMode::ImportPrompt {
        render_import_prompt(f, app, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entry, Scope, Status};
    use crate::persistence::MemoryKvStore;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_full_screen() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut app =
            AppState::load(Box::new(MemoryKvStore::default()), today, std::env::temp_dir());
        app.set_goal("Run a marathon".to_string());
        app.save_entry(Scope::Daily { month: 2, day: 9 }, "tempo".to_string(), Status::Success)
            .unwrap();
        app.data.store.set(&Scope::Monthly { month: 0 }, Entry::new("base", Status::Failure));

        let mut terminal = Terminal::new(TestBackend::new(160, 70)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Run a marathon"));
        assert!(text.contains("Progress"));
        assert!(text.contains("Year Overview"));
        assert!(text.contains("Daily Progress Tracker"));
        assert!(text.contains("Guide"));
    }

    #[test]
    fn test_render_editor_and_notice() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut app =
            AppState::load(Box::new(MemoryKvStore::default()), today, std::env::temp_dir());
        let mut terminal = Terminal::new(TestBackend::new(160, 70)).unwrap();

        app.select_scope(Scope::Daily { month: 5, day: 1 });
        terminal.draw(|f| render(f, &mut app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("June 1, 2026"));
        assert!(text.contains("only pending can be saved"));

        app.cancel_edit();
        app.show_notice("Import failed", "bad file".to_string(), true);
        terminal.draw(|f| render(f, &mut app)).unwrap();
        assert!(buffer_text(&terminal).contains("bad file"));
    }
}
