use crate::app::AppState;
use crate::domain::{Status, UiMode};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingEntry => handle_entry_editor_mode(app, key),
        UiMode::EditingGoal => handle_goal_editing_mode(app, key),
        UiMode::EditingNotes => handle_notes_editing_mode(app, key),
        UiMode::ImportPrompt => handle_import_prompt_mode(app, key),
        UiMode::Notice => {
            app.dismiss_notice();
            Ok(false)
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Grid navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Left | KeyCode::Char('h') => app.move_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_right(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.jump_to_today(),

        KeyCode::Enter => app.open_selected(),

        KeyCode::Char('g') | KeyCode::Char('G') => app.ui_mode = UiMode::EditingGoal,
        KeyCode::Char('n') | KeyCode::Char('N') => app.ui_mode = UiMode::EditingNotes,

        KeyCode::Char('c') | KeyCode::Char('C') => app.toggle_calendar(),
        KeyCode::Char('?') => app.toggle_guide(),

        // Errors are surfaced through the notice
        KeyCode::Char('e') | KeyCode::Char('E') => {
            let _ = app.export(Utc::now());
        }
        KeyCode::Char('i') | KeyCode::Char('I') => app.start_import(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while the entry editor is open
fn handle_entry_editor_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            if let Err(e) = app.confirm_edit() {
                app.show_notice("Not saved", e.to_string(), true);
            }
        }
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Tab => app.editor_cycle_status(),
        KeyCode::Backspace => app.editor_backspace(),

        // Alt+1..3 pick a status directly; plain digits are text
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => match c {
            '1' => app.editor_set_status(Status::Success),
            '2' => app.editor_set_status(Status::Failure),
            '3' => app.editor_set_status(Status::Pending),
            _ => {}
        },
        KeyCode::Char(c) => app.editor_add_char(c),

        _ => {}
    }
    Ok(false)
}

fn handle_goal_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.ui_mode = UiMode::Normal,
        KeyCode::Backspace => app.goal_backspace(),
        KeyCode::Char(c) => app.goal_add_char(c),
        _ => {}
    }
    Ok(false)
}

fn handle_notes_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.ui_mode = UiMode::Normal,
        KeyCode::Enter => app.notes_add_char('\n'),
        KeyCode::Backspace => app.notes_backspace(),
        KeyCode::Char(c) => app.notes_add_char(c),
        _ => {}
    }
    Ok(false)
}

fn handle_import_prompt_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.confirm_import(),
        KeyCode::Esc => app.cancel_import(),
        KeyCode::Backspace => {
            app.import_path.pop();
        }
        KeyCode::Char(c) => app.import_path.push(c),
        _ => {}
    }
    Ok(false)
}
