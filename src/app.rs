use crate::domain::{grid_rows, Entry, GridRow, Scope, Status, UiMode, TRACKED_YEAR};
use crate::error::{EntryRejected, ImportParseError};
use crate::persistence::{
    apply_backup, export_to_dir, read_backup, Field, KvStore, PlannerData, PlannerStorage,
};
use crate::report::stats::{calculate_stats, StatsSnapshot};
use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Modal editor for one scope. Nothing is written until the edit is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub scope: Scope,
    pub text: String,
    pub status: Status,
}

/// Blocking notice shown over everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

/// Main application state
pub struct AppState {
    pub data: PlannerData,
    storage: PlannerStorage<Box<dyn KvStore>>,
    pub today: NaiveDate,
    pub ui_mode: UiMode,
    pub rows: Vec<GridRow>,
    pub cursor_row: usize,
    pub cursor_month: u32,
    pub grid_scroll: usize,
    pub editor: Option<EditorState>,
    pub import_path: String,
    pub notice: Option<Notice>,
    pub calendar_expanded: bool,
    pub export_dir: PathBuf,
    pending_writes: BTreeSet<Field>,
}

impl AppState {
    /// Load state from `kv`. No write can happen before this returns.
    pub fn load(kv: Box<dyn KvStore>, today: NaiveDate, export_dir: PathBuf) -> Self {
        let mut storage = PlannerStorage::new(kv);
        let (data, errors) = storage.load(today);
        for err in &errors {
            error!("{}", err);
        }

        let mut app = Self::new(data, storage, today, export_dir);
        if !errors.is_empty() {
            let message = format!(
                "{} saved field(s) could not be read and were reset. See goalplan.log.",
                errors.len()
            );
            app.show_notice("Storage", message, true);
        }
        app
    }

    fn new(
        data: PlannerData,
        storage: PlannerStorage<Box<dyn KvStore>>,
        today: NaiveDate,
        export_dir: PathBuf,
    ) -> Self {
        let rows = grid_rows();
        let (cursor_row, cursor_month) = if today.year() == TRACKED_YEAR {
            let row = rows
                .iter()
                .position(|r| *r == GridRow::Day(today.day()))
                .unwrap_or(0);
            (row, today.month0())
        } else {
            (0, 0)
        };

        Self {
            data,
            storage,
            today,
            ui_mode: UiMode::Normal,
            rows,
            cursor_row,
            cursor_month,
            grid_scroll: 0,
            editor: None,
            import_path: String::new(),
            notice: None,
            calendar_expanded: false,
            export_dir,
            pending_writes: BTreeSet::new(),
        }
    }

    /// Advance the session date. The notes slot follows the wall clock, so
    /// a rollover flushes the old day's notes and loads the new day's.
    pub fn refresh_today(&mut self, today: NaiveDate) {
        if today == self.today {
            return;
        }
        self.save();
        info!(from = %self.today, to = %today, "day changed");
        self.today = today;
        self.data.today_notes = match self.storage.load_notes(today) {
            Ok(notes) => notes,
            Err(e) => {
                error!("{}", e);
                String::new()
            }
        };
    }

    /// Recompute every derived metric
    pub fn stats(&self) -> StatsSnapshot {
        calculate_stats(&self.data.store, self.today)
    }

    fn mark_dirty(&mut self, field: Field) {
        self.pending_writes.insert(field);
    }

    pub fn needs_save(&self) -> bool {
        !self.pending_writes.is_empty()
    }

    /// Write changed fields. Failures are logged and dropped, never retried.
    pub fn save(&mut self) {
        let fields: Vec<Field> = std::mem::take(&mut self.pending_writes).into_iter().collect();
        if fields.is_empty() {
            return;
        }
        if let Err(e) = self.storage.save_fields(&self.data, &fields, self.today) {
            error!(error = %e, "failed to persist planner state");
        }
    }

    // --- Grid navigation ---

    pub fn selected_row(&self) -> GridRow {
        self.rows[self.cursor_row.min(self.rows.len() - 1)]
    }

    /// Scope under the cursor, None on a day the month lacks
    pub fn selected_scope(&self) -> Option<Scope> {
        self.selected_row().scope(self.cursor_month)
    }

    pub fn move_up(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.rows.len() {
            self.cursor_row += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_month = self.cursor_month.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_month < 11 {
            self.cursor_month += 1;
        }
    }

    /// Jump the cursor to today's cell
    pub fn jump_to_today(&mut self) {
        if self.today.year() != TRACKED_YEAR {
            return;
        }
        if let Some(row) = self.rows.iter().position(|r| *r == GridRow::Day(self.today.day())) {
            self.cursor_row = row;
            self.cursor_month = self.today.month0();
        }
    }

    // --- Entry editor ---

    /// Open the editor on `scope` with its saved entry (or an empty pending one)
    pub fn select_scope(&mut self, scope: Scope) -> bool {
        if !scope.is_valid() {
            return false;
        }
        let entry = self.data.store.get_or_default(&scope);
        let status = if scope.permits(entry.status, self.today) {
            entry.status
        } else {
            Status::Pending
        };
        self.editor = Some(EditorState {
            scope,
            text: entry.text,
            status,
        });
        self.ui_mode = UiMode::EditingEntry;
        true
    }

    pub fn open_selected(&mut self) {
        if let Some(scope) = self.selected_scope() {
            self.select_scope(scope);
        }
    }

    pub fn editor_add_char(&mut self, c: char) {
        if let Some(editor) = &mut self.editor {
            editor.text.push(c);
        }
    }

    pub fn editor_backspace(&mut self) {
        if let Some(editor) = &mut self.editor {
            editor.text.pop();
        }
    }

    /// Move to the next status the scope allows
    pub fn editor_cycle_status(&mut self) {
        let today = self.today;
        if let Some(editor) = &mut self.editor {
            let mut next = editor.status.next();
            while !editor.scope.permits(next, today) {
                next = next.next();
            }
            editor.status = next;
        }
    }

    pub fn editor_set_status(&mut self, status: Status) {
        let today = self.today;
        if let Some(editor) = &mut self.editor {
            if editor.scope.permits(status, today) {
                editor.status = status;
            }
        }
    }

    /// Replace the entry at `scope` with text and status together.
    /// Future days may only be saved as pending.
    pub fn save_entry(
        &mut self,
        scope: Scope,
        text: String,
        status: Status,
    ) -> Result<(), EntryRejected> {
        if !scope.is_valid() {
            return Err(EntryRejected::InvalidScope);
        }
        if !scope.permits(status, self.today) {
            warn!(key = %scope.key(), status = status.to_tag(), "rejected save on future day");
            return Err(EntryRejected::FutureDay {
                title: scope.title(),
                status,
            });
        }

        self.data.store.set(&scope, Entry::new(text, status));
        self.mark_dirty(match scope {
            Scope::Daily { .. } => Field::Entries,
            Scope::Weekly { .. } => Field::WeeklyGoals,
            Scope::Monthly { .. } => Field::MonthlyGoals,
        });
        Ok(())
    }

    /// Commit the open editor and close it. A rejected save keeps the editor
    /// and its draft open.
    pub fn confirm_edit(&mut self) -> Result<(), EntryRejected> {
        let Some(editor) = self.editor.take() else {
            return Ok(());
        };
        if let Err(e) = self.save_entry(editor.scope, editor.text.clone(), editor.status) {
            self.editor = Some(editor);
            return Err(e);
        }
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    /// Close the editor without writing anything
    pub fn cancel_edit(&mut self) {
        self.editor = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- Free-text fields ---

    pub fn set_goal(&mut self, text: String) {
        self.data.goal = text;
        self.mark_dirty(Field::Goal);
    }

    pub fn set_today_notes(&mut self, text: String) {
        self.data.today_notes = text;
        self.mark_dirty(Field::TodayNotes);
    }

    pub fn goal_add_char(&mut self, c: char) {
        let mut goal = self.data.goal.clone();
        goal.push(c);
        self.set_goal(goal);
    }

    pub fn goal_backspace(&mut self) {
        let mut goal = self.data.goal.clone();
        if goal.pop().is_some() {
            self.set_goal(goal);
        }
    }

    pub fn notes_add_char(&mut self, c: char) {
        let mut notes = self.data.today_notes.clone();
        notes.push(c);
        self.set_today_notes(notes);
    }

    pub fn notes_backspace(&mut self) {
        let mut notes = self.data.today_notes.clone();
        if notes.pop().is_some() {
            self.set_today_notes(notes);
        }
    }

    // --- Presentation flags ---

    pub fn toggle_calendar(&mut self) {
        self.calendar_expanded = !self.calendar_expanded;
    }

    pub fn toggle_guide(&mut self) {
        self.data.guide_collapsed = !self.data.guide_collapsed;
        self.mark_dirty(Field::GuideCollapsed);
    }

    // --- Import / export ---

    /// Write a backup into the export directory and report where it went
    pub fn export(&mut self, now: DateTime<Utc>) -> Result<PathBuf> {
        match export_to_dir(&self.export_dir, &self.data, now) {
            Ok(path) => {
                self.show_notice("Export", format!("Backup written to {}", path.display()), false);
                Ok(path)
            }
            Err(e) => {
                error!(error = %e, "export failed");
                self.show_notice("Export failed", e.to_string(), true);
                Err(e)
            }
        }
    }

    pub fn start_import(&mut self) {
        self.import_path.clear();
        self.ui_mode = UiMode::ImportPrompt;
    }

    pub fn cancel_import(&mut self) {
        self.import_path.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn confirm_import(&mut self) {
        let path = PathBuf::from(self.import_path.trim());
        self.import_path.clear();
        self.ui_mode = UiMode::Normal;
        // Result is surfaced through the notice
        let _ = self.import_from(&path);
    }

    /// Merge a backup file into state. On any error state is left untouched.
    pub fn import_from(&mut self, path: &Path) -> Result<Vec<Field>, ImportParseError> {
        match read_backup(path) {
            Ok(backup) => {
                let applied = apply_backup(&mut self.data, backup);
                for field in &applied {
                    self.mark_dirty(*field);
                }
                info!(path = %path.display(), fields = applied.len(), "imported backup");
                self.show_notice("Import", "Data imported successfully!".to_string(), false);
                Ok(applied)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "import failed");
                self.show_notice("Import failed", e.to_string(), true);
                Err(e)
            }
        }
    }

    pub fn show_notice(&mut self, title: &str, message: String, is_error: bool) {
        self.notice = Some(Notice {
            title: title.to_string(),
            message,
            is_error,
        });
        self.ui_mode = UiMode::Notice;
    }

    /// Close the notice, returning to the editor if one is still open
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = if self.editor.is_some() {
            UiMode::EditingEntry
        } else {
            UiMode::Normal
        };
    }
}
