use super::kv::KvStore;
use crate::domain::{EntryMap, EntryStore};
use crate::error::PersistenceReadError;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const GOAL_KEY: &str = "goal2026";
pub const ENTRIES_KEY: &str = "entries2026";
pub const WEEKLY_GOALS_KEY: &str = "weeklyGoals2026";
pub const MONTHLY_GOALS_KEY: &str = "monthlyGoals2026";
pub const GUIDE_COLLAPSED_KEY: &str = "guideCollapsed2026";

/// Slot for the free-text notes of a calendar day. Uses the real date
/// (zero-based month), not the tracked year.
pub fn notes_key(date: NaiveDate) -> String {
    format!("notes-{}-{}-{}", date.year(), date.month0(), date.day())
}

/// Everything the planner persists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerData {
    pub goal: String,
    pub store: EntryStore,
    pub today_notes: String,
    pub guide_collapsed: bool,
}

/// A persisted field; each lives in its own storage slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Goal,
    Entries,
    WeeklyGoals,
    MonthlyGoals,
    TodayNotes,
    GuideCollapsed,
}

impl Field {
    #[cfg(test)]
    pub fn all() -> &'static [Field] {
        &[
            Field::Goal,
            Field::Entries,
            Field::WeeklyGoals,
            Field::MonthlyGoals,
            Field::TodayNotes,
            Field::GuideCollapsed,
        ]
    }
}

/// Loads and saves `PlannerData` through a key-value store.
/// Writes are refused until `load` has run, so defaults never clobber saved state.
pub struct PlannerStorage<S: KvStore> {
    kv: S,
    loaded: bool,
}

impl<S: KvStore> PlannerStorage<S> {
    pub fn new(kv: S) -> Self {
        Self { kv, loaded: false }
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[cfg(test)]
    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Read every slot. A slot that cannot be read or parsed keeps its empty
    /// default and is reported; loading itself never fails.
    pub fn load(&mut self, today: NaiveDate) -> (PlannerData, Vec<PersistenceReadError>) {
        let mut data = PlannerData::default();
        let mut errors = Vec::new();

        if let Some(goal) = self.read_raw(GOAL_KEY, &mut errors) {
            data.goal = goal;
        }
        if let Some(entries) = self.read_json::<EntryMap>(ENTRIES_KEY, &mut errors) {
            data.store.entries = entries;
        }
        if let Some(weekly) = self.read_json::<EntryMap>(WEEKLY_GOALS_KEY, &mut errors) {
            data.store.weekly_goals = weekly;
        }
        if let Some(monthly) = self.read_json::<EntryMap>(MONTHLY_GOALS_KEY, &mut errors) {
            data.store.monthly_goals = monthly;
        }
        if let Some(notes) = self.read_raw(&notes_key(today), &mut errors) {
            data.today_notes = notes;
        }
        if let Some(collapsed) = self.read_json::<bool>(GUIDE_COLLAPSED_KEY, &mut errors) {
            data.guide_collapsed = collapsed;
        }

        self.loaded = true;
        debug!(
            daily = data.store.entries.len(),
            weekly = data.store.weekly_goals.len(),
            monthly = data.store.monthly_goals.len(),
            failed_slots = errors.len(),
            "planner state loaded"
        );
        (data, errors)
    }

    /// Notes for `date`, used when the wall-clock day rolls over mid-session
    pub fn load_notes(&self, date: NaiveDate) -> Result<String, PersistenceReadError> {
        let mut errors = Vec::new();
        let notes = self.read_raw(&notes_key(date), &mut errors);
        match errors.pop() {
            Some(err) => Err(err),
            None => Ok(notes.unwrap_or_default()),
        }
    }

    /// Non-empty raw value of a slot
    fn read_raw(&self, key: &str, errors: &mut Vec<PersistenceReadError>) -> Option<String> {
        match self.kv.get(key) {
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                warn!(key, error = %e, "failed to read storage slot, using default");
                errors.push(PersistenceReadError {
                    key: key.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    fn read_json<T: DeserializeOwned>(
        &self,
        key: &str,
        errors: &mut Vec<PersistenceReadError>,
    ) -> Option<T> {
        let raw = self.read_raw(key, errors)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "corrupt storage slot, using default");
                errors.push(PersistenceReadError {
                    key: key.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    /// Write one field to its slot. `today` picks the notes slot.
    pub fn save_field(&mut self, data: &PlannerData, field: Field, today: NaiveDate) -> Result<()> {
        if !self.loaded {
            anyhow::bail!("refusing to write {:?} before storage has been loaded", field);
        }

        match field {
            Field::Goal => self.kv.set(GOAL_KEY, &data.goal)?,
            Field::Entries => {
                self.kv.set(ENTRIES_KEY, &serde_json::to_string(&data.store.entries)?)?
            }
            Field::WeeklyGoals => self.kv.set(
                WEEKLY_GOALS_KEY,
                &serde_json::to_string(&data.store.weekly_goals)?,
            )?,
            Field::MonthlyGoals => self.kv.set(
                MONTHLY_GOALS_KEY,
                &serde_json::to_string(&data.store.monthly_goals)?,
            )?,
            Field::TodayNotes => self.kv.set(&notes_key(today), &data.today_notes)?,
            Field::GuideCollapsed => self.kv.set(
                GUIDE_COLLAPSED_KEY,
                if data.guide_collapsed { "true" } else { "false" },
            )?,
        }

        debug!(?field, "saved field");
        Ok(())
    }

    /// Write several fields, attempting every one even if some fail
    pub fn save_fields(
        &mut self,
        data: &PlannerData,
        fields: &[Field],
        today: NaiveDate,
    ) -> Result<()> {
        let mut first_error = None;
        for field in fields {
            if let Err(e) = self.save_field(data, *field, today) {
                warn!(?field, error = %e, "failed to save field");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
