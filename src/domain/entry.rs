use super::enums::Status;
use super::scope::Scope;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A saved entry: free text plus outcome
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub status: Status,
}

impl Entry {
    pub fn new(text: impl Into<String>, status: Status) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }
}

/// Key -> Entry mapping for one scope kind, serialized as a JSON object
pub type EntryMap = BTreeMap<String, Entry>;

/// Daily, weekly and monthly entries. Absence of a key means "never saved".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    pub entries: EntryMap,
    pub weekly_goals: EntryMap,
    pub monthly_goals: EntryMap,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, scope: &Scope) -> &EntryMap {
        match scope {
            Scope::Daily { .. } => &self.entries,
            Scope::Weekly { .. } => &self.weekly_goals,
            Scope::Monthly { .. } => &self.monthly_goals,
        }
    }

    fn map_mut(&mut self, scope: &Scope) -> &mut EntryMap {
        match scope {
            Scope::Daily { .. } => &mut self.entries,
            Scope::Weekly { .. } => &mut self.weekly_goals,
            Scope::Monthly { .. } => &mut self.monthly_goals,
        }
    }

    pub fn get(&self, scope: &Scope) -> Option<&Entry> {
        self.map(scope).get(&scope.key())
    }

    /// Entry for `scope`, or an empty pending entry if never saved
    pub fn get_or_default(&self, scope: &Scope) -> Entry {
        self.get(scope).cloned().unwrap_or_default()
    }

    /// Replace the whole entry for `scope`, creating the key if absent
    pub fn set(&mut self, scope: &Scope, entry: Entry) {
        self.map_mut(scope).insert(scope.key(), entry);
    }

    /// Status shown for `scope` (pending when never saved)
    pub fn status(&self, scope: &Scope) -> Status {
        self.get(scope).map(|e| e.status).unwrap_or_default()
    }

    /// Saved daily entries on structurally valid days, with their scope.
    /// Keys that do not parse or name a non-existent day are skipped.
    pub fn daily_entries(&self) -> impl Iterator<Item = (Scope, &Entry)> {
        self.entries.iter().filter_map(|(key, entry)| {
            Scope::from_daily_key(key)
                .filter(|scope| scope.is_valid())
                .map(|scope| (scope, entry))
        })
    }

    /// Saved weekly goals on valid scopes
    pub fn weekly_entries(&self) -> impl Iterator<Item = (Scope, &Entry)> {
        self.weekly_goals.iter().filter_map(|(key, entry)| {
            Scope::from_weekly_key(key)
                .filter(|scope| scope.is_valid())
                .map(|scope| (scope, entry))
        })
    }

    /// Saved monthly goals on valid scopes
    pub fn monthly_entries(&self) -> impl Iterator<Item = (Scope, &Entry)> {
        self.monthly_goals.iter().filter_map(|(key, entry)| {
            Scope::from_monthly_key(key)
                .filter(|scope| scope.is_valid())
                .map(|scope| (scope, entry))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.weekly_goals.is_empty() && self.monthly_goals.is_empty()
    }
}
