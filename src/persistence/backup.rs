use super::files::atomic_write;
use super::state::{Field, PlannerData};
use crate::domain::EntryMap;
use crate::error::ImportParseError;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const BACKUP_VERSION: &str = "1.0";

/// Whole-state backup file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub export_date: Option<String>,
    #[serde(default)]
    pub data: Option<BackupData>,
}

/// The `data` section. Every field is optional on import; only present
/// fields overwrite state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<EntryMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_goals: Option<EntryMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_goals: Option<EntryMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_notes: Option<String>,
}

/// Snapshot the exportable state. Presentation flags are not included.
pub fn build_backup(data: &PlannerData, now: DateTime<Utc>) -> BackupDocument {
    BackupDocument {
        version: Some(BACKUP_VERSION.to_string()),
        export_date: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        data: Some(BackupData {
            goal: Some(data.goal.clone()),
            entries: Some(data.store.entries.clone()),
            weekly_goals: Some(data.store.weekly_goals.clone()),
            monthly_goals: Some(data.store.monthly_goals.clone()),
            today_notes: Some(data.today_notes.clone()),
        }),
    }
}

/// goal-planner-backup-YYYY-MM-DD.json
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    format!("goal-planner-backup-{}.json", now.format("%Y-%m-%d"))
}

/// Write a backup into `dir`, returning the file path
pub fn export_to_dir(dir: &Path, data: &PlannerData, now: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(backup_file_name(now));
    export_to_file(&path, data, now)?;
    Ok(path)
}

pub fn export_to_file(path: &Path, data: &PlannerData, now: DateTime<Utc>) -> Result<()> {
    let json = serde_json::to_string_pretty(&build_backup(data, now))?;
    atomic_write(path, &json)
        .with_context(|| format!("Failed to write backup: {}", path.display()))?;
    info!(path = %path.display(), "exported backup");
    Ok(())
}

/// Parse backup text. A document without `data` is rejected.
pub fn parse_backup(content: &str) -> Result<BackupData, ImportParseError> {
    let document: BackupDocument = serde_json::from_str(content)?;
    document.data.ok_or(ImportParseError::MissingData)
}

pub fn read_backup(path: &Path) -> Result<BackupData, ImportParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_backup(&content)
}

/// Merge present fields into `data`; returns the fields that were overwritten
pub fn apply_backup(data: &mut PlannerData, backup: BackupData) -> Vec<Field> {
    let mut applied = Vec::new();

    if let Some(goal) = backup.goal {
        data.goal = goal;
        applied.push(Field::Goal);
    }
    if let Some(entries) = backup.entries {
        data.store.entries = entries;
        applied.push(Field::Entries);
    }
    if let Some(weekly) = backup.weekly_goals {
        data.store.weekly_goals = weekly;
        applied.push(Field::WeeklyGoals);
    }
    if let Some(monthly) = backup.monthly_goals {
        data.store.monthly_goals = monthly;
        applied.push(Field::MonthlyGoals);
    }
    if let Some(notes) = backup.today_notes {
        data.today_notes = notes;
        applied.push(Field::TodayNotes);
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entry, Scope, Status};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
    }

    fn sample_data() -> PlannerData {
        let mut data = PlannerData {
            goal: "Ship it".to_string(),
            today_notes: "focus".to_string(),
            guide_collapsed: true,
            ..Default::default()
        };
        data.store.set(&Scope::Daily { month: 0, day: 1 }, Entry::new("start", Status::Success));
        data.store.set(&Scope::Weekly { month: 0, week: 1 }, Entry::new("w1", Status::Failure));
        data.store.set(&Scope::Monthly { month: 0 }, Entry::new("jan", Status::Pending));
        data
    }

    #[test]
    fn test_backup_shape() {
        let json = serde_json::to_value(build_backup(&sample_data(), now())).unwrap();
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["exportDate"], "2026-10-19T08:30:00.000Z");
        assert_eq!(json["data"]["goal"], "Ship it");
        assert_eq!(json["data"]["entries"]["0-1"]["status"], "success");
        assert_eq!(json["data"]["weeklyGoals"]["week-0-1"]["text"], "w1");
        assert_eq!(json["data"]["monthlyGoals"]["month-0"]["status"], "pending");
        assert_eq!(json["data"]["todayNotes"], "focus");
        assert!(json["data"].get("guideCollapsed").is_none());
    }

    #[test]
    fn test_backup_file_name() {
        assert_eq!(backup_file_name(now()), "goal-planner-backup-2026-10-19.json");
    }

    #[test]
    fn test_export_import_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original = sample_data();
        let path = export_to_dir(temp_dir.path(), &original, now()).unwrap();

        let mut fresh = PlannerData::default();
        let applied = apply_backup(&mut fresh, read_backup(&path).unwrap());

        assert_eq!(applied.len(), 5);
        assert_eq!(fresh.goal, original.goal);
        assert_eq!(fresh.store, original.store);
        assert_eq!(fresh.today_notes, original.today_notes);
        assert!(!fresh.guide_collapsed);
    }

    #[test]
    fn test_partial_import_merges_present_fields() {
        let mut data = sample_data();
        let backup = parse_backup(r#"{"data":{"goal":"New goal"}}"#).unwrap();
        let applied = apply_backup(&mut data, backup);

        assert_eq!(applied, vec![Field::Goal]);
        assert_eq!(data.goal, "New goal");
        assert_eq!(data.store, sample_data().store);
        assert_eq!(data.today_notes, "focus");
    }

    #[test]
    fn test_import_without_data_rejected() {
        let result = parse_backup(r#"{"version":"1.0","exportDate":"x"}"#);
        assert!(matches!(result, Err(ImportParseError::MissingData)));
        let result = parse_backup(r#"{"data":null}"#);
        assert!(matches!(result, Err(ImportParseError::MissingData)));
    }

    #[test]
    fn test_import_malformed_rejected() {
        assert!(matches!(parse_backup("not json"), Err(ImportParseError::Malformed(_))));
        assert!(matches!(
            parse_backup(r#"{"data":{"entries":"oops"}}"#),
            Err(ImportParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_import_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_backup(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(ImportParseError::Unreadable(_))));
    }
}
