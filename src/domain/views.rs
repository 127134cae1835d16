use super::scope::{days_in_month, Scope, TRACKED_YEAR, WEEK_END_DAYS};
use chrono::{Datelike, NaiveDate};

/// A row of the year grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridRow {
    Day(u32),
    Week(u32),
    Month,
}

impl GridRow {
    /// Scope of the cell at this row in `month`, None for a day that month lacks
    pub fn scope(&self, month: u32) -> Option<Scope> {
        let scope = match self {
            GridRow::Day(day) => Scope::Daily { month, day: *day },
            GridRow::Week(week) => Scope::Weekly { month, week: *week },
            GridRow::Month => Scope::Monthly { month },
        };
        scope.is_valid().then_some(scope)
    }

    /// Left-hand row label
    pub fn label(&self) -> String {
        match self {
            GridRow::Day(day) => day.to_string(),
            GridRow::Week(week) => format!("WG{}", week),
            GridRow::Month => "MG".to_string(),
        }
    }
}

/// Build the grid rows: days 1..31, a weekly row after days 7/14/21/28,
/// then one monthly row
pub fn grid_rows() -> Vec<GridRow> {
    let mut rows = Vec::with_capacity(36);
    let mut week = 1;

    for day in 1..=31 {
        rows.push(GridRow::Day(day));
        if WEEK_END_DAYS.contains(&day) {
            rows.push(GridRow::Week(week));
            week += 1;
        }
    }

    rows.push(GridRow::Month);
    rows
}

/// Weekday column (0 = Sunday) of the first day of `month` in the tracked year
pub fn first_weekday(month: u32) -> u32 {
    NaiveDate::from_ymd_opt(TRACKED_YEAR, month + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Sunday-first week rows of a mini calendar. Leading and trailing blanks are None.
pub fn calendar_weeks(month: u32) -> Vec<[Option<u32>; 7]> {
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = first_weekday(month) as usize;

    for day in 1..=days_in_month(month) {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }

    weeks
}
