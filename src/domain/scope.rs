use super::enums::Status;
use chrono::{Datelike, NaiveDate};

/// The year the planner tracks
pub const TRACKED_YEAR: i32 = 2026;

/// Length of the tracked year, used as the yearly-rate denominator
pub const DAYS_IN_YEAR: usize = 365;

/// Days per month for the (non-leap) tracked year
pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days after which a weekly goal row appears, independent of month length
pub const WEEK_END_DAYS: [u32; 4] = [7, 14, 21, 28];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in a zero-based month, 0 for an out-of-range month
pub fn days_in_month(month: u32) -> u32 {
    DAYS_IN_MONTH.get(month as usize).copied().unwrap_or(0)
}

/// Whether (month, day) names a real day of the tracked year
pub fn is_valid_day(month: u32, day: u32) -> bool {
    day >= 1 && day <= days_in_month(month)
}

/// Three-letter month label
pub fn month_short(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month as usize)
        .map(|name| &name[..3])
        .unwrap_or("???")
}

/// Identifies which granularity and coordinate an entry belongs to.
/// Months are zero-based, days and weeks one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Daily { month: u32, day: u32 },
    Weekly { month: u32, week: u32 },
    Monthly { month: u32 },
}

impl Scope {
    /// Storage key: "<month>-<day>", "week-<month>-<week>" or "month-<month>"
    pub fn key(&self) -> String {
        match self {
            Scope::Daily { month, day } => format!("{}-{}", month, day),
            Scope::Weekly { month, week } => format!("week-{}-{}", month, week),
            Scope::Monthly { month } => format!("month-{}", month),
        }
    }

    /// Parse a daily key like "3-14" back into a scope
    pub fn from_daily_key(key: &str) -> Option<Self> {
        let (month, day) = key.split_once('-')?;
        let month = month.parse().ok()?;
        let day = day.parse().ok()?;
        Some(Scope::Daily { month, day })
    }

    /// Parse a weekly key like "week-3-2"
    pub fn from_weekly_key(key: &str) -> Option<Self> {
        let rest = key.strip_prefix("week-")?;
        let (month, week) = rest.split_once('-')?;
        Some(Scope::Weekly {
            month: month.parse().ok()?,
            week: week.parse().ok()?,
        })
    }

    /// Parse a monthly key like "month-3"
    pub fn from_monthly_key(key: &str) -> Option<Self> {
        let month = key.strip_prefix("month-")?.parse().ok()?;
        Some(Scope::Monthly { month })
    }

    /// Daily scope for a calendar date (year is ignored)
    pub fn for_date(date: NaiveDate) -> Self {
        Scope::Daily {
            month: date.month0(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        match self {
            Scope::Daily { month, .. } | Scope::Weekly { month, .. } | Scope::Monthly { month } => {
                *month
            }
        }
    }

    /// Whether the scope is structurally valid (day exists, week 1..=4, month 0..=11)
    pub fn is_valid(&self) -> bool {
        match self {
            Scope::Daily { month, day } => is_valid_day(*month, *day),
            Scope::Weekly { month, week } => *month < 12 && (1..=4).contains(week),
            Scope::Monthly { month } => *month < 12,
        }
    }

    /// Calendar date of a daily scope in the tracked year
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Scope::Daily { month, day } if self.is_valid() => {
                NaiveDate::from_ymd_opt(TRACKED_YEAR, month + 1, *day)
            }
            _ => None,
        }
    }

    /// Whether a daily scope lies after `today`. Weekly and monthly scopes never do.
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.date().map(|date| date > today).unwrap_or(false)
    }

    /// Statuses the editor may save for this scope. Future days only accept pending.
    pub fn allowed_statuses(&self, today: NaiveDate) -> &'static [Status] {
        if self.is_future(today) {
            &[Status::Pending]
        } else {
            Status::all()
        }
    }

    /// Whether `status` may be saved for this scope as of `today`
    pub fn permits(&self, status: Status, today: NaiveDate) -> bool {
        self.allowed_statuses(today).contains(&status)
    }

    /// Editor title
    pub fn title(&self) -> String {
        let month_name = MONTH_NAMES.get(self.month() as usize).copied().unwrap_or("?");
        match self {
            Scope::Daily { day, .. } => format!("{} {}, {}", month_name, day, TRACKED_YEAR),
            Scope::Weekly { week, .. } => format!("{}: Week {} Goals", month_name, week),
            Scope::Monthly { .. } => format!("{}: Monthly Goal", month_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(TRACKED_YEAR, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(0), 31);
        assert_eq!(days_in_month(1), 28);
        assert_eq!(days_in_month(3), 30);
        assert_eq!(days_in_month(12), 0);
        assert_eq!(DAYS_IN_MONTH.iter().sum::<u32>() as usize, DAYS_IN_YEAR);
    }

    #[test]
    fn test_invalid_days() {
        assert!(is_valid_day(1, 28));
        assert!(!is_valid_day(1, 29));
        assert!(!is_valid_day(3, 31));
        assert!(!is_valid_day(0, 0));
        assert!(!Scope::Daily { month: 1, day: 30 }.is_valid());
    }

    #[test]
    fn test_keys_are_unique_across_scopes() {
        let mut keys = HashSet::new();
        for month in 0..12 {
            for day in 1..=days_in_month(month) {
                assert!(keys.insert(Scope::Daily { month, day }.key()));
            }
            for week in 1..=4 {
                assert!(keys.insert(Scope::Weekly { month, week }.key()));
            }
            assert!(keys.insert(Scope::Monthly { month }.key()));
        }
        assert_eq!(keys.len(), DAYS_IN_YEAR + 12 * 4 + 12);
    }

    #[test]
    fn test_key_format() {
        assert_eq!(Scope::Daily { month: 0, day: 5 }.key(), "0-5");
        assert_eq!(Scope::Weekly { month: 11, week: 3 }.key(), "week-11-3");
        assert_eq!(Scope::Monthly { month: 4 }.key(), "month-4");
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(
            Scope::from_daily_key("11-31"),
            Some(Scope::Daily { month: 11, day: 31 })
        );
        assert_eq!(Scope::from_daily_key("week-1-2"), None);
        assert_eq!(Scope::from_daily_key("garbage"), None);
        assert_eq!(
            Scope::from_weekly_key("week-1-2"),
            Some(Scope::Weekly { month: 1, week: 2 })
        );
        assert_eq!(Scope::from_monthly_key("month-9"), Some(Scope::Monthly { month: 9 }));
    }

    #[test]
    fn test_future_policy() {
        let today = date(3, 10);
        let tomorrow = Scope::Daily { month: 2, day: 11 };
        let yesterday = Scope::Daily { month: 2, day: 9 };
        let same_day = Scope::Daily { month: 2, day: 10 };

        assert!(tomorrow.is_future(today));
        assert!(!tomorrow.permits(Status::Success, today));
        assert!(!tomorrow.permits(Status::Failure, today));
        assert!(tomorrow.permits(Status::Pending, today));

        assert!(!same_day.is_future(today));
        assert!(same_day.permits(Status::Success, today));
        assert!(yesterday.permits(Status::Failure, today));

        // Weekly and monthly goals are never restricted
        assert!(Scope::Monthly { month: 11 }.permits(Status::Success, today));
        assert!(Scope::Weekly { month: 11, week: 4 }.permits(Status::Failure, today));
    }

    #[test]
    fn test_titles() {
        assert_eq!(Scope::Daily { month: 0, day: 1 }.title(), "January 1, 2026");
        assert_eq!(Scope::Weekly { month: 1, week: 2 }.title(), "February: Week 2 Goals");
        assert_eq!(Scope::Monthly { month: 2 }.title(), "March: Monthly Goal");
    }
}
