use crate::domain::{Band, EntryStore, Scope, Status, DAYS_IN_YEAR, TRACKED_YEAR};
use chrono::{Datelike, NaiveDate};

/// Streak length that counts as a full week for banding
const STREAK_TARGET_DAYS: usize = 7;

/// Status counts for one scope kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeTotals {
    /// Saved entries, including cleared (empty, pending) ones
    pub tracked: usize,
    pub success: usize,
    pub failure: usize,
    pub pending: usize,
}

impl ScopeTotals {
    fn add(&mut self, status: Status) {
        self.tracked += 1;
        match status {
            Status::Success => self.success += 1,
            Status::Failure => self.failure += 1,
            Status::Pending => self.pending += 1,
        }
    }

    /// Achieved among decided (success + failure) entries
    pub fn decided_rate(&self) -> u32 {
        percent(self.success, self.success + self.failure)
    }

    pub fn outcome_band(&self) -> Band {
        Band::from_ratio(self.success, self.success + self.failure)
    }
}

/// Achieved days over elapsed days in some window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub achieved: usize,
    pub elapsed: usize,
}

impl Progress {
    pub fn percent(&self) -> u32 {
        percent(self.achieved, self.elapsed)
    }

    pub fn band(&self) -> Band {
        Band::from_ratio(self.achieved, self.elapsed)
    }
}

/// Per-month daily outcome summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSummary {
    pub month: u32,
    pub totals: ScopeTotals,
}

/// Bands driving the severity colors of each headline metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBands {
    pub streak: Band,
    pub monthly_rate: Band,
    pub this_month: Band,
    pub consistency: Band,
    pub outcome: Band,
}

/// Every derived metric, recomputed from the store on each read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub today: NaiveDate,
    pub daily: ScopeTotals,
    pub weekly: ScopeTotals,
    pub monthly: ScopeTotals,
    pub yearly_rate: u32,
    pub current_month: u32,
    pub monthly_rate: u32,
    pub streak: usize,
    pub this_month: Progress,
    pub since_jan1: Progress,
    pub consistency: u32,
    pub bands: StatBands,
}

/// round(numerator / denominator * 100), 0 when the denominator is 0
pub fn percent(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64 * 100.0).round() as u32
}

fn year_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(TRACKED_YEAR, 1, 1).unwrap_or_default()
}

fn year_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(TRACKED_YEAR, 12, 31).unwrap_or_default()
}

/// Day the date-walking metrics start from. Dates after the tracked year clamp
/// to December 31; dates before it have nothing to walk.
pub fn reference_day(today: NaiveDate) -> Option<NaiveDate> {
    if today < year_start() {
        None
    } else {
        Some(today.min(year_end()))
    }
}

/// Status counts over daily entries only. Weekly and monthly goals are
/// tallied separately and never mixed into the headline counts.
pub fn daily_totals(store: &EntryStore) -> ScopeTotals {
    let mut totals = ScopeTotals::default();
    for (_, entry) in store.daily_entries() {
        totals.add(entry.status);
    }
    totals
}

pub fn weekly_totals(store: &EntryStore) -> ScopeTotals {
    let mut totals = ScopeTotals::default();
    for (_, entry) in store.weekly_entries() {
        totals.add(entry.status);
    }
    totals
}

pub fn monthly_goal_totals(store: &EntryStore) -> ScopeTotals {
    let mut totals = ScopeTotals::default();
    for (_, entry) in store.monthly_entries() {
        totals.add(entry.status);
    }
    totals
}

/// Achieved days over the whole year length (not elapsed days)
pub fn yearly_rate(success_cells: usize) -> u32 {
    percent(success_cells, DAYS_IN_YEAR)
}

/// Daily outcomes for one month
pub fn month_totals(store: &EntryStore, month: u32) -> ScopeTotals {
    let mut totals = ScopeTotals::default();
    for (scope, entry) in store.daily_entries() {
        if scope.month() == month {
            totals.add(entry.status);
        }
    }
    totals
}

/// Success among decided daily entries of `month`; pending entries are ignored
pub fn monthly_rate(store: &EntryStore, month: u32) -> u32 {
    month_totals(store, month).decided_rate()
}

/// Consecutive achieved days walking back from today.
///
/// Empty or pending days before the first achieved day are skipped. After that,
/// any day that is not achieved ends the streak, and a missed day ends it
/// immediately. The walk stops at January 1.
pub fn current_streak(store: &EntryStore, today: NaiveDate) -> usize {
    let Some(mut day) = reference_day(today) else {
        return 0;
    };
    let first_day = year_start();
    let mut streak = 0;

    loop {
        match store.status(&Scope::for_date(day)) {
            Status::Success => streak += 1,
            Status::Failure => break,
            Status::Pending if streak > 0 => break,
            Status::Pending => {}
        }

        match day.pred_opt() {
            Some(prev) if prev >= first_day => day = prev,
            _ => break,
        }
    }

    streak
}

/// Achieved days from the 1st of the current month through today
pub fn this_month(store: &EntryStore, today: NaiveDate) -> Progress {
    let Some(day) = reference_day(today) else {
        return Progress::default();
    };
    let month = day.month0();
    let achieved = (1..=day.day())
        .filter(|d| store.status(&Scope::Daily { month, day: *d }) == Status::Success)
        .count();

    Progress {
        achieved,
        elapsed: day.day() as usize,
    }
}

/// Achieved days since January 1 over elapsed days (both inclusive)
pub fn since_jan1(store: &EntryStore, today: NaiveDate) -> Progress {
    let Some(day) = reference_day(today) else {
        return Progress::default();
    };
    let elapsed = (day - year_start()).num_days() + 1;
    if elapsed <= 0 {
        return Progress::default();
    }

    let achieved = store
        .daily_entries()
        .filter(|(scope, entry)| {
            entry.status == Status::Success && scope.date().map(|d| d <= day).unwrap_or(false)
        })
        .count();

    Progress {
        achieved,
        elapsed: elapsed as usize,
    }
}

/// Consistency percentage since January 1
pub fn consistency(store: &EntryStore, today: NaiveDate) -> u32 {
    since_jan1(store, today).percent()
}

/// Streak severity. Nothing tracked is neutral, otherwise the streak is
/// measured against a full week.
pub fn streak_band(streak: usize, tracked: usize) -> Band {
    if tracked == 0 {
        return Band::Neutral;
    }
    Band::from_ratio(streak.min(STREAK_TARGET_DAYS), STREAK_TARGET_DAYS)
}

/// Daily outcomes broken down per month
pub fn month_breakdown(store: &EntryStore) -> Vec<MonthSummary> {
    (0..12)
        .map(|month| MonthSummary {
            month,
            totals: month_totals(store, month),
        })
        .collect()
}

/// Fold the store into every headline metric as of `today`
pub fn calculate_stats(store: &EntryStore, today: NaiveDate) -> StatsSnapshot {
    let daily = daily_totals(store);
    let current_month = today.month0();
    let current = month_totals(store, current_month);
    let streak = current_streak(store, today);
    let this_month = this_month(store, today);
    let since_jan1 = since_jan1(store, today);

    StatsSnapshot {
        today,
        daily,
        weekly: weekly_totals(store),
        monthly: monthly_goal_totals(store),
        yearly_rate: yearly_rate(daily.success),
        current_month,
        monthly_rate: monthly_rate(store, current_month),
        streak,
        this_month,
        since_jan1,
        consistency: consistency(store, today),
        bands: StatBands {
            streak: streak_band(streak, daily.tracked),
            monthly_rate: current.outcome_band(),
            this_month: this_month.band(),
            consistency: since_jan1.band(),
            outcome: daily.outcome_band(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{days_in_month, Entry};
    use pretty_assertions::assert_eq;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(TRACKED_YEAR, m, d).unwrap()
    }

    fn mark(store: &mut EntryStore, day: NaiveDate, status: Status) {
        store.set(&Scope::for_date(day), Entry::new("", status));
    }

    #[test]
    fn test_yearly_rate_bounds() {
        assert_eq!(yearly_rate(0), 0);
        assert_eq!(yearly_rate(365), 100);
        assert_eq!(yearly_rate(73), 20);

        let mut last = 0;
        for successes in 0..=365 {
            let rate = yearly_rate(successes);
            assert!(rate >= last);
            last = rate;
        }
    }

    #[test]
    fn test_yearly_rate_from_full_store() {
        let mut store = EntryStore::new();
        for month in 0..12 {
            for day in 1..=days_in_month(month) {
                store.set(&Scope::Daily { month, day }, Entry::new("", Status::Success));
            }
        }
        let stats = calculate_stats(&store, date(12, 31));
        assert_eq!(stats.daily.success, 365);
        assert_eq!(stats.yearly_rate, 100);
        assert_eq!(stats.consistency, 100);
    }

    #[test]
    fn test_streak_stops_at_failure() {
        let today = date(3, 20);
        let mut store = EntryStore::new();
        mark(&mut store, date(3, 20), Status::Success);
        mark(&mut store, date(3, 19), Status::Success);
        mark(&mut store, date(3, 18), Status::Success);
        mark(&mut store, date(3, 17), Status::Failure);
        mark(&mut store, date(3, 16), Status::Success);

        assert_eq!(current_streak(&store, today), 3);
    }

    #[test]
    fn test_streak_stops_at_pending_after_count() {
        let today = date(3, 20);
        let mut store = EntryStore::new();
        mark(&mut store, date(3, 20), Status::Success);
        mark(&mut store, date(3, 19), Status::Pending);
        mark(&mut store, date(3, 18), Status::Success);

        assert_eq!(current_streak(&store, today), 1);
    }

    #[test]
    fn test_streak_skips_leading_gaps() {
        let today = date(3, 20);
        let mut store = EntryStore::new();
        mark(&mut store, date(3, 20), Status::Pending);
        mark(&mut store, date(3, 18), Status::Success);
        mark(&mut store, date(3, 17), Status::Success);

        assert_eq!(current_streak(&store, today), 2);
    }

    #[test]
    fn test_streak_leading_failure_is_zero() {
        let today = date(3, 20);
        let mut store = EntryStore::new();
        mark(&mut store, date(3, 19), Status::Failure);
        mark(&mut store, date(3, 18), Status::Success);

        assert_eq!(current_streak(&store, today), 0);
    }

    #[test]
    fn test_streak_crosses_month_but_not_year_start() {
        let mut store = EntryStore::new();
        mark(&mut store, date(2, 1), Status::Success);
        mark(&mut store, date(1, 31), Status::Success);
        assert_eq!(current_streak(&store, date(2, 1)), 2);

        let mut store = EntryStore::new();
        mark(&mut store, date(1, 2), Status::Success);
        mark(&mut store, date(1, 1), Status::Success);
        // Dec 31 would map to key "11-31"; the walk must not wrap around
        store.set(&Scope::Daily { month: 11, day: 31 }, Entry::new("", Status::Success));
        assert_eq!(current_streak(&store, date(1, 2)), 2);
    }

    #[test]
    fn test_streak_empty_store() {
        assert_eq!(current_streak(&EntryStore::new(), date(6, 1)), 0);
        let before = NaiveDate::from_ymd_opt(TRACKED_YEAR - 1, 12, 31).unwrap();
        assert_eq!(current_streak(&EntryStore::new(), before), 0);
    }

    #[test]
    fn test_consistency_example() {
        let today = date(1, 10);
        let mut store = EntryStore::new();
        for day in 1..=5 {
            mark(&mut store, date(1, day), Status::Success);
        }
        // After today: not counted
        mark(&mut store, date(1, 20), Status::Success);

        let progress = since_jan1(&store, today);
        assert_eq!(progress, Progress { achieved: 5, elapsed: 10 });
        assert_eq!(consistency(&store, today), 50);
    }

    #[test]
    fn test_dates_after_year_clamp_to_december_31() {
        let today = NaiveDate::from_ymd_opt(2027, 1, 5).unwrap();
        let mut store = EntryStore::new();
        mark(&mut store, date(12, 31), Status::Success);
        mark(&mut store, date(12, 30), Status::Success);
        mark(&mut store, date(12, 29), Status::Failure);
        mark(&mut store, date(12, 1), Status::Success);
        mark(&mut store, date(1, 2), Status::Success);
        mark(&mut store, date(1, 3), Status::Failure);

        assert_eq!(reference_day(today), Some(date(12, 31)));
        assert_eq!(current_streak(&store, today), 2);
        assert_eq!(this_month(&store, today), Progress { achieved: 3, elapsed: 31 });
        assert_eq!(since_jan1(&store, today), Progress { achieved: 4, elapsed: 365 });
        assert_eq!(consistency(&store, today), 1);

        // The monthly rate keeps the raw month index, so January here
        let stats = calculate_stats(&store, today);
        assert_eq!(stats.current_month, 0);
        assert_eq!(stats.monthly_rate, monthly_rate(&store, 0));
        assert_eq!(stats.monthly_rate, 50);
        assert_eq!(stats.consistency, 1);
    }

    #[test]
    fn test_consistency_before_year_is_zero() {
        let before = NaiveDate::from_ymd_opt(TRACKED_YEAR - 1, 6, 1).unwrap();
        assert_eq!(consistency(&EntryStore::new(), before), 0);
    }

    #[test]
    fn test_monthly_rate_example() {
        let mut store = EntryStore::new();
        mark(&mut store, date(4, 1), Status::Success);
        mark(&mut store, date(4, 2), Status::Success);
        mark(&mut store, date(4, 3), Status::Failure);
        mark(&mut store, date(4, 4), Status::Pending);
        mark(&mut store, date(4, 5), Status::Pending);
        mark(&mut store, date(4, 6), Status::Pending);
        mark(&mut store, date(5, 1), Status::Failure);

        assert_eq!(monthly_rate(&store, 3), 67);
        assert_eq!(monthly_rate(&store, 6), 0);
    }

    #[test]
    fn test_this_month() {
        let today = date(4, 10);
        let mut store = EntryStore::new();
        mark(&mut store, date(4, 1), Status::Success);
        mark(&mut store, date(4, 10), Status::Success);
        mark(&mut store, date(4, 5), Status::Failure);
        mark(&mut store, date(4, 11), Status::Success);
        mark(&mut store, date(3, 31), Status::Success);

        assert_eq!(this_month(&store, today), Progress { achieved: 2, elapsed: 10 });
    }

    #[test]
    fn test_invalid_days_excluded_from_counts() {
        let mut store = EntryStore::new();
        store.entries.insert("1-29".to_string(), Entry::new("", Status::Success));
        store.entries.insert("3-31".to_string(), Entry::new("", Status::Failure));
        mark(&mut store, date(1, 1), Status::Success);

        let totals = daily_totals(&store);
        assert_eq!(totals.tracked, 1);
        assert_eq!(totals.success, 1);
        assert_eq!(totals.failure, 0);
    }

    #[test]
    fn test_cleared_entry_counts_as_tracked() {
        let mut store = EntryStore::new();
        mark(&mut store, date(2, 2), Status::Pending);
        let totals = daily_totals(&store);
        assert_eq!(totals.tracked, 1);
        assert_eq!(totals.pending, 1);
    }

    #[test]
    fn test_weekly_and_monthly_kept_out_of_daily_counts() {
        let mut store = EntryStore::new();
        store.set(&Scope::Weekly { month: 0, week: 1 }, Entry::new("w", Status::Success));
        store.set(&Scope::Monthly { month: 0 }, Entry::new("m", Status::Failure));

        let stats = calculate_stats(&store, date(1, 15));
        assert_eq!(stats.daily, ScopeTotals::default());
        assert_eq!(stats.weekly.success, 1);
        assert_eq!(stats.monthly.failure, 1);
        assert_eq!(stats.yearly_rate, 0);
    }

    #[test]
    fn test_bands() {
        let empty = calculate_stats(&EntryStore::new(), date(3, 1));
        assert_eq!(empty.bands.streak, Band::Neutral);
        assert_eq!(empty.bands.outcome, Band::Neutral);
        assert_eq!(empty.bands.monthly_rate, Band::Neutral);
        assert_eq!(empty.bands.this_month, Band::Danger);

        let mut store = EntryStore::new();
        for day in 1..=7 {
            mark(&mut store, date(3, day), Status::Success);
        }
        mark(&mut store, date(3, 8), Status::Failure);
        mark(&mut store, date(3, 9), Status::Success);
        let stats = calculate_stats(&store, date(3, 10));
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.bands.streak, Band::Danger);
        assert_eq!(stats.bands.outcome, Band::Success);
        assert_eq!(stats.this_month, Progress { achieved: 8, elapsed: 10 });
        assert_eq!(stats.bands.this_month, Band::Success);

        assert_eq!(streak_band(3, 10), Band::Warning);
        assert_eq!(streak_band(12, 10), Band::Success);
    }

    #[test]
    fn test_month_breakdown() {
        let mut store = EntryStore::new();
        mark(&mut store, date(1, 1), Status::Success);
        mark(&mut store, date(12, 1), Status::Failure);
        let months = month_breakdown(&store);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].totals.success, 1);
        assert_eq!(months[11].totals.failure, 1);
        assert_eq!(months[5].totals, ScopeTotals::default());
    }
}
