use crate::domain::{Band, Status, MONTH_NAMES, TRACKED_YEAR};
use crate::persistence::{atomic_write, PlannerData};
use crate::report::stats::{calculate_stats, month_breakdown, ScopeTotals};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// Band marker used in the report
fn band_marker(band: Band) -> &'static str {
    match band {
        Band::Success => "🟢",
        Band::Warning => "🟡",
        Band::Danger => "🔴",
        Band::Neutral => "⚪",
    }
}

fn totals_line(label: &str, totals: &ScopeTotals) -> String {
    format!(
        "- **{}:** {} set, {} achieved, {} missed, {} pending ({}% of decided)\n",
        label,
        totals.tracked,
        totals.success,
        totals.failure,
        totals.pending,
        totals.decided_rate()
    )
}

/// Render the year report as markdown
pub fn render_report(data: &PlannerData, today: NaiveDate) -> String {
    let stats = calculate_stats(&data.store, today);
    let month_name = MONTH_NAMES[stats.current_month as usize];

    let mut report = String::new();

    report.push_str(&format!("# {} Goal Report - {}\n\n", TRACKED_YEAR, today));

    if !data.goal.is_empty() {
        report.push_str(&format!("> {}\n\n", data.goal));
    }

    // Summary Section
    report.push_str("## Summary\n\n");
    if data.store.is_empty() {
        report.push_str("_Nothing tracked yet._\n\n");
    }
    report.push_str(&format!("- **Days Tracked:** {}\n", stats.daily.tracked));
    report.push_str(&format!(
        "- **Achieved / Missed:** {} / {} {}\n",
        stats.daily.success,
        stats.daily.failure,
        band_marker(stats.bands.outcome)
    ));
    report.push_str(&format!(
        "- **Current Streak:** {} day(s) {}\n",
        stats.streak,
        band_marker(stats.bands.streak)
    ));
    report.push_str(&format!(
        "- **{} Rate:** {}% {}\n",
        month_name,
        stats.monthly_rate,
        band_marker(stats.bands.monthly_rate)
    ));
    report.push_str(&format!(
        "- **This Month:** {}/{} days achieved {}\n",
        stats.this_month.achieved,
        stats.this_month.elapsed,
        band_marker(stats.bands.this_month)
    ));
    report.push_str(&format!(
        "- **Consistency:** {}% ({}/{} days since Jan 1) {}\n",
        stats.consistency,
        stats.since_jan1.achieved,
        stats.since_jan1.elapsed,
        band_marker(stats.bands.consistency)
    ));
    report.push_str(&format!("- **Yearly Rate:** {}%\n\n", stats.yearly_rate));

    // Goals Section
    report.push_str("## Weekly & Monthly Goals\n\n");
    report.push_str(&totals_line("Weekly Goals", &stats.weekly));
    report.push_str(&totals_line("Monthly Goals", &stats.monthly));
    report.push('\n');

    // Month Table
    report.push_str("## By Month\n\n");
    report.push_str("| Month | Achieved | Missed | Pending | Rate | Monthly Goal |\n");
    report.push_str("|-------|----------|--------|---------|------|--------------|\n");
    let monthly_goals: Vec<_> = data.store.monthly_entries().collect();
    for summary in month_breakdown(&data.store) {
        let goal = monthly_goals
            .iter()
            .find(|(scope, _)| scope.month() == summary.month)
            .map(|(_, entry)| {
                let mark = match entry.status {
                    Status::Success => "✓ ",
                    Status::Failure => "✗ ",
                    Status::Pending => "",
                };
                format!("{}{}", mark, entry.text.replace('|', "\\|"))
            })
            .unwrap_or_default();

        report.push_str(&format!(
            "| {} | {} | {} | {} | {}% | {} |\n",
            MONTH_NAMES[summary.month as usize],
            summary.totals.success,
            summary.totals.failure,
            summary.totals.pending,
            summary.totals.decided_rate(),
            goal
        ));
    }

    report
}

/// Write the report to `output` and return its path
pub fn generate_report(data: &PlannerData, today: NaiveDate, output: &Path) -> Result<PathBuf> {
    let report = render_report(data, today);
    atomic_write(output, &report)?;
    info!(path = %output.display(), "report written");
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entry, Scope};

    fn sample_data() -> PlannerData {
        let mut data = PlannerData {
            goal: "Write every day".to_string(),
            ..Default::default()
        };
        data.store.set(&Scope::Daily { month: 0, day: 9 }, Entry::new("", Status::Success));
        data.store.set(&Scope::Daily { month: 0, day: 10 }, Entry::new("", Status::Success));
        data.store.set(&Scope::Daily { month: 0, day: 8 }, Entry::new("", Status::Failure));
        data.store.set(
            &Scope::Monthly { month: 0 },
            Entry::new("Draft | outline", Status::Success),
        );
        data.store.set(
            &Scope::Weekly { month: 0, week: 2 },
            Entry::new("3 posts", Status::Pending),
        );
        data
    }

    #[test]
    fn test_render_report() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let report = render_report(&sample_data(), today);

        assert!(report.starts_with("# 2026 Goal Report - 2026-01-10\n"));
        assert!(report.contains("> Write every day"));
        assert!(report.contains("- **Days Tracked:** 3\n"));
        assert!(report.contains("- **Current Streak:** 2 day(s)"));
        assert!(report.contains("- **January Rate:** 67%"));
        assert!(report.contains("- **Consistency:** 20% (2/10 days since Jan 1)"));
        assert!(report.contains("- **Weekly Goals:** 1 set, 0 achieved, 0 missed, 1 pending"));
        assert!(report.contains("| January | 2 | 1 | 0 | 67% | ✓ Draft \\| outline |"));
        assert!(report.contains("| December | 0 | 0 | 0 | 0% |  |"));
    }

    #[test]
    fn test_render_report_for_empty_store() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let report = render_report(&PlannerData::default(), today);

        assert!(report.contains("_Nothing tracked yet._"));
        assert!(!report.contains("> "));
        assert!(!render_report(&sample_data(), today).contains("Nothing tracked yet"));
    }

    #[test]
    fn test_generate_report_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("report.md");
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();

        let path = generate_report(&sample_data(), today, &output).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("## By Month"));
    }
}
