/// Cross-habit aggregation
///
/// Combines per-habit metrics into the summary the analysis page renders:
/// most/least-followed rankings, the overall mean percentage, the per-habit
/// distribution list, and a four-week trailing series for a selected habit.

use serde::Serialize;
use chrono::{Duration, NaiveDate};

use crate::analytics::metrics::{compute_metrics, window_percentage, HabitMetrics};
use crate::analytics::tracking::completed_dates;
use crate::domain::{Habit, HabitId};

/// Message returned when there is nothing to analyze yet
pub const NO_HABITS_MESSAGE: &str = "No habits found. Create your first habit to get started!";

/// Number of trailing 7-day windows in a weekly series
pub const TRAILING_WEEKS: u32 = 4;

/// Result of aggregating a habit snapshot
///
/// "No data" is a distinct variant rather than a report full of zeros: a
/// user with no habits is not the same as a user with inactive habits.
/// Serializes untagged so the sentinel comes out as `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HabitAnalysis {
    /// Nothing to analyze; carries a human-readable explanation
    NoHabits { message: String },
    /// Full cross-habit report
    Report(AnalysisReport),
}

impl HabitAnalysis {
    /// The report, when there was data to aggregate
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            HabitAnalysis::Report(report) => Some(report),
            HabitAnalysis::NoHabits { .. } => None,
        }
    }
}

/// Cross-habit summary for a non-empty snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Habit with the highest percentage; first in list order wins ties
    pub most_followed: HabitMetrics,
    /// Habit with the lowest percentage; omitted with fewer than 2 habits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub least_followed: Option<HabitMetrics>,
    /// Mean of all per-habit percentages, rounded
    pub overall_percentage: u8,
    /// Every habit's metrics, in snapshot order, for distribution charting
    pub all_habits: Vec<HabitMetrics>,
}

/// One 7-day window of a habit's weekly series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBucket {
    /// Human-readable range, e.g. "Jul 29 - Aug 04"
    pub week_label: String,
    /// Completion rate for that window, 0-100
    pub percentage: u8,
}

/// Four trailing weekly buckets for one habit, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySeries {
    pub habit_id: HabitId,
    pub habit_name: String,
    pub weeks: Vec<WeeklyBucket>,
}

/// Aggregate a user's habits into the cross-habit report
pub fn aggregate(habits: &[Habit], today: NaiveDate) -> HabitAnalysis {
    if habits.is_empty() {
        return HabitAnalysis::NoHabits {
            message: NO_HABITS_MESSAGE.to_string(),
        };
    }

    let all_habits = compute_metrics(habits, today);

    // Strict comparisons keep the first habit in list order on ties
    let mut most = &all_habits[0];
    let mut least = &all_habits[0];
    for metrics in &all_habits[1..] {
        if metrics.percentage > most.percentage {
            most = metrics;
        }
        if metrics.percentage < least.percentage {
            least = metrics;
        }
    }

    let sum: u32 = all_habits.iter().map(|m| m.percentage as u32).sum();
    let overall_percentage = (sum as f64 / all_habits.len() as f64).round() as u8;

    let most_followed = most.clone();
    // With a single habit, most == least would be noise
    let least_followed = if all_habits.len() < 2 {
        None
    } else {
        Some(least.clone())
    };

    HabitAnalysis::Report(AnalysisReport {
        most_followed,
        least_followed,
        overall_percentage,
        all_habits,
    })
}

/// Exactly four trailing 7-day windows for one habit, oldest first
///
/// Returns `None` when the habit id is not in the snapshot; the caller
/// decides how to surface that.
pub fn weekly_series(
    habits: &[Habit],
    habit_id: &HabitId,
    today: NaiveDate,
) -> Option<WeeklySeries> {
    let habit = habits.iter().find(|habit| &habit.id == habit_id)?;
    let dates = completed_dates(habit, today);

    let mut weeks = Vec::with_capacity(TRAILING_WEEKS as usize);
    for offset in (0..TRAILING_WEEKS as i64).rev() {
        let end = today - Duration::days(7 * offset);
        let start = end - Duration::days(6);
        weeks.push(WeeklyBucket {
            week_label: format!("{} - {}", start.format("%b %d"), end.format("%b %d")),
            percentage: window_percentage(&dates, end, 7),
        });
    }

    Some(WeeklySeries {
        habit_id: habit.id.clone(),
        habit_name: habit.name.clone(),
        weeks,
    })
}
