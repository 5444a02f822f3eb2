/// Per-habit metric calculations
///
/// This module computes the derived statistics for a single habit: windowed
/// completion percentage, the current consecutive-day streak, and the
/// best-performing weekday. All functions are pure: the reference date is an
/// explicit input, never a hidden clock, so results are reproducible.

use serde::Serialize;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::analytics::tracking::{completed_dates, completions_in_range};
use crate::analytics::AnalyticsError;
use crate::domain::{Habit, HabitId};

/// Derived, ephemeral statistics for one habit
///
/// Recomputed on every call and never persisted. Serializes with camelCase
/// keys because the charting collaborators consume it as view data.
/// `percentage` covers the current month to date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitMetrics {
    /// Which habit these numbers describe
    pub habit_id: HabitId,
    /// Display name, carried through for charting
    pub name: String,
    /// Display icon, carried through for charting
    pub icon: String,
    /// Month-to-date completion rate, 0-100
    pub percentage: u8,
    /// Total completed days on record
    pub completion_count: u32,
    /// Consecutive completed days ending at the reference date
    pub current_streak: u32,
    /// Full weekday name with the most completions, empty when none
    pub best_weekday: String,
}

/// Completion percentage over the trailing `period_days` ending at `today`
///
/// `round(completed_in_window / period_days * 100)`, clamped to 0-100.
/// A zero period is a contract violation and fails loudly.
pub fn completion_percentage(
    habit: &Habit,
    today: NaiveDate,
    period_days: u32,
) -> Result<u8, AnalyticsError> {
    if period_days == 0 {
        return Err(AnalyticsError::InvalidPeriod(period_days));
    }

    let dates = completed_dates(habit, today);
    Ok(window_percentage(&dates, today, period_days))
}

/// Percentage for a window of `window_days` ending at `end`, from normalized dates
pub(crate) fn window_percentage(dates: &[NaiveDate], end: NaiveDate, window_days: u32) -> u8 {
    let start = end - Duration::days(window_days as i64 - 1);
    let completed = completions_in_range(dates, start, end);
    let rate = completed as f64 / window_days as f64 * 100.0;
    rate.round().clamp(0.0, 100.0) as u8
}

/// Current consecutive-day streak ending at `today`
///
/// Walks backward from `today`; a day not yet logged doesn't break the run,
/// so the walk may start at yesterday instead. Zero when neither today nor
/// yesterday is completed: a run that already ended is no longer current.
pub fn current_streak(habit: &Habit, today: NaiveDate) -> u32 {
    streak_from_dates(&completed_dates(habit, today), today)
}

pub(crate) fn streak_from_dates(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut checking_date = today;

    // Start from yesterday if today isn't completed yet
    if dates.binary_search(&today).is_err() {
        checking_date = today - Duration::days(1);
    }

    let mut streak = 0;
    for _ in 0..365 {
        // Cap the walk at a year
        if dates.binary_search(&checking_date).is_ok() {
            streak += 1;
            checking_date = checking_date - Duration::days(1);
        } else {
            break;
        }
    }

    streak
}

/// Weekday with the highest completion count, `None` without completions
///
/// Ties break toward the weekday that reached the maximal count first in
/// chronological order, so the result is deterministic for equal tallies.
pub fn best_weekday(habit: &Habit, today: NaiveDate) -> Option<Weekday> {
    weekday_from_dates(&completed_dates(habit, today))
}

pub(crate) fn weekday_from_dates(dates: &[NaiveDate]) -> Option<Weekday> {
    let mut counts = [0u32; 7];
    let mut best: Option<(Weekday, u32)> = None;

    for date in dates {
        let weekday = date.weekday();
        let index = weekday.num_days_from_monday() as usize;
        counts[index] += 1;

        match best {
            Some((_, best_count)) if counts[index] > best_count => {
                best = Some((weekday, counts[index]));
            }
            None => best = Some((weekday, counts[index])),
            _ => {}
        }
    }

    best.map(|(weekday, _)| weekday)
}

/// Full English weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Compute the full metrics record for one habit
pub fn habit_metrics(habit: &Habit, today: NaiveDate) -> HabitMetrics {
    let dates = completed_dates(habit, today);

    HabitMetrics {
        habit_id: habit.id.clone(),
        name: habit.name.clone(),
        icon: habit.icon.clone(),
        // Month to date: completions since the 1st over days elapsed
        percentage: window_percentage(&dates, today, today.day()),
        completion_count: dates.len() as u32,
        current_streak: streak_from_dates(&dates, today),
        best_weekday: weekday_from_dates(&dates)
            .map(weekday_name)
            .unwrap_or("")
            .to_string(),
    }
}

/// Compute metrics for every habit in the snapshot, preserving list order
pub fn compute_metrics(habits: &[Habit], today: NaiveDate) -> Vec<HabitMetrics> {
    habits.iter().map(|habit| habit_metrics(habit, today)).collect()
}
