/// Dashboard and coach-panel summaries
///
/// Small cross-habit numbers the dashboard renders next to the main
/// analysis: today's progress, total completions, the overall best day, and
/// the gamified level with its next milestone.

use serde::Serialize;
use chrono::{Datelike, NaiveDate};

use crate::analytics::metrics::{weekday_from_dates, weekday_name};
use crate::analytics::tracking::completed_dates;
use crate::domain::{Habit, TRACKING_DATE_FORMAT};

/// Completions per gamification level
const LEVEL_STEP: u32 = 10;

/// Rotating motivational lines shown on the coach panel
pub const DAILY_QUOTES: [&str; 6] = [
    "Small steps every day lead to big results.",
    "Consistency is the key to success.",
    "Your future is created by what you do today.",
    "Don't stop when you're tired. Stop when you're done.",
    "Excellence is not an act, but a habit.",
    "Believe you can and you're halfway there.",
];

/// Today's progress across the whole snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodaySummary {
    pub total_habits: u32,
    pub completed_today: u32,
    /// Share of habits completed today, 0-100
    pub percentage: u8,
}

/// Momentum numbers for the coach panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumSummary {
    /// Completions across all habits; a date shared by two habits counts twice
    pub total_completions: u32,
    /// Best weekday over all habits, "Today" until something is completed
    pub best_day: String,
    /// Gamification level, one per ten completions
    pub level: u32,
    /// Completions remaining until the next level
    pub to_next_level: u32,
    /// Deterministic quote of the day (rotates by day of year)
    pub daily_quote: String,
}

/// How much of the habit list was completed on the reference date
pub fn today_summary(habits: &[Habit], today: NaiveDate) -> TodaySummary {
    let today_str = today.format(TRACKING_DATE_FORMAT).to_string();

    let total_habits = habits.len() as u32;
    let completed_today = habits
        .iter()
        .filter(|habit| {
            habit
                .tracking
                .iter()
                .any(|entry| entry.completed && entry.date == today_str)
        })
        .count() as u32;

    let percentage = if total_habits == 0 {
        0
    } else {
        (completed_today as f64 / total_habits as f64 * 100.0).round() as u8
    };

    TodaySummary {
        total_habits,
        completed_today,
        percentage,
    }
}

/// Cross-habit momentum: totals, best day, level and quote of the day
pub fn momentum(habits: &[Habit], today: NaiveDate) -> MomentumSummary {
    let mut all_dates: Vec<NaiveDate> = Vec::new();
    for habit in habits {
        all_dates.extend(completed_dates(habit, today));
    }
    all_dates.sort_unstable();

    let total_completions = all_dates.len() as u32;
    let best_day = weekday_from_dates(&all_dates)
        .map(weekday_name)
        .unwrap_or("Today")
        .to_string();

    MomentumSummary {
        total_completions,
        best_day,
        level: total_completions / LEVEL_STEP + 1,
        to_next_level: LEVEL_STEP - total_completions % LEVEL_STEP,
        daily_quote: DAILY_QUOTES[today.ordinal0() as usize % DAILY_QUOTES.len()].to_string(),
    }
}
