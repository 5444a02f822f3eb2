/// Tracking log normalization
///
/// The store hands habits over with their raw per-day entries: unordered,
/// possibly duplicated, possibly carrying dates that never parsed. Everything
/// downstream works on the normalized form produced here: ascending,
/// de-duplicated completed dates no later than the reference date.

use chrono::NaiveDate;
use crate::domain::Habit;

/// Normalize a habit's raw entries into sorted completed dates
///
/// Keeps only completed entries with a parseable date ≤ `today`. A malformed
/// row never fails the computation; it is dropped and logged at debug level.
/// Because incomplete rows are filtered out before de-duplication, a
/// `completed = false` duplicate can never mask a completed one.
pub fn completed_dates(habit: &Habit, today: NaiveDate) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = habit
        .tracking
        .iter()
        .filter(|entry| entry.completed)
        .filter_map(|entry| match entry.parsed_date() {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::debug!("Dropping tracking row for habit '{}': {}", habit.name, err);
                None
            }
        })
        .filter(|date| *date <= today)
        .collect();

    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Count completed dates inside an inclusive calendar range
pub fn completions_in_range(dates: &[NaiveDate], start: NaiveDate, end: NaiveDate) -> u32 {
    dates
        .iter()
        .filter(|date| **date >= start && **date <= end)
        .count() as u32
}
