/// Plain-text habit report
///
/// Renders the downloadable report the analysis page offers. Line-oriented
/// plain text so it opens anywhere.

use chrono::NaiveDate;

use crate::analytics::aggregate::{aggregate, HabitAnalysis};
use crate::analytics::suggestions::{build_suggestions, SuggestionConfig};
use crate::domain::Habit;

/// Render the full text report for a snapshot
pub fn render_text_report(display_name: &str, habits: &[Habit], today: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str("HABIT REPORT\n");
    out.push_str("============\n");
    out.push_str(&format!("User: {}\n", display_name));
    out.push_str(&format!("Date: {}\n\n", today.format("%Y-%m-%d")));

    let report = match aggregate(habits, today) {
        HabitAnalysis::NoHabits { message } => {
            out.push_str(&message);
            out.push('\n');
            return out;
        }
        HabitAnalysis::Report(report) => report,
    };

    out.push_str(&format!(
        "Overall completion this month: {}%\n",
        report.overall_percentage
    ));
    out.push_str(&format!(
        "Most followed: {} {} ({}%)\n",
        report.most_followed.icon, report.most_followed.name, report.most_followed.percentage
    ));
    if let Some(least) = &report.least_followed {
        out.push_str(&format!(
            "Needs attention: {} {} ({}%)\n",
            least.icon, least.name, least.percentage
        ));
    }

    out.push_str("\nHabits\n------\n");
    for metrics in &report.all_habits {
        let best_day = if metrics.best_weekday.is_empty() {
            "-"
        } else {
            metrics.best_weekday.as_str()
        };
        out.push_str(&format!(
            "{} {}: {}% | {} completions | streak {} | best day {}\n",
            metrics.icon,
            metrics.name,
            metrics.percentage,
            metrics.completion_count,
            metrics.current_streak,
            best_day
        ));
    }

    let suggestions = build_suggestions(&report, &SuggestionConfig::default());
    if !suggestions.is_empty() {
        out.push_str("\nSuggestions\n-----------\n");
        for (index, suggestion) in suggestions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, suggestion));
        }
    }

    out
}
