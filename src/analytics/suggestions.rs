/// Rule-based habit suggestions
///
/// Turns an aggregated report into a short list of human-readable tips.
/// Everything here is deterministic and order-stable: identical input yields
/// identical output, so the rules are directly testable.

use serde::{Deserialize, Serialize};

use crate::analytics::aggregate::AnalysisReport;
use crate::analytics::metrics::HabitMetrics;

/// Thresholds and caps driving the suggestion rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Habits below this percentage get an individual tip
    pub low_threshold: u8,
    /// Overall percentage below this adds a global tip
    pub overall_threshold: u8,
    /// At most this many individual habit tips, lowest percentages first
    pub max_habit_tips: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            low_threshold: 50,
            overall_threshold: 40,
            max_habit_tips: 3,
        }
    }
}

/// Derive tips from an aggregated report
///
/// Rules run in a fixed order: individual tips for the N lowest habits under
/// the low threshold (stable sort, snapshot order breaks ties), one restart
/// nudge for a habit with history but no current streak, and one global tip
/// when the overall rate is under its threshold.
pub fn build_suggestions(report: &AnalysisReport, config: &SuggestionConfig) -> Vec<String> {
    let mut suggestions = Vec::new();

    let mut low: Vec<&HabitMetrics> = report
        .all_habits
        .iter()
        .filter(|metrics| metrics.percentage < config.low_threshold)
        .collect();
    low.sort_by_key(|metrics| metrics.percentage);
    low.truncate(config.max_habit_tips);

    for metrics in &low {
        suggestions.push(format!(
            "'{}' is at {}% this month. Try pairing it with a habit you already do consistently.",
            metrics.name, metrics.percentage
        ));
    }

    let stalled = report.all_habits.iter().find(|metrics| {
        metrics.completion_count > 0
            && metrics.current_streak == 0
            && !low.iter().any(|l| l.habit_id == metrics.habit_id)
    });
    if let Some(metrics) = stalled {
        suggestions.push(format!(
            "You've completed '{}' {} times before. Restart with a tiny version today to rebuild the chain.",
            metrics.name, metrics.completion_count
        ));
    }

    if report.overall_percentage < config.overall_threshold {
        suggestions.push(format!(
            "Your overall completion rate is {}%. Focus on one or two habits first and build from there.",
            report.overall_percentage
        ));
    }

    suggestions
}
