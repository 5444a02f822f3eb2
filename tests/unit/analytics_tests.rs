/// Analytics behavior exercised through the public crate surface
use chrono::NaiveDate;
use habit_insights::*;

#[cfg(test)]
mod analytics_unit_tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn habit_with(name: &str, days: &[&str]) -> Habit {
        let tracking = days
            .iter()
            .map(|d| TrackingEntry::new(date(d), true))
            .collect();
        Habit::from_existing(
            HabitId::from_string(name),
            name.to_string(),
            "📝".to_string(),
            tracking,
        )
    }

    #[test]
    fn test_export_json_flows_into_metrics() {
        // Mongo-style export: "_id" key, no icon field
        let json = r#"{
            "_id": "65f1a2b3c4d5e6f7a8b9c0d1",
            "name": "Read",
            "tracking": [{"date": "2024-01-01", "completed": true}]
        }"#;

        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.icon, DEFAULT_ICON);

        let metrics = habit_metrics(&habit, date("2024-01-01"));
        assert_eq!(metrics.completion_count, 1);
        assert_eq!(metrics.percentage, 100);
        assert_eq!(metrics.current_streak, 1);
        assert_eq!(metrics.best_weekday, "Monday");
    }

    #[test]
    fn test_overall_percentage_averages_habit_rates() {
        let steady = habit_with(
            "Steady",
            &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"],
        );
        let slipping = habit_with("Slipping", &["2024-01-01"]);

        let analysis = aggregate(&[steady, slipping], date("2024-01-05"));
        let report = analysis.report().expect("two habits produce a report");

        assert_eq!(report.most_followed.name, "Steady");
        assert_eq!(report.most_followed.percentage, 80);
        assert_eq!(
            report.least_followed.as_ref().map(|m| m.name.as_str()),
            Some("Slipping")
        );
        assert_eq!(report.overall_percentage, 50);

        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["overallPercentage"], 50);
        assert_eq!(value["mostFollowed"]["name"], "Steady");
        assert_eq!(value["leastFollowed"]["percentage"], 20);
    }

    #[test]
    fn test_empty_snapshot_yields_the_sentinel() {
        let analysis = aggregate(&[], date("2024-01-05"));

        assert!(analysis.report().is_none());
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["message"], NO_HABITS_MESSAGE);
        assert!(value.get("overallPercentage").is_none());
    }

    #[test]
    fn test_weekly_series_spans_four_weeks_oldest_first() {
        let habit = habit_with(
            "Yoga",
            &[
                "2024-01-01",
                "2024-01-02",
                "2024-01-03",
                "2024-01-04",
                "2024-01-05",
                "2024-01-06",
                "2024-01-07",
            ],
        );
        let habits = vec![habit];

        let series = weekly_series(&habits, &HabitId::from_string("Yoga"), date("2024-01-28"))
            .expect("known id");

        assert_eq!(series.weeks.len(), TRAILING_WEEKS as usize);
        assert_eq!(series.weeks[0].week_label, "Jan 01 - Jan 07");
        assert_eq!(series.weeks[0].percentage, 100);
        assert_eq!(series.weeks[3].week_label, "Jan 22 - Jan 28");
        assert_eq!(series.weeks[3].percentage, 0);
    }

    #[test]
    fn test_unknown_habit_id_has_no_series() {
        let habits = vec![habit_with("Yoga", &["2024-01-01"])];
        assert!(weekly_series(&habits, &HabitId::from_string("nope"), date("2024-01-28")).is_none());
    }

    #[test]
    fn test_low_percentage_habit_draws_a_suggestion() {
        let steady = habit_with(
            "Steady",
            &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"],
        );
        let slipping = habit_with("Slipping", &["2024-01-01"]);

        let analysis = aggregate(&[steady, slipping], date("2024-01-05"));
        let report = analysis.report().unwrap();
        let suggestions = build_suggestions(report, &SuggestionConfig::default());

        assert!(suggestions
            .iter()
            .any(|s| s.contains("'Slipping' is at 20% this month")));
        assert!(!suggestions.iter().any(|s| s.contains("'Steady'")));
    }

    #[test]
    fn test_momentum_levels_up_every_ten_completions() {
        let habit = habit_with(
            "Walk",
            &[
                "2024-01-01",
                "2024-01-02",
                "2024-01-03",
                "2024-01-04",
                "2024-01-05",
                "2024-01-06",
                "2024-01-07",
                "2024-01-08",
                "2024-01-09",
                "2024-01-10",
            ],
        );

        let summary = momentum(&[habit], date("2024-01-10"));

        assert_eq!(summary.total_completions, 10);
        assert_eq!(summary.level, 2);
        assert_eq!(summary.to_next_level, 10);
        assert!(DAILY_QUOTES.contains(&summary.daily_quote.as_str()));
    }

    #[test]
    fn test_today_summary_counts_only_the_reference_date() {
        let done_today = habit_with("Done", &["2024-01-05"]);
        let done_yesterday = habit_with("Missed", &["2024-01-04"]);

        let summary = today_summary(&[done_today, done_yesterday], date("2024-01-05"));

        assert_eq!(summary.total_habits, 2);
        assert_eq!(summary.completed_today, 1);
        assert_eq!(summary.percentage, 50);
    }
}
