/// End-to-end flows: snapshot file in, analysis and insight out
use async_trait::async_trait;
use chrono::NaiveDate;
use habit_insights::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[cfg(test)]
mod engine_flow_tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "userId": "user-1",
        "displayName": "Maya",
        "habits": [
            {
                "_id": "h-read",
                "name": "Read",
                "icon": "📚",
                "tracking": [
                    {"date": "2024-01-01", "completed": true},
                    {"date": "2024-01-02", "completed": true},
                    {"date": "2024-01-03", "completed": true},
                    {"date": "2024-01-04", "completed": true}
                ]
            },
            {
                "_id": "h-run",
                "name": "Run",
                "tracking": [
                    {"date": "2024-01-01", "completed": true},
                    {"date": "2024-01-02", "completed": false}
                ]
            }
        ]
    }"#;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn write_snapshot(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(json.as_bytes())
            .expect("Failed to write snapshot");
        file
    }

    /// Returns a fixed reply for every prompt
    struct ScriptedModel {
        reply: &'static str,
    }

    #[async_trait]
    impl InsightModel for ScriptedModel {
        async fn generate(&self, _prompt: &str) -> Result<String, InsightError> {
            Ok(self.reply.to_string())
        }
    }

    #[test]
    fn test_snapshot_file_to_analysis() {
        let file = write_snapshot(SNAPSHOT);
        let snapshot = read_snapshot(file.path()).expect("Failed to read snapshot");

        assert_eq!(snapshot.display_name.as_deref(), Some("Maya"));
        assert_eq!(snapshot.habits.len(), 2);

        let analysis = aggregate(&snapshot.habits, date("2024-01-05"));
        let report = analysis.report().expect("non-empty snapshot");

        assert_eq!(report.most_followed.name, "Read");
        assert_eq!(report.most_followed.percentage, 80);
        assert_eq!(report.least_followed.as_ref().unwrap().name, "Run");
        assert_eq!(report.least_followed.as_ref().unwrap().percentage, 20);
        assert_eq!(report.overall_percentage, 50);
    }

    #[test]
    fn test_snapshot_file_to_text_report() {
        let file = write_snapshot(SNAPSHOT);
        let snapshot = read_snapshot(file.path()).unwrap();
        let name = snapshot.display_name.as_deref().unwrap_or(NAME_FALLBACK);

        let text = render_text_report(name, &snapshot.habits, date("2024-01-05"));

        assert!(text.contains("HABIT REPORT"));
        assert!(text.contains("User: Maya"));
        assert!(text.contains("Overall completion this month: 50%"));
        assert!(text.contains("📚 Read"));
        // Missing icon in the export falls back to the default
        assert!(text.contains(&format!("{} Run", DEFAULT_ICON)));
    }

    #[test]
    fn test_malformed_tracking_dates_are_dropped_not_fatal() {
        let file = write_snapshot(
            r#"{
                "userId": "user-2",
                "habits": [
                    {
                        "_id": "h1",
                        "name": "Stretch",
                        "tracking": [
                            {"date": "not-a-date", "completed": true},
                            {"date": "2024-01-01", "completed": true}
                        ]
                    }
                ]
            }"#,
        );
        let snapshot = read_snapshot(file.path()).unwrap();

        let metrics = habit_metrics(&snapshot.habits[0], date("2024-01-05"));
        assert_eq!(metrics.completion_count, 1);
    }

    #[tokio::test]
    async fn test_snapshot_to_ai_insight() {
        let file = write_snapshot(SNAPSHOT);
        let snapshot = read_snapshot(file.path()).unwrap();

        let coach = Coach::new(Some(ScriptedModel {
            reply: r#"{"observation": "Reading is on a roll", "tip": "Pair running with it", "quote": "Forward"}"#,
        }));
        let insight = coach
            .request_insight(&snapshot.habits, snapshot.display_name.as_deref(), date("2024-01-05"))
            .await;

        assert_eq!(insight.source, InsightSource::Ai);
        assert_eq!(insight.payload.observation, "Reading is on a roll");
    }

    #[tokio::test]
    async fn test_markdown_wrapped_garbage_falls_back() {
        let file = write_snapshot(SNAPSHOT);
        let snapshot = read_snapshot(file.path()).unwrap();

        let coach = Coach::new(Some(ScriptedModel {
            reply: "```json{bad",
        }));
        let insight = coach
            .request_insight(&snapshot.habits, None, date("2024-01-05"))
            .await;

        assert_eq!(insight.source, InsightSource::Fallback);
        assert!(insight.payload.is_complete());
    }

    #[tokio::test]
    async fn test_blank_field_reply_falls_back() {
        let file = write_snapshot(SNAPSHOT);
        let snapshot = read_snapshot(file.path()).unwrap();

        let coach = Coach::new(Some(ScriptedModel {
            reply: r#"{"observation": "", "tip": "t", "quote": "q"}"#,
        }));
        let insight = coach
            .request_insight(&snapshot.habits, None, date("2024-01-05"))
            .await;

        assert_eq!(insight.source, InsightSource::Fallback);
        assert!(insight.payload.is_complete());
    }

    #[tokio::test]
    async fn test_offline_engine_still_produces_insight() {
        let file = write_snapshot(SNAPSHOT);
        let snapshot = read_snapshot(file.path()).unwrap();

        let coach = Coach::<GeminiClient>::offline();
        let insight = coach
            .request_insight(&snapshot.habits, snapshot.display_name.as_deref(), date("2024-01-05"))
            .await;

        assert_eq!(insight.source, InsightSource::Fallback);
        assert!(insight.payload.observation.contains("2 habits"));
    }

    #[tokio::test]
    async fn test_empty_snapshot_onboards() {
        let file = write_snapshot(r#"{"userId": "user-3", "habits": []}"#);
        let snapshot = read_snapshot(file.path()).unwrap();

        let analysis = aggregate(&snapshot.habits, date("2024-01-05"));
        assert!(analysis.report().is_none());

        let coach = Coach::<GeminiClient>::offline();
        let insight = coach
            .request_insight(&snapshot.habits, None, date("2024-01-05"))
            .await;

        assert_eq!(insight.source, InsightSource::Onboarding);
    }
}
