/// Main entry point for the habit insight engine CLI
///
/// This file sets up logging, parses command line arguments, loads a
/// snapshot file, and prints the derived analysis. The reference date is
/// read from the clock exactly once here; every library call takes it as
/// an argument.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use serde_json::json;
use tracing::info;

use habit_insights::{
    aggregate, build_suggestions, momentum, read_snapshot, render_text_report, today_summary,
    weekly_series, Coach, HabitId, SuggestionConfig, NAME_FALLBACK, TRAILING_WEEKS,
};

/// Command line arguments for the habit insight engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the snapshot JSON file to analyze
    input: PathBuf,

    /// Reference date for all calculations (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Override the display name carried by the snapshot
    #[arg(long)]
    user: Option<String>,

    /// Print a four-week completion series for the given habit id
    #[arg(long, value_name = "HABIT_ID")]
    weekly: Option<String>,

    /// Also write the text report to this file
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Request a coaching insight (uses GEMINI_API_KEY when set)
    #[arg(long)]
    coach: bool,

    /// Emit one JSON document instead of text output
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_insights={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting habit insight engine");

    // The only clock read; everything downstream takes the date as an argument
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let snapshot = read_snapshot(&args.input)?;
    let display_name = args.user.clone().or_else(|| snapshot.display_name.clone());

    let analysis = aggregate(&snapshot.habits, today);
    let suggestions = match analysis.report() {
        Some(report) => build_suggestions(report, &SuggestionConfig::default()),
        None => Vec::new(),
    };
    let today_view = today_summary(&snapshot.habits, today);
    let momentum_view = momentum(&snapshot.habits, today);

    let weekly = match args.weekly.as_deref() {
        Some(id) => {
            let series = weekly_series(&snapshot.habits, &HabitId::from_string(id), today);
            if series.is_none() {
                tracing::warn!("No habit with id {} in snapshot", id);
            }
            series
        }
        None => None,
    };

    let insight = if args.coach {
        let coach = Coach::from_env();
        Some(
            coach
                .request_insight(&snapshot.habits, display_name.as_deref(), today)
                .await,
        )
    } else {
        None
    };

    if let Some(path) = &args.report {
        let name = display_name.as_deref().unwrap_or(NAME_FALLBACK);
        std::fs::write(path, render_text_report(name, &snapshot.habits, today))?;
        info!("Wrote report to {}", path.display());
    }

    if args.json {
        let mut document = json!({
            "analysis": analysis,
            "suggestions": suggestions,
            "today": today_view,
            "momentum": momentum_view,
        });
        if let Some(series) = &weekly {
            document["weekly"] = serde_json::to_value(series)?;
        }
        if let Some(insight) = &insight {
            document["insight"] = serde_json::to_value(insight)?;
        }
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let name = display_name.as_deref().unwrap_or(NAME_FALLBACK);
    println!("{}", render_text_report(name, &snapshot.habits, today));

    println!(
        "Today: {}/{} habits completed ({}%)",
        today_view.completed_today, today_view.total_habits, today_view.percentage
    );
    println!(
        "Momentum: level {} | {} completions | {} to next level | best day {}",
        momentum_view.level,
        momentum_view.total_completions,
        momentum_view.to_next_level,
        momentum_view.best_day
    );
    println!("Quote of the day: \"{}\"", momentum_view.daily_quote);

    if let Some(series) = &weekly {
        println!();
        println!("Last {} weeks for {}", TRAILING_WEEKS, series.habit_name);
        for bucket in &series.weeks {
            println!("  {}: {}%", bucket.week_label, bucket.percentage);
        }
    }

    if let Some(insight) = &insight {
        println!();
        println!("Coach");
        println!("-----");
        println!("{}", insight.payload.observation);
        println!("Tip: {}", insight.payload.tip);
        println!("\"{}\"", insight.payload.quote);
    }

    Ok(())
}
