/// Coach prompt construction
///
/// Builds the deterministic prompt sent to the language model. The prompt
/// carries the format contract the resolver expects back: pure JSON, exactly
/// the keys observation/tip/quote, no markdown fences.

use crate::analytics::HabitMetrics;

/// Placeholder when the caller has no display name for the user
pub const NAME_FALLBACK: &str = "Friend";

/// Build the coach prompt for a non-empty habit summary
///
/// Callers short-circuit to the onboarding payload before this point when
/// the habit list is empty, so an empty `metrics` slice never reaches the
/// model in practice.
pub fn build_coach_prompt(metrics: &[HabitMetrics], display_name: Option<&str>) -> String {
    let name = match display_name {
        Some(name) if !name.trim().is_empty() => name.trim(),
        _ => NAME_FALLBACK,
    };

    let mut prompt = String::new();
    prompt.push_str("Act as an encouraging and wise habit coach.\n");
    prompt.push_str(&format!("User: {}\n\n", single_line(name)));

    prompt.push_str("Here is the user's habit data:\n");
    for habit in metrics {
        prompt.push_str(&format!(
            "- {} ({}): Completed {} times\n",
            single_line(&habit.name),
            single_line(&habit.icon),
            habit.completion_count
        ));
    }

    prompt.push_str("\nPlease provide:\n");
    prompt.push_str("1. A short, specific observation about their patterns.\n");
    prompt.push_str("2. One actionable tip to improve consistency.\n");
    prompt.push_str("3. A short motivational quote tailored to their situation.\n\n");
    prompt.push_str("Keep the tone friendly, gamified, and concise (max 150 words).\n");
    prompt.push_str(
        "Format the response in PURE JSON with keys: \"observation\", \"tip\", \"quote\".\n",
    );
    prompt.push_str("Do not include markdown formatting like ```json.\n");

    prompt
}

/// Flatten control characters so a habit name can't break the line format
fn single_line(text: &str) -> String {
    let flattened: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    flattened.trim().to_string()
}
