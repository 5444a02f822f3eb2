/// Coaching payload shapes
///
/// The three-field message every insight request resolves to, plus the
/// deterministic payloads used when the model is unavailable or the user has
/// no habits yet.

use serde::{Deserialize, Serialize};

/// The three-field coaching message
///
/// Both the model path and the fallback path must satisfy the same shape
/// invariant: all three fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightPayload {
    /// Short, specific observation about the user's patterns
    pub observation: String,
    /// One actionable consistency tip
    pub tip: String,
    /// Short motivational quote
    pub quote: String,
}

impl InsightPayload {
    /// Shape invariant shared by the model and fallback paths
    pub fn is_complete(&self) -> bool {
        !self.observation.trim().is_empty()
            && !self.tip.trim().is_empty()
            && !self.quote.trim().is_empty()
    }
}

/// Where a resolved insight came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    /// Validated language-model output
    Ai,
    /// Deterministic substitute after a skipped or failed model call
    Fallback,
    /// Static payload for users without habits
    Onboarding,
}

/// A resolved insight with its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    #[serde(flatten)]
    pub payload: InsightPayload,
    pub source: InsightSource,
}

/// Deterministic payload synthesized from the habit count
pub fn fallback_payload(habit_count: usize) -> InsightPayload {
    let observation = if habit_count == 1 {
        "You're tracking 1 habit. Keep going!".to_string()
    } else {
        format!("You're tracking {} habits. Keep going!", habit_count)
    };

    InsightPayload {
        observation,
        tip: "Consistency is key. Try to do your habits at the same time every day.".to_string(),
        quote: "Every action you take is a vote for the type of person you wish to become."
            .to_string(),
    }
}

/// Static payload for a user who hasn't added any habits yet
pub fn onboarding_payload() -> InsightPayload {
    InsightPayload {
        observation: "Welcome! Start by adding your first habit.".to_string(),
        tip: "Start small. A 2-minute habit is better than no habit.".to_string(),
        quote: "The journey of a thousand miles begins with a single step.".to_string(),
    }
}
