/// Insight resolution
///
/// One request walks a small state machine: no configured model goes
/// straight to the fallback; otherwise the model is called once under a
/// timeout, its response is cleaned and decoded, and any failure along the
/// way lands on the same deterministic fallback. The caller always gets a
/// complete payload; model trouble surfaces only as a logged warning.

use std::time::Duration;

use chrono::NaiveDate;

use crate::analytics::compute_metrics;
use crate::domain::Habit;
use crate::insight::{
    build_coach_prompt, fallback_payload, onboarding_payload, GeminiClient, Insight,
    InsightError, InsightModel, InsightPayload, InsightSource, DEFAULT_CALL_TIMEOUT,
};

/// Resolves coaching requests against an optional model client
pub struct Coach<M = GeminiClient> {
    model: Option<M>,
    call_timeout: Duration,
}

impl Coach<GeminiClient> {
    /// Build a coach from the environment
    ///
    /// Without a GEMINI_API_KEY the coach still works; every request
    /// resolves through the deterministic fallback.
    pub fn from_env() -> Self {
        Self::new(GeminiClient::from_env())
    }

    /// A coach with no model at all, for offline use
    pub fn offline() -> Self {
        Self::new(None)
    }
}

impl<M: InsightModel> Coach<M> {
    /// Create a coach around an explicit model capability
    pub fn new(model: Option<M>) -> Self {
        Self {
            model,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Override the per-call timeout
    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Whether a model client is configured
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Resolve one coaching request
    ///
    /// A single model attempt per call; a UI-level refresh is a new request,
    /// never an internal retry.
    pub async fn request_insight(
        &self,
        habits: &[Habit],
        display_name: Option<&str>,
        today: NaiveDate,
    ) -> Insight {
        // Explicit separate path, not a degenerate case of the general one
        if habits.is_empty() {
            return Insight {
                payload: onboarding_payload(),
                source: InsightSource::Onboarding,
            };
        }

        let metrics = compute_metrics(habits, today);

        let model = match &self.model {
            Some(model) => model,
            None => {
                tracing::warn!(
                    "Falling back to deterministic insight: {}",
                    InsightError::NoCredential
                );
                return Insight {
                    payload: fallback_payload(metrics.len()),
                    source: InsightSource::Fallback,
                };
            }
        };

        let prompt = build_coach_prompt(&metrics, display_name);

        let generated = match tokio::time::timeout(self.call_timeout, model.generate(&prompt)).await
        {
            Ok(result) => result,
            Err(_elapsed) => Err(InsightError::Timeout(self.call_timeout)),
        };

        match generated.and_then(|raw| parse_model_payload(&raw)) {
            Ok(payload) => Insight {
                payload,
                source: InsightSource::Ai,
            },
            Err(err) => {
                tracing::warn!("Falling back to deterministic insight: {}", err);
                Insight {
                    payload: fallback_payload(metrics.len()),
                    source: InsightSource::Fallback,
                }
            }
        }
    }
}

/// Clean and decode a raw model response into the payload shape
///
/// Strips any markdown fence markers the model added despite instructions,
/// then requires a strict three-field decode with no blank fields.
pub fn parse_model_payload(raw: &str) -> Result<InsightPayload, InsightError> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let payload: InsightPayload = serde_json::from_str(cleaned)
        .map_err(|e| InsightError::MalformedResponse(e.to_string()))?;

    if !payload.is_complete() {
        return Err(InsightError::MalformedResponse(
            "one or more fields are empty".to_string(),
        ));
    }

    Ok(payload)
}
