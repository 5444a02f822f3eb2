/// Gemini model client
///
/// Implements the InsightModel capability against Google's generateContent
/// endpoint. Construction is explicit: callers (or `from_env`) decide
/// whether a client exists at all, and the resolver treats "no client" as
/// its NoKey state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::insight::{InsightError, InsightModel};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used when GEMINI_MODEL is not set
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Env var holding the API key; absent means the coach runs in fallback mode
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Env var overriding the model name
pub const MODEL_ENV: &str = "GEMINI_MODEL";

// Transport-level bounds; the resolver applies its own overall timeout too
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the Gemini generateContent API
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a client for the given API key and model name
    pub fn new(api_key: String, model: String) -> Result<Self, InsightError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| InsightError::Provider(e.to_string()))?;

        Ok(Self {
            api_key,
            model,
            http,
        })
    }

    /// Build a client from GEMINI_API_KEY / GEMINI_MODEL
    ///
    /// Returns `None` when no key is configured, which the coach treats as
    /// "skip the model, use the fallback".
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())?;
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        match Self::new(api_key, model) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!("Could not build Gemini client: {}", err);
                None
            }
        }
    }

    /// The model name this client calls
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl InsightModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!("Requesting insight from model {}", self.model);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InsightError::Provider(format!(
                "HTTP {}: {}",
                status,
                truncate_detail(&detail)
            )));
        }

        let decoded: GenerateResponse = response.json().await.map_err(classify)?;

        decoded
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                InsightError::MalformedResponse("response carried no candidate text".to_string())
            })
    }
}

fn classify(err: reqwest::Error) -> InsightError {
    if err.is_timeout() {
        InsightError::Timeout(REQUEST_TIMEOUT)
    } else {
        InsightError::Provider(err.to_string())
    }
}

/// Keep provider error bodies short enough to log
fn truncate_detail(detail: &str) -> String {
    detail.chars().take(200).collect()
}
