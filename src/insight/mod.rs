/// AI coaching insights
///
/// This module turns habit metrics into a three-field coaching payload. The
/// language model is an optional, passed-in capability behind the
/// InsightModel trait; when it is absent, slow, or returns something
/// unusable, the resolver substitutes a deterministic fallback so callers
/// always receive a well-formed payload.

pub mod gemini;
pub mod payload;
pub mod prompt;
pub mod resolver;

// Re-export public types for easy access
pub use gemini::*;
pub use payload::*;
pub use prompt::*;
pub use resolver::*;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Bound on one model call unless the caller overrides it
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(20);

/// Errors that can occur while resolving an insight
///
/// None of these reach the caller of `request_insight`; every variant is
/// recovered by falling back to the deterministic payload.
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("No model credential configured")]
    NoCredential,

    #[error("Model provider request failed: {0}")]
    Provider(String),

    #[error("Model call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Model response did not match the expected shape: {0}")]
    MalformedResponse(String),
}

/// External model capability: one prompt in, free text out
///
/// The single seam between the engine and the language-model provider.
/// Production uses `GeminiClient`; tests substitute scripted doubles.
#[async_trait]
pub trait InsightModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError>;
}
