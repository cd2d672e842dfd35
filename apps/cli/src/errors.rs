use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type for the sourcing pipeline.
///
/// Variants map one-to-one onto the failure taxonomy: document input,
/// schema coercion of generated text, search transport, browsing session
/// auth, and per-profile availability. Partial section extraction is NOT
/// an error — the fetcher returns degraded data and logs a warning.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input file missing, unreadable, or (for PDFs) not text-extractable.
    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    /// An LLM response could not be coerced to the expected schema.
    /// Never retried — there is no self-correction loop.
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// Search engine request failed or was blocked. Aborts the run;
    /// there is no partial-result fallback.
    #[error("Search unavailable: {0}")]
    SearchUnavailable(String),

    /// Browsing session login failed.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A profile page returned not-found or is restricted.
    #[error("Profile unavailable: {0}")]
    ProfileUnavailable(String),

    /// LLM transport failure (after the client's own bounded retries).
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Classifies an LLM client failure for a named pipeline stage: parse
    /// failures are schema violations, everything else is transport.
    pub fn from_llm(stage: &str, e: LlmError) -> Self {
        match e {
            LlmError::Parse(e) => AppError::SchemaValidation(format!("{stage}: {e}")),
            LlmError::EmptyContent => {
                AppError::SchemaValidation(format!("{stage}: empty response"))
            }
            other => AppError::Llm(format!("{stage}: {other}")),
        }
    }
}
