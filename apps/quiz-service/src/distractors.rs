//! External distractor source for open multiple-choice questions.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use verse_quiz_core::quiz::distractor::DISTRACTOR_COUNT;

#[derive(Debug, Error)]
pub enum DistractorError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// What a distractor source is asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistractorRequest {
    /// A few words leading to the blank, then the blank.
    pub context: String,
    pub correct_answer: String,
    pub book: String,
    pub language: String,
}

/// Suggests plausible wrong words for a blank, e.g. a language model.
#[async_trait]
pub trait DistractorSource: Send + Sync {
    /// Returns the name of this source, for logs.
    fn name(&self) -> &str;

    /// Suggest wrong words for the blank. May return any number of words;
    /// the caller dedupes and tops them up.
    async fn suggest(&self, request: &DistractorRequest) -> Result<Vec<String>, DistractorError>;
}

/// Source that never suggests anything, so the local word list is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOnly;

#[async_trait]
impl DistractorSource for LocalOnly {
    fn name(&self) -> &str {
        "local"
    }

    async fn suggest(&self, _request: &DistractorRequest) -> Result<Vec<String>, DistractorError> {
        Ok(Vec::new())
    }
}

/// Ask `source` within `timeout`. Errors and timeouts yield no suggestion.
pub async fn suggest_within(
    source: &dyn DistractorSource,
    request: &DistractorRequest,
    timeout: Duration,
) -> Vec<String> {
    match tokio::time::timeout(timeout, source.suggest(request)).await {
        Ok(Ok(words)) => {
            if words.len() < DISTRACTOR_COUNT {
                tracing::debug!(
                    source = source.name(),
                    received = words.len(),
                    "Distractor source returned too few words, topping up locally"
                );
            }
            words
        }
        Ok(Err(e)) => {
            tracing::warn!(source = source.name(), error = %e, "Distractor source failed, using local words");
            Vec::new()
        }
        Err(_) => {
            tracing::warn!(
                source = source.name(),
                timeout_ms = timeout.as_millis() as u64,
                "Distractor source timed out, using local words"
            );
            Vec::new()
        }
    }
}
