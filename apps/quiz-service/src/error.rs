//! Error handling for the quiz service

use serde::{Deserialize, Serialize};
use thiserror::Error;
use verse_quiz_core::{GenerationError, ParseError};

/// Service error types
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body handed to whatever transport sits in front of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ServiceError {
    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Parse(_) => "parse_error",
            ServiceError::Generation(GenerationError::NoVerseFound | GenerationError::EmptySource) => {
                "not_found"
            }
            ServiceError::Generation(_) => "generation_error",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::Config(_) => "config_error",
        }
    }

    /// Suggested HTTP status for the error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Parse(_) | ServiceError::BadRequest(_) => 400,
            ServiceError::NotFound(_)
            | ServiceError::Generation(GenerationError::NoVerseFound | GenerationError::EmptySource) => 404,
            ServiceError::Generation(_) => 422,
            ServiceError::Config(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(error: &ServiceError) -> Self {
        error.to_response()
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
