//! Error types for verse-quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a scripture reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty reference")]
    Empty,

    #[error("missing book name in {reference:?}")]
    MissingBook { reference: String },

    #[error("missing chapter number in {reference:?}")]
    MissingChapter { reference: String },

    #[error("invalid number {value:?} in {reference:?}")]
    InvalidNumber { reference: String, value: String },

    #[error("chapter and verse numbers start at 1 in {reference:?}")]
    ZeroNumber { reference: String },

    #[error("verse range {start}-{end} is reversed in {reference:?}")]
    ReversedRange {
        reference: String,
        start: u32,
        end: u32,
    },
}

/// Errors returned by the quiz generators when the verses at hand cannot
/// produce the requested game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no verse found")]
    NoVerseFound,

    #[error("passage has no word long enough to blank out")]
    NoEligiblePositions,

    #[error("passage has no word available for a question")]
    NoEligibleWords,

    #[error("verse too short to scramble: {found} words, need {min}")]
    TooShort { min: usize, found: usize },

    #[error("question source is empty")]
    EmptySource,

    #[error("no usable verse found after {attempts} attempts")]
    Exhausted { attempts: usize },

    #[error("could not generate any of the {requested} requested games")]
    EmptyBatch { requested: usize },
}
