//! Request and response models of the quiz service.

use serde::{Deserialize, Deserializer, Serialize};
use verse_quiz_core::{BookGroup, Difficulty, PassageEntry, QuestionSource};

use crate::error::{Result, ServiceError};

/// Rounds per batch when the caller does not say.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Upper bound on rounds per batch.
pub const MAX_BATCH_SIZE: usize = 50;

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn easy() -> Difficulty {
    Difficulty::Easy
}

/// Level name in English or French. Missing, null or unknown names give `fallback`.
fn level_or<'de, D: Deserializer<'de>>(deserializer: D, fallback: Difficulty) -> std::result::Result<Difficulty, D::Error> {
    let level = Option::<String>::deserialize(deserializer)?;
    Ok(level.as_deref().and_then(Difficulty::from_level).unwrap_or(fallback))
}

fn level_or_easy<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Difficulty, D::Error> {
    level_or(deserializer, Difficulty::Easy)
}

fn level_or_medium<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Difficulty, D::Error> {
    level_or(deserializer, Difficulty::Medium)
}

/// Cloze request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClozeRequest {
    pub reference: String,
    /// Two blanks unless told otherwise.
    #[serde(default = "easy", deserialize_with = "level_or_easy")]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub language: Option<String>,
}

/// Multiple-choice request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleChoiceRequest {
    pub reference: String,
    #[serde(default, deserialize_with = "level_or_medium")]
    pub difficulty: Difficulty,
    /// Answers already given in this session.
    #[serde(default)]
    pub used_words: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Scramble request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrambleRequest {
    pub reference: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Typed answers to check, paired by position with the expected ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub answers: Vec<String>,
    pub expected: Vec<String>,
    /// Defaults to the configured tolerance.
    #[serde(default)]
    pub tolerance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// One entry per expected answer.
    pub results: Vec<bool>,
    pub correct_count: usize,
    pub all_correct: bool,
}

/// Passage or single verse lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    pub reference: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageResponse {
    pub reference: String,
    pub verses: Vec<PassageEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseTextResponse {
    pub reference: String,
    pub text: String,
    /// Display name of the book's group, when the book is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// "Where is this verse?" request. At most one of `book`, `group` and
/// `references` may be set; none means the whole corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceQuestionRequest {
    #[serde(default)]
    pub book: Option<String>,
    #[serde(default)]
    pub group: Option<BookGroup>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default, deserialize_with = "level_or_medium")]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub language: Option<String>,
}

impl ReferenceQuestionRequest {
    pub fn source(&self) -> Result<QuestionSource> {
        let book = self.book.as_deref().map(str::trim).filter(|b| !b.is_empty());
        match (book, self.group, self.references.is_empty()) {
            (None, None, true) => Ok(QuestionSource::Corpus),
            (Some(book), None, true) => Ok(QuestionSource::Book(book.to_string())),
            (None, Some(group), true) => Ok(QuestionSource::Group(group)),
            (None, None, false) => Ok(QuestionSource::References(self.references.clone())),
            _ => Err(ServiceError::BadRequest(
                "give at most one of book, group and references".to_string(),
            )),
        }
    }
}

/// Multiple-choice question on a random verse, optionally narrowed to a
/// book or a chapter of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenChoiceRequest {
    #[serde(default)]
    pub book: Option<String>,
    #[serde(default)]
    pub chapter: Option<u32>,
    #[serde(default)]
    pub used_words: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Several games on the same reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub reference: String,
    #[serde(default, deserialize_with = "level_or_medium")]
    pub difficulty: Difficulty,
    #[serde(default = "default_batch_size")]
    pub count: usize,
    /// Only read by multiple-choice batches.
    #[serde(default)]
    pub used_words: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl BatchRequest {
    pub fn validated_count(&self) -> Result<usize> {
        match self.count {
            0 => Err(ServiceError::BadRequest("count must be at least 1".to_string())),
            n if n > MAX_BATCH_SIZE => Err(ServiceError::BadRequest(format!(
                "count must be at most {MAX_BATCH_SIZE}, got {n}"
            ))),
            n => Ok(n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse<T> {
    pub requested: usize,
    pub games: Vec<T>,
}
