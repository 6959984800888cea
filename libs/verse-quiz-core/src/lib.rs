//! Core verse-quiz library shared by the quiz service and its tests.
//!
//! Provides:
//! - Scripture reference parsing and resolution against a verse corpus
//! - Language-tagged corpus with per-chapter lookup
//! - Text normalization for answer comparison
//! - Quiz generators (cloze, multiple choice, scramble, locate the verse)
//! - Fuzzy answer verification (Levenshtein distance)

pub mod books;
pub mod corpus;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod quiz;
pub mod reference;
pub mod resolver;
pub mod types;

pub use books::{category_of, BookGroup};
pub use corpus::{Corpus, CorpusSource, LanguageCorpus};
pub use error::{GenerationError, ParseError, Result};
pub use matching::{compare_answer, levenshtein_distance, normalized_similarity, verify_answer, verify_answers, MatchResult, DEFAULT_TOLERANCE};
pub use normalize::{eligible_words, normalize, strip_punctuation};
pub use quiz::{
    choice_batch, cloze_batch, draft_open_choice, generate_cloze, generate_multiple_choice,
    generate_reference_question, generate_scramble, scramble_batch, DistractorSampler,
    OpenChoiceDraft, QuestionSource, SamplerPolicy,
};
pub use reference::{exact_reference, format_reference, parse_reference};
pub use resolver::{find_verse, passage, resolve_reference, resolve_verses};
pub use types::{
    ClozePayload, Difficulty, Granularity, MultipleChoicePayload, PassageEntry, QuizPayload,
    ReferenceQuizPayload, ScramblePayload, VerseRange, VerseRecord, VerseSelection,
};
