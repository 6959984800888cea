//! Core types for the verse quiz engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::normalize::replace_words;

/// One verse of scripture as stored in a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl VerseRecord {
    pub fn new(book_name: impl Into<String>, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            book_name: book_name.into(),
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// Reference of this single verse, e.g. `Jean 3:16`.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book_name, self.chapter, self.verse)
    }

    /// Reference of the chapter holding this verse, e.g. `Jean 3`.
    pub fn chapter_reference(&self) -> String {
        format!("{} {}", self.book_name, self.chapter)
    }
}

/// Which verses of a chapter a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerseSelection {
    WholeChapter,
    Single { verse: u32 },
    Span { start: u32, end: u32 },
}

impl VerseSelection {
    /// Whether `verse` is part of the selection.
    pub fn contains(&self, verse: u32) -> bool {
        match *self {
            Self::WholeChapter => true,
            Self::Single { verse: v } => v == verse,
            Self::Span { start, end } => (start..=end).contains(&verse),
        }
    }

    /// Selected verse numbers, `None` for a whole chapter.
    pub fn verses(&self) -> Option<RangeInclusive<u32>> {
        match *self {
            Self::WholeChapter => None,
            Self::Single { verse } => Some(verse..=verse),
            Self::Span { start, end } => Some(start..=end),
        }
    }
}

/// A parsed reference: book as typed by the user, chapter and verse selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRange {
    pub book: String,
    pub chapter: u32,
    pub verses: VerseSelection,
}

impl fmt::Display for VerseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verses {
            VerseSelection::WholeChapter => write!(f, "{} {}", self.book, self.chapter),
            VerseSelection::Single { verse } => write!(f, "{} {}:{}", self.book, self.chapter, verse),
            VerseSelection::Span { start, end } => {
                write!(f, "{} {}:{}-{}", self.book, self.chapter, start, end)
            }
        }
    }
}

/// Game difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[serde(alias = "facile", alias = "débutant", alias = "debutant", alias = "beginner")]
    Easy,
    #[serde(alias = "moyen", alias = "intermédiaire", alias = "intermediaire", alias = "intermediate")]
    Medium,
    #[serde(alias = "difficile", alias = "expert")]
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse an English or French level name, ignoring case.
    pub fn from_level(level: &str) -> Option<Self> {
        match level.trim().to_lowercase().as_str() {
            "easy" | "facile" | "débutant" | "debutant" | "beginner" => Some(Self::Easy),
            "medium" | "moyen" | "intermédiaire" | "intermediaire" | "intermediate" => {
                Some(Self::Medium)
            }
            "hard" | "difficile" | "expert" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Number of words hidden by the cloze game at this level.
    pub fn hidden_words(self) -> usize {
        match self {
            Self::Easy => 2,
            Self::Medium => 4,
            Self::Hard => 6,
        }
    }
}

/// Fill-in-the-blank game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClozePayload {
    pub reference: String,
    pub original_text: String,
    pub blanked_text: String,
    /// Hidden words with punctuation stripped, the form answers are graded against.
    pub answers: Vec<String>,
    /// Word positions of the blanks, ascending.
    pub positions: Vec<usize>,
    /// Hidden words exactly as they appeared in the text.
    pub hidden_words: Vec<String>,
}

impl ClozePayload {
    /// Put `fills` back at the blank positions and return the resulting text.
    pub fn fill(&self, fills: &[String]) -> String {
        replace_words(&self.blanked_text, &self.positions, fills)
    }
}

/// Multiple-choice question on one missing word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoicePayload {
    pub reference: String,
    pub original_text: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub correct_index: usize,
    /// Every eligible word had already been used, so the cycle started over.
    #[serde(default)]
    pub cycle_restarted: bool,
}

/// Word-reordering game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScramblePayload {
    pub reference: String,
    pub original_text: String,
    pub shuffled_words: Vec<String>,
    pub correct_order: Vec<String>,
}

/// Any generated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum QuizPayload {
    Cloze(ClozePayload),
    MultipleChoice(MultipleChoicePayload),
    Scramble(ScramblePayload),
}

impl QuizPayload {
    pub fn reference(&self) -> &str {
        match self {
            Self::Cloze(p) => &p.reference,
            Self::MultipleChoice(p) => &p.reference,
            Self::Scramble(p) => &p.reference,
        }
    }

    pub fn original_text(&self) -> &str {
        match self {
            Self::Cloze(p) => &p.original_text,
            Self::MultipleChoice(p) => &p.original_text,
            Self::Scramble(p) => &p.original_text,
        }
    }
}

impl From<ClozePayload> for QuizPayload {
    fn from(payload: ClozePayload) -> Self {
        Self::Cloze(payload)
    }
}

impl From<MultipleChoicePayload> for QuizPayload {
    fn from(payload: MultipleChoicePayload) -> Self {
        Self::MultipleChoice(payload)
    }
}

impl From<ScramblePayload> for QuizPayload {
    fn from(payload: ScramblePayload) -> Self {
        Self::Scramble(payload)
    }
}

/// What the reference game asks the player to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Book,
    Chapter,
    Verse,
}

impl Granularity {
    /// Label of `verse` at this granularity.
    pub fn label(self, verse: &VerseRecord) -> String {
        match self {
            Self::Book => verse.book_name.clone(),
            Self::Chapter => verse.chapter_reference(),
            Self::Verse => verse.reference(),
        }
    }
}

/// "Where does this verse come from?" question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceQuizPayload {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub granularity: Granularity,
}

/// One verse of a displayed passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageEntry {
    pub reference: String,
    pub text: String,
}

impl From<&VerseRecord> for PassageEntry {
    fn from(verse: &VerseRecord) -> Self {
        Self {
            reference: verse.reference(),
            text: verse.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_contains() {
        assert!(VerseSelection::WholeChapter.contains(42));
        assert!(VerseSelection::Single { verse: 16 }.contains(16));
        assert!(!VerseSelection::Single { verse: 16 }.contains(17));
        let span = VerseSelection::Span { start: 3, end: 5 };
        assert!(span.contains(3) && span.contains(5));
        assert!(!span.contains(6));
    }

    #[test]
    fn range_display() {
        let range = VerseRange {
            book: "1 Samuel".to_string(),
            chapter: 3,
            verses: VerseSelection::Span { start: 1, end: 4 },
        };
        assert_eq!(range.to_string(), "1 Samuel 3:1-4");
    }

    #[test]
    fn difficulty_levels() {
        assert_eq!(Difficulty::from_level("Facile"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_level("intermédiaire"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_level(" EXPERT "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_level("legendary"), None);
        assert_eq!(Difficulty::Hard.hidden_words(), 6);
    }

    #[test]
    fn difficulty_deserializes_french_alias() {
        let level: Difficulty = serde_json::from_str("\"difficile\"").unwrap();
        assert_eq!(level, Difficulty::Hard);
    }

    #[test]
    fn payload_tagged_by_game() {
        let payload = QuizPayload::from(ScramblePayload {
            reference: "Jean 3:16".to_string(),
            original_text: "a b".to_string(),
            shuffled_words: vec!["b".to_string(), "a".to_string()],
            correct_order: vec!["a".to_string(), "b".to_string()],
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["game"], "scramble");
        assert_eq!(payload.reference(), "Jean 3:16");
    }
}
