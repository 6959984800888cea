//! Language-tagged verse corpus.
//!
//! Built once at startup, then shared read-only (typically behind an `Arc`).
//! Lookups against an unknown language yield empty results, never errors.

use crate::types::VerseRecord;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Supplies the verses of one language. Implemented by whatever reads the
/// corpus files; the engine never does I/O itself.
pub trait CorpusSource {
    type Error;

    fn load_language(&self, language: &str) -> Result<Vec<VerseRecord>, Self::Error>;
}

/// Case-folded, trimmed book name used as lookup key.
pub fn book_key(book: &str) -> String {
    book.trim().to_lowercase()
}

/// Verses of a single language plus a `(book, chapter)` index.
#[derive(Debug, Clone, Default)]
pub struct LanguageCorpus {
    verses: Vec<VerseRecord>,
    chapters: BTreeMap<(String, u32), Vec<usize>>,
    books: Vec<String>,
    duplicates: usize,
}

impl LanguageCorpus {
    /// Index `verses`, keeping source order. A repeated
    /// `(book, chapter, verse)` keeps its first occurrence.
    pub fn new(verses: Vec<VerseRecord>) -> Self {
        let mut kept = Vec::with_capacity(verses.len());
        let mut chapters: BTreeMap<(String, u32), Vec<usize>> = BTreeMap::new();
        let mut seen = HashSet::new();
        let mut books = Vec::new();
        let mut known_books = HashSet::new();
        let mut duplicates = 0;

        for verse in verses {
            let key = book_key(&verse.book_name);
            if !seen.insert((key.clone(), verse.chapter, verse.verse)) {
                duplicates += 1;
                continue;
            }
            if known_books.insert(verse.book_name.clone()) {
                books.push(verse.book_name.clone());
            }
            chapters
                .entry((key, verse.chapter))
                .or_default()
                .push(kept.len());
            kept.push(verse);
        }

        Self {
            verses: kept,
            chapters,
            books,
            duplicates,
        }
    }

    pub fn verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    /// Verses of one chapter in corpus order. `book` is matched case-insensitively.
    pub fn chapter(&self, book: &str, chapter: u32) -> Vec<&VerseRecord> {
        self.chapters
            .get(&(book_key(book), chapter))
            .map(|positions| positions.iter().map(|&i| &self.verses[i]).collect())
            .unwrap_or_default()
    }

    /// Distinct book names in first-seen order.
    pub fn books(&self) -> &[String] {
        &self.books
    }

    /// Records dropped because their key was already present.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// All languages of the corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    languages: HashMap<String, LanguageCorpus>,
}

static EMPTY: LanguageCorpus = LanguageCorpus {
    verses: Vec::new(),
    chapters: BTreeMap::new(),
    books: Vec::new(),
    duplicates: 0,
};

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one language.
    pub fn with_language(mut self, language: &str, verses: Vec<VerseRecord>) -> Self {
        self.insert(language, verses);
        self
    }

    /// Add or replace one language, returning its indexed form.
    pub fn insert(&mut self, language: &str, verses: Vec<VerseRecord>) -> &LanguageCorpus {
        let tag = language.trim().to_lowercase();
        self.languages.insert(tag.clone(), LanguageCorpus::new(verses));
        &self.languages[&tag]
    }

    /// Load every language in `languages` from `source`, stopping at the first failure.
    pub fn load<S: CorpusSource>(source: &S, languages: &[&str]) -> Result<Self, S::Error> {
        let mut corpus = Self::new();
        for language in languages {
            let verses = source.load_language(language)?;
            corpus.insert(language, verses);
        }
        Ok(corpus)
    }

    /// The corpus of `language`, empty when the tag is unknown.
    pub fn language(&self, language: &str) -> &LanguageCorpus {
        self.languages
            .get(&language.trim().to_lowercase())
            .unwrap_or(&EMPTY)
    }

    pub fn verses(&self, language: &str) -> &[VerseRecord] {
        self.language(language).verses()
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(&language.trim().to_lowercase())
    }

    /// Loaded language tags, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}
