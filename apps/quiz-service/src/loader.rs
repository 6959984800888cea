//! JSON corpus files.
//!
//! Two layouts are accepted:
//!
//! ```json
//! {"verses": [{"book_name": "Jean", "chapter": 3, "verse": 16, "text": "..."}]}
//! {"books": [{"name": "John", "chapters": [{"chapter": 3, "verses": [{"verse": 16, "text": "..."}]}]}]}
//! ```
//!
//! Chapter and verse numbers may be integers or numeric strings. Records
//! with a missing book, a non-positive number or an empty text are skipped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use verse_quiz_core::{CorpusSource, VerseRecord};

use crate::config::Config;
use crate::error::{Result, ServiceError};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Flat { verses: Vec<FlatVerse> },
    Nested { books: Vec<NestedBook> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Number {
    Int(i64),
    Text(String),
}

impl Number {
    fn value(&self) -> Option<u32> {
        let n = match self {
            Number::Int(n) => *n,
            Number::Text(s) => s.trim().parse().ok()?,
        };
        u32::try_from(n).ok().filter(|n| *n > 0)
    }
}

#[derive(Debug, Deserialize)]
struct FlatVerse {
    #[serde(default)]
    book_name: String,
    chapter: Number,
    verse: Number,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct NestedBook {
    name: String,
    #[serde(default)]
    chapters: Vec<NestedChapter>,
}

#[derive(Debug, Deserialize)]
struct NestedChapter {
    chapter: Number,
    #[serde(default)]
    verses: Vec<NestedVerse>,
}

#[derive(Debug, Deserialize)]
struct NestedVerse {
    verse: Number,
    #[serde(default)]
    text: String,
}

fn record(book: &str, chapter: &Number, verse: &Number, text: &str) -> Option<VerseRecord> {
    let book = book.trim();
    let text = text.trim();
    if book.is_empty() || text.is_empty() {
        return None;
    }
    Some(VerseRecord::new(book, chapter.value()?, verse.value()?, text))
}

/// Parse a corpus file body into verse records, in file order.
pub fn parse_corpus(json: &str) -> std::result::Result<Vec<VerseRecord>, serde_json::Error> {
    let file: CorpusFile = serde_json::from_str(json)?;
    let total;
    let records: Vec<VerseRecord> = match file {
        CorpusFile::Flat { verses } => {
            total = verses.len();
            verses
                .iter()
                .filter_map(|v| record(&v.book_name, &v.chapter, &v.verse, &v.text))
                .collect()
        }
        CorpusFile::Nested { books } => {
            let mut records = Vec::new();
            let mut count = 0;
            for book in &books {
                for chapter in &book.chapters {
                    for verse in &chapter.verses {
                        count += 1;
                        records.extend(record(&book.name, &chapter.chapter, &verse.verse, &verse.text));
                    }
                }
            }
            total = count;
            records
        }
    };

    let skipped = total - records.len();
    if skipped > 0 {
        tracing::warn!(skipped, "Skipped malformed verse records");
    }
    Ok(records)
}

/// Reads one JSON file per language from a directory.
#[derive(Debug, Clone)]
pub struct JsonCorpusLoader {
    dir: PathBuf,
    files: HashMap<String, String>,
}

impl JsonCorpusLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, language: &str, file: impl Into<String>) -> Self {
        self.files.insert(language.trim().to_lowercase(), file.into());
        self
    }

    pub fn from_config(config: &Config) -> Self {
        config
            .corpus_files
            .iter()
            .fold(Self::new(&config.corpus_dir), |loader, (lang, file)| {
                loader.with_file(lang, file.clone())
            })
    }

    /// Path of the corpus file of `language`, if one is configured.
    pub fn path_for(&self, language: &str) -> Option<PathBuf> {
        self.files
            .get(&language.trim().to_lowercase())
            .map(|file| self.dir.join(file))
    }

    fn read(path: &Path) -> Vec<VerseRecord> {
        let body = match std::fs::read_to_string(path) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Corpus file unavailable, language left empty");
                return Vec::new();
            }
        };

        match parse_corpus(&body) {
            Ok(verses) => verses,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Corpus file is not valid, language left empty");
                Vec::new()
            }
        }
    }
}

impl CorpusSource for JsonCorpusLoader {
    type Error = ServiceError;

    /// A missing or unreadable file yields an empty language. Only a
    /// language without any configured file is an error.
    fn load_language(&self, language: &str) -> Result<Vec<VerseRecord>> {
        let path = self
            .path_for(language)
            .ok_or_else(|| ServiceError::Config(format!("no corpus file configured for language {language:?}")))?;
        Ok(Self::read(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_flat_layout() {
        let json = r#"{"verses": [
            {"book_name": "Jean", "chapter": 3, "verse": 16, "text": "Car Dieu a tant aimé le monde"},
            {"book_name": "Jean", "chapter": "3", "verse": "17", "text": "Dieu n'a point envoyé son Fils"}
        ]}"#;
        let verses = parse_corpus(json).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[1], VerseRecord::new("Jean", 3, 17, "Dieu n'a point envoyé son Fils"));
    }

    #[test]
    fn parses_nested_layout() {
        let json = r#"{"books": [{"name": "John", "chapters": [
            {"chapter": 11, "verses": [{"verse": 35, "text": "Jesus wept."}, {"verse": 36, "text": "Then said the Jews"}]}
        ]}]}"#;
        let verses = parse_corpus(json).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].reference(), "John 11:35");
        assert_eq!(verses[0].text, "Jesus wept.");
    }

    #[test]
    fn skips_bad_records() {
        let json = r#"{"verses": [
            {"book_name": "", "chapter": 1, "verse": 1, "text": "sans livre"},
            {"book_name": "Jean", "chapter": 0, "verse": 1, "text": "chapitre zero"},
            {"book_name": "Jean", "chapter": "un", "verse": 1, "text": "chapitre texte"},
            {"book_name": "Jean", "chapter": 1, "verse": 2, "text": "   "},
            {"book_name": "Jean", "chapter": 1, "verse": 1, "text": "Au commencement"}
        ]}"#;
        let verses = parse_corpus(json).unwrap();
        assert_eq!(verses, vec![VerseRecord::new("Jean", 1, 1, "Au commencement")]);
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(parse_corpus(r#"{"livres": []}"#).is_err());
        assert!(parse_corpus("not json").is_err());
    }

    #[test]
    fn unconfigured_language_is_an_error() {
        let loader = JsonCorpusLoader::new("/nonexistent").with_file("fr", "segond.json");
        assert_eq!(loader.path_for("FR"), Some(PathBuf::from("/nonexistent/segond.json")));
        assert!(matches!(loader.load_language("de"), Err(ServiceError::Config(_))));
        assert_eq!(loader.load_language("fr").unwrap(), Vec::new());
    }
}
