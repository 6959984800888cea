//! Service configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `QUIZ_CORPUS_DIR` | `.` |
//! | `QUIZ_CORPUS_FILES` | `fr=segond_1910.json,en=kjv.json` |
//! | `QUIZ_DEFAULT_LANGUAGE` | `fr` |
//! | `QUIZ_FUZZY_TOLERANCE` | `0.85` |
//! | `QUIZ_DISTRACTOR_TIMEOUT_MS` | `10000` |
//! | `QUIZ_EXCLUDE_SOURCE_VERSE` | `true` |

use std::path::PathBuf;
use std::time::Duration;

use verse_quiz_core::{SamplerPolicy, DEFAULT_TOLERANCE};

use crate::error::{Result, ServiceError};

const DEFAULT_CORPUS_FILES: &str = "fr=segond_1910.json,en=kjv.json";
const DEFAULT_LANGUAGE: &str = "fr";
const DEFAULT_DISTRACTOR_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub corpus_dir: PathBuf,
    /// `(language, file name)` pairs, file names relative to `corpus_dir`.
    pub corpus_files: Vec<(String, String)>,
    pub default_language: String,
    pub fuzzy_tolerance: f64,
    pub distractor_timeout: Duration,
    pub exclude_source_verse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("."),
            corpus_files: vec![
                ("fr".to_string(), "segond_1910.json".to_string()),
                ("en".to_string(), "kjv.json".to_string()),
            ],
            default_language: DEFAULT_LANGUAGE.to_string(),
            fuzzy_tolerance: DEFAULT_TOLERANCE,
            distractor_timeout: Duration::from_millis(DEFAULT_DISTRACTOR_TIMEOUT_MS),
            exclude_source_verse: true,
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    /// for absent keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let corpus_dir = lookup("QUIZ_CORPUS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let corpus_files = parse_corpus_files(
            &lookup("QUIZ_CORPUS_FILES").unwrap_or_else(|| DEFAULT_CORPUS_FILES.to_string()),
        )?;

        let default_language = lookup("QUIZ_DEFAULT_LANGUAGE")
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let fuzzy_tolerance = match lookup("QUIZ_FUZZY_TOLERANCE") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|t| (0.0..=1.0).contains(t))
                .ok_or_else(|| {
                    ServiceError::Config(format!("QUIZ_FUZZY_TOLERANCE must be between 0 and 1, got {raw:?}"))
                })?,
            None => DEFAULT_TOLERANCE,
        };

        let timeout_ms = match lookup("QUIZ_DISTRACTOR_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ServiceError::Config(format!("QUIZ_DISTRACTOR_TIMEOUT_MS must be a number of milliseconds, got {raw:?}"))
            })?,
            None => DEFAULT_DISTRACTOR_TIMEOUT_MS,
        };

        let exclude_source_verse = match lookup("QUIZ_EXCLUDE_SOURCE_VERSE") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ServiceError::Config(format!("QUIZ_EXCLUDE_SOURCE_VERSE must be true or false, got {raw:?}"))
            })?,
            None => true,
        };

        Ok(Self {
            corpus_dir,
            corpus_files,
            default_language,
            fuzzy_tolerance,
            distractor_timeout: Duration::from_millis(timeout_ms),
            exclude_source_verse,
        })
    }

    /// Languages with a configured corpus file.
    pub fn languages(&self) -> Vec<&str> {
        self.corpus_files.iter().map(|(lang, _)| lang.as_str()).collect()
    }

    pub fn settings(&self) -> QuizSettings {
        QuizSettings {
            default_language: self.default_language.clone(),
            fuzzy_tolerance: self.fuzzy_tolerance,
            distractor_timeout: self.distractor_timeout,
            sampler_policy: SamplerPolicy {
                exclude_source_verse: self.exclude_source_verse,
            },
        }
    }
}

/// Runtime knobs of the quiz service.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSettings {
    pub default_language: String,
    pub fuzzy_tolerance: f64,
    pub distractor_timeout: Duration,
    pub sampler_policy: SamplerPolicy,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Config::default().settings()
    }
}

fn parse_corpus_files(raw: &str) -> Result<Vec<(String, String)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (lang, file) = entry
                .split_once('=')
                .map(|(l, f)| (l.trim().to_lowercase(), f.trim().to_string()))
                .filter(|(l, f)| !l.is_empty() && !f.is_empty())
                .ok_or_else(|| {
                    ServiceError::Config(format!("QUIZ_CORPUS_FILES entry {entry:?} is not language=file"))
                })?;
            Ok((lang, file))
        })
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
