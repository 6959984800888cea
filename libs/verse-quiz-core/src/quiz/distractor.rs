//! Wrong options for multiple-choice questions.
//!
//! Distractors are drawn from other verses of the corpus, from a pool whose
//! width depends on the difficulty:
//!
//! | Difficulty | Pool |
//! |---|---|
//! | Easy | verses of other books |
//! | Medium | verses of the same book |
//! | Hard | verses of the same chapter |
//!
//! Whatever the pool cannot supply comes from a short fixed word list.

use crate::corpus::{Corpus, LanguageCorpus};
use crate::normalize::{eligible_words, normalize};
use crate::types::{Difficulty, VerseRecord};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Wrong options per question.
pub const DISTRACTOR_COUNT: usize = 3;

const FRENCH_FALLBACK: &[&str] = &["amour", "paix", "joie", "grace", "esperance", "lumiere", "verite"];
const ENGLISH_FALLBACK: &[&str] = &["love", "peace", "faith", "hope", "grace", "truth", "light", "life"];

/// Fixed distractors for a corpus language. French unless the tag is English.
pub fn fallback_words(language: &str) -> &'static [&'static str] {
    let primary = language.trim().split(['-', '_']).next().unwrap_or_default();
    if primary.eq_ignore_ascii_case("en") {
        ENGLISH_FALLBACK
    } else {
        FRENCH_FALLBACK
    }
}

/// Top `distractors` up to [`DISTRACTOR_COUNT`] from the fallback list,
/// skipping words equal to `correct` or already present once normalized.
pub fn fill_with_fallback<R: Rng + ?Sized>(
    distractors: &mut Vec<String>,
    correct: &str,
    language: &str,
    rng: &mut R,
) {
    let correct = normalize(correct);
    let taken: Vec<String> = distractors.iter().map(|d| normalize(d)).collect();
    let mut spare: Vec<&str> = fallback_words(language)
        .iter()
        .copied()
        .filter(|word| *word != correct && !taken.iter().any(|t| t == word))
        .collect();
    spare.shuffle(rng);

    while distractors.len() < DISTRACTOR_COUNT {
        match spare.pop() {
            Some(word) => distractors.push(word.to_string()),
            None => break,
        }
    }
}

/// How distractor pools are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerPolicy {
    /// Leave the question's own verse out of the pool.
    pub exclude_source_verse: bool,
}

impl Default for SamplerPolicy {
    fn default() -> Self {
        Self {
            exclude_source_verse: true,
        }
    }
}

/// Draws distractors from one language of the corpus.
#[derive(Debug, Clone, Copy)]
pub struct DistractorSampler<'a> {
    corpus: &'a LanguageCorpus,
    language: &'a str,
    policy: SamplerPolicy,
}

impl<'a> DistractorSampler<'a> {
    pub fn new(corpus: &'a Corpus, language: &'a str) -> Self {
        Self {
            corpus: corpus.language(language),
            language,
            policy: SamplerPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SamplerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn language(&self) -> &'a str {
        self.language
    }

    pub fn policy(&self) -> SamplerPolicy {
        self.policy
    }

    /// Candidate verses for a question taken from `source`.
    pub fn pool(&self, source: &VerseRecord, difficulty: Difficulty) -> Vec<&'a VerseRecord> {
        let candidates: Vec<&'a VerseRecord> = match difficulty {
            Difficulty::Easy => self
                .corpus
                .verses()
                .iter()
                .filter(|v| v.book_name != source.book_name)
                .collect(),
            Difficulty::Medium => self
                .corpus
                .verses()
                .iter()
                .filter(|v| v.book_name == source.book_name)
                .collect(),
            Difficulty::Hard => self
                .corpus
                .chapter(&source.book_name, source.chapter)
                .into_iter()
                .filter(|v| v.book_name == source.book_name)
                .collect(),
        };

        if self.policy.exclude_source_verse {
            candidates
                .into_iter()
                .filter(|v| !is_same_verse(v, source))
                .collect()
        } else {
            candidates
        }
    }

    /// Exactly [`DISTRACTOR_COUNT`] distinct normalized words, none equal to `correct`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        source: &VerseRecord,
        correct: &str,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Vec<String> {
        let correct = normalize(correct);
        let mut pool = self.pool(source, difficulty);
        pool.shuffle(rng);

        let mut chosen: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);
        while chosen.len() < DISTRACTOR_COUNT {
            let Some(verse) = pool.pop() else { break };
            let words: Vec<String> = eligible_words(&verse.text)
                .into_iter()
                .filter(|w| *w != correct && !chosen.contains(w))
                .collect();
            if let Some(word) = words.choose(rng) {
                chosen.push(word.clone());
            }
        }

        fill_with_fallback(&mut chosen, &correct, self.language, rng);
        chosen
    }
}

fn is_same_verse(a: &VerseRecord, b: &VerseRecord) -> bool {
    a.book_name == b.book_name && a.chapter == b.chapter && a.verse == b.verse
}
