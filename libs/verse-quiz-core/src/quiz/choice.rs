//! Multiple-choice game: find the missing word among four options.

use super::distractor::{fill_with_fallback, DistractorSampler, DISTRACTOR_COUNT};
use super::{select_working_set, BLANK};
use crate::error::GenerationError;
use crate::normalize::{eligible_words, is_long_token, normalize, strip_punctuation};
use crate::types::{Difficulty, MultipleChoicePayload, VerseRecord};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::BTreeSet;

/// Verses drawn before an open question gives up.
pub const OPEN_CHOICE_ATTEMPTS: usize = 50;

/// Shortest verse, in words, used for an open question.
pub const MIN_OPEN_CHOICE_WORDS: usize = 5;

/// Ask for one word of a verse of the passage.
///
/// Words in `used_words` are skipped until every eligible word of the verse
/// has been used, then the cycle starts over.
pub fn generate_multiple_choice<S: AsRef<str>, R: Rng + ?Sized>(
    verses: &[&VerseRecord],
    difficulty: Difficulty,
    used_words: &[S],
    sampler: &DistractorSampler<'_>,
    rng: &mut R,
) -> Result<MultipleChoicePayload, GenerationError> {
    let passage = select_working_set(verses, rng);
    let verse = *passage.choose(rng).ok_or(GenerationError::NoVerseFound)?;

    let used = normalized_set(used_words);
    let eligible = eligible_words(&verse.text);
    let unused: Vec<&String> = eligible.iter().filter(|w| !used.contains(*w)).collect();
    let cycle_restarted = unused.is_empty();
    let candidates: Vec<&String> = if cycle_restarted {
        eligible.iter().collect()
    } else {
        unused
    };

    let correct = (*candidates.choose(rng).ok_or(GenerationError::NoEligibleWords)?).clone();
    let answer_token = verse
        .text
        .split_whitespace()
        .find(|token| normalize(token) == correct)
        .unwrap_or(correct.as_str());

    let question = verse.text.replacen(answer_token, BLANK, 1);
    let distractors = sampler.sample(verse, &correct, difficulty, rng);
    let (options, correct_index) = assemble_options(distractors, correct.clone(), rng);

    Ok(MultipleChoicePayload {
        reference: verse.reference(),
        original_text: verse.text.clone(),
        question,
        options,
        correct_answer: correct,
        correct_index,
        cycle_restarted,
    })
}

/// Shuffle the distractors and slot the correct answer in at a random index.
fn assemble_options<R: Rng + ?Sized>(
    mut distractors: Vec<String>,
    correct: String,
    rng: &mut R,
) -> (Vec<String>, usize) {
    distractors.shuffle(rng);
    let correct_index = rng.random_range(0..=distractors.len());
    distractors.insert(correct_index, correct);
    (distractors, correct_index)
}

fn normalized_set<S: AsRef<str>>(words: &[S]) -> BTreeSet<String> {
    words.iter().map(|w| normalize(w.as_ref())).collect()
}

/// A verse and word picked for an open question, waiting for distractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenChoiceDraft<'a> {
    pub verse: &'a VerseRecord,
    /// Word index of the answer in the verse.
    pub position: usize,
    /// The answer as written in the verse.
    pub answer_token: String,
    /// The answer without punctuation.
    pub correct_answer: String,
    /// Up to three words leading to the blank, then the blank.
    pub context: String,
}

/// Pick a random verse of `pool` with at least [`MIN_OPEN_CHOICE_WORDS`]
/// words and a long word not in `used_words`.
pub fn draft_open_choice<'a, S: AsRef<str>, R: Rng + ?Sized>(
    pool: &[&'a VerseRecord],
    used_words: &[S],
    rng: &mut R,
) -> Result<OpenChoiceDraft<'a>, GenerationError> {
    if pool.is_empty() {
        return Err(GenerationError::NoVerseFound);
    }
    let used = normalized_set(used_words);

    for _ in 0..OPEN_CHOICE_ATTEMPTS {
        let Some(&verse) = pool.choose(rng) else { break };
        let words: Vec<&str> = verse.text.split_whitespace().collect();
        if words.len() < MIN_OPEN_CHOICE_WORDS {
            continue;
        }

        let candidates: Vec<usize> = words
            .iter()
            .enumerate()
            .filter(|(_, w)| is_long_token(w) && !used.contains(&normalize(w)))
            .map(|(i, _)| i)
            .collect();
        let Some(&position) = candidates.choose(rng) else { continue };

        let mut context: Vec<&str> = words[position.saturating_sub(3)..position].to_vec();
        context.push(BLANK);

        return Ok(OpenChoiceDraft {
            verse,
            position,
            answer_token: words[position].to_string(),
            correct_answer: strip_punctuation(words[position]),
            context: context.join(" "),
        });
    }

    Err(GenerationError::Exhausted {
        attempts: OPEN_CHOICE_ATTEMPTS,
    })
}

impl OpenChoiceDraft<'_> {
    /// Build the question from externally suggested distractors. Blank,
    /// repeated or correct suggestions are dropped and the remainder is
    /// filled from the fallback list of `language`.
    pub fn complete<R: Rng + ?Sized>(
        self,
        suggestions: Vec<String>,
        language: &str,
        rng: &mut R,
    ) -> MultipleChoicePayload {
        let correct_key = normalize(&self.correct_answer);
        let mut seen = BTreeSet::new();
        let mut distractors: Vec<String> = suggestions
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| {
                let key = normalize(s);
                !key.is_empty() && key != correct_key && seen.insert(key)
            })
            .take(DISTRACTOR_COUNT)
            .collect();
        fill_with_fallback(&mut distractors, &self.correct_answer, language, rng);

        let question = self.verse.text.replacen(&self.answer_token, BLANK, 1);
        let (options, correct_index) = assemble_options(distractors, self.correct_answer.clone(), rng);

        MultipleChoicePayload {
            reference: self.verse.reference(),
            original_text: self.verse.text.clone(),
            question,
            options,
            correct_answer: self.correct_answer,
            correct_index,
            cycle_restarted: false,
        }
    }
}
