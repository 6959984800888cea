//! Several rounds of one game over the same passage.
//!
//! Rounds that fail are skipped. A batch only fails when no round succeeds.

use super::choice::generate_multiple_choice;
use super::cloze::generate_cloze;
use super::distractor::DistractorSampler;
use super::scramble::generate_scramble;
use crate::error::GenerationError;
use crate::types::{ClozePayload, Difficulty, MultipleChoicePayload, ScramblePayload, VerseRecord};
use rand::Rng;

fn collect_rounds<T>(
    verses: &[&VerseRecord],
    count: usize,
    mut round: impl FnMut() -> Result<T, GenerationError>,
) -> Result<Vec<T>, GenerationError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if verses.is_empty() {
        return Err(GenerationError::NoVerseFound);
    }

    let games: Vec<T> = (0..count).filter_map(|_| round().ok()).collect();
    if games.is_empty() {
        Err(GenerationError::EmptyBatch { requested: count })
    } else {
        Ok(games)
    }
}

pub fn cloze_batch<R: Rng + ?Sized>(
    verses: &[&VerseRecord],
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
) -> Result<Vec<ClozePayload>, GenerationError> {
    collect_rounds(verses, count, || generate_cloze(verses, difficulty, rng))
}

pub fn scramble_batch<R: Rng + ?Sized>(
    verses: &[&VerseRecord],
    count: usize,
    rng: &mut R,
) -> Result<Vec<ScramblePayload>, GenerationError> {
    collect_rounds(verses, count, || generate_scramble(verses, rng))
}

/// Multiple-choice rounds. Each answer joins the used words so later
/// rounds ask for other words.
pub fn choice_batch<S: AsRef<str>, R: Rng + ?Sized>(
    verses: &[&VerseRecord],
    difficulty: Difficulty,
    used_words: &[S],
    count: usize,
    sampler: &DistractorSampler<'_>,
    rng: &mut R,
) -> Result<Vec<MultipleChoicePayload>, GenerationError> {
    let mut used: Vec<String> = used_words.iter().map(|w| w.as_ref().to_string()).collect();
    collect_rounds(verses, count, || {
        let question = generate_multiple_choice(verses, difficulty, used.as_slice(), sampler, rng)?;
        used.push(question.correct_answer.clone());
        Ok(question)
    })
}
