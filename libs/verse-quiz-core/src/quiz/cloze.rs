//! Fill-in-the-blank game.

use super::{combined_text, select_working_set, BLANK};
use crate::error::GenerationError;
use crate::normalize::{is_long_token, replace_words, strip_punctuation, word_spans};
use crate::reference::exact_reference;
use crate::types::{ClozePayload, Difficulty, VerseRecord};
use rand::seq::SliceRandom;
use rand::Rng;

/// Hide some of the longer words of the passage.
///
/// The number of blanks follows the difficulty and never exceeds half the
/// words. Blanks are listed in reading order.
pub fn generate_cloze<R: Rng + ?Sized>(
    verses: &[&VerseRecord],
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<ClozePayload, GenerationError> {
    let passage = select_working_set(verses, rng);
    let reference = exact_reference(&passage).ok_or(GenerationError::NoVerseFound)?;
    let original_text = combined_text(&passage);

    let words: Vec<&str> = word_spans(&original_text)
        .into_iter()
        .map(|span| &original_text[span])
        .collect();
    let target = difficulty.hidden_words().min(words.len() / 2);

    let mut candidates: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| is_long_token(word))
        .map(|(i, _)| i)
        .collect();
    if candidates.is_empty() {
        return Err(GenerationError::NoEligiblePositions);
    }

    candidates.shuffle(rng);
    let mut positions: Vec<usize> = candidates.into_iter().take(target).collect();
    positions.sort_unstable();

    let hidden_words: Vec<String> = positions.iter().map(|&i| words[i].to_string()).collect();
    let answers = hidden_words.iter().map(|w| strip_punctuation(w)).collect();
    let blanked_text = replace_words(&original_text, &positions, vec![BLANK; positions.len()].as_slice());

    Ok(ClozePayload {
        reference,
        original_text,
        blanked_text,
        answers,
        positions,
        hidden_words,
    })
}
