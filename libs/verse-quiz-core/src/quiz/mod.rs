//! Quiz generators.
//!
//! Every generator takes the verses resolved for a reference and an injected
//! random source, so seeded runs are reproducible.
//!
//! Resolved passages longer than [`MAX_PASSAGE_VERSES`] are narrowed to one
//! random verse. A chapter-only reference therefore yields a single-verse
//! game whose reference names that verse, not the chapter.

pub mod batch;
pub mod choice;
pub mod cloze;
pub mod distractor;
pub mod locate;
pub mod scramble;

use crate::types::VerseRecord;
use rand::seq::IndexedRandom;
use rand::Rng;

pub use batch::{choice_batch, cloze_batch, scramble_batch};
pub use choice::{draft_open_choice, generate_multiple_choice, OpenChoiceDraft};
pub use cloze::generate_cloze;
pub use distractor::{fallback_words, DistractorSampler, SamplerPolicy};
pub use locate::{generate_reference_question, QuestionSource};
pub use scramble::generate_scramble;

/// Marker replacing a hidden word.
pub const BLANK: &str = "_____";

/// Passages up to this many verses are played as a whole.
pub const MAX_PASSAGE_VERSES: usize = 3;

/// The verses a game is built from: all of them for a short passage, one
/// random verse otherwise.
pub fn select_working_set<'a, R: Rng + ?Sized>(
    verses: &[&'a VerseRecord],
    rng: &mut R,
) -> Vec<&'a VerseRecord> {
    if verses.len() > MAX_PASSAGE_VERSES {
        verses.choose(rng).into_iter().copied().collect()
    } else {
        verses.to_vec()
    }
}

/// Verse texts joined by a single space, in order.
pub fn combined_text(verses: &[&VerseRecord]) -> String {
    verses
        .iter()
        .map(|v| v.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
