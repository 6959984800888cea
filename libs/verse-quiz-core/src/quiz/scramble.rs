//! Word-reordering game.

use super::select_working_set;
use crate::error::GenerationError;
use crate::types::{ScramblePayload, VerseRecord};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shortest verse, in words, worth scrambling.
pub const MIN_SCRAMBLE_WORDS: usize = 5;

/// Shuffle the words of one verse of the passage. Verses shorter than
/// [`MIN_SCRAMBLE_WORDS`] are skipped in favour of another verse of the
/// passage when there is one.
pub fn generate_scramble<R: Rng + ?Sized>(
    verses: &[&VerseRecord],
    rng: &mut R,
) -> Result<ScramblePayload, GenerationError> {
    let mut candidates = select_working_set(verses, rng);
    if candidates.is_empty() {
        return Err(GenerationError::NoVerseFound);
    }
    candidates.shuffle(rng);

    let mut longest = 0;
    for verse in candidates {
        let correct_order: Vec<String> = verse.text.split_whitespace().map(str::to_string).collect();
        if correct_order.len() < MIN_SCRAMBLE_WORDS {
            longest = longest.max(correct_order.len());
            continue;
        }

        let mut shuffled_words = correct_order.clone();
        shuffled_words.shuffle(rng);

        return Ok(ScramblePayload {
            reference: verse.reference(),
            original_text: verse.text.clone(),
            shuffled_words,
            correct_order,
        });
    }

    Err(GenerationError::TooShort {
        min: MIN_SCRAMBLE_WORDS,
        found: longest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffles_a_permutation_of_the_verse() {
        let verse = VerseRecord::new("Jean", 3, 16, "Car Dieu a tant aimé le monde");
        let mut rng = StdRng::seed_from_u64(42);
        let game = generate_scramble(&[&verse], &mut rng).unwrap();

        assert_eq!(game.reference, "Jean 3:16");
        assert_eq!(game.correct_order.join(" "), verse.text);
        let mut shuffled = game.shuffled_words.clone();
        let mut expected = game.correct_order.clone();
        shuffled.sort();
        expected.sort();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn short_verse_is_skipped_for_a_longer_one() {
        let short = VerseRecord::new("Jean", 11, 35, "Jésus pleura.");
        let long = VerseRecord::new("Jean", 11, 36, "Sur quoi les Juifs dirent: Voyez comme il l'aimait.");
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            let game = generate_scramble(&[&short, &long], &mut rng).unwrap();
            assert_eq!(game.reference, "Jean 11:36");
        }
    }

    #[test]
    fn only_short_verses_fail() {
        let short = VerseRecord::new("Jean", 11, 35, "Jésus pleura.");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_scramble(&[&short], &mut rng),
            Err(GenerationError::TooShort { min: 5, found: 2 })
        );
        assert_eq!(generate_scramble(&[], &mut rng), Err(GenerationError::NoVerseFound));
    }
}
