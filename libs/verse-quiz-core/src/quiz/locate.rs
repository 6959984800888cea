//! "Where is this verse?" game: show a verse, pick its book, chapter or
//! reference among four options.
//!
//! The granularity of the options follows the difficulty and the width of
//! the source:
//!
//! | Source | Easy | Medium | Hard |
//! |---|---|---|---|
//! | one book | chapter | verse | verse |
//! | several books | book | chapter | verse |
//!
//! On easy questions one wrong option comes from outside the source.

use crate::books::BookGroup;
use crate::corpus::{book_key, Corpus};
use crate::error::GenerationError;
use crate::resolver::resolve_reference;
use crate::types::{Difficulty, Granularity, ReferenceQuizPayload, VerseRecord};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

/// Options per question, the correct one included.
pub const OPTION_COUNT: usize = 4;

/// Random corpus draws made to top up missing options.
const FILL_ATTEMPTS: usize = 100;

/// Where the verse to locate is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    /// The whole corpus of the language.
    Corpus,
    /// One book, matched ignoring case.
    Book(String),
    /// A group of books.
    Group(BookGroup),
    /// The verses of a list of references.
    References(Vec<String>),
}

impl QuestionSource {
    fn is_single_book(&self) -> bool {
        matches!(self, Self::Book(_))
    }

    fn pool<'a>(&self, corpus: &'a Corpus, language: &str) -> Vec<&'a VerseRecord> {
        let verses = corpus.verses(language);
        match self {
            Self::Corpus => verses.iter().collect(),
            Self::Book(book) => {
                let key = book_key(book);
                verses.iter().filter(|v| book_key(&v.book_name) == key).collect()
            }
            Self::Group(group) => verses
                .iter()
                .filter(|v| group.contains(&v.book_name, language))
                .collect(),
            Self::References(references) => {
                let mut seen = HashSet::new();
                references
                    .iter()
                    .flat_map(|r| resolve_reference(corpus, r, language))
                    .filter(|v| seen.insert((book_key(&v.book_name), v.chapter, v.verse)))
                    .collect()
            }
        }
    }
}

fn granularity(difficulty: Difficulty, single_book: bool) -> Granularity {
    match (difficulty, single_book) {
        (Difficulty::Easy, true) => Granularity::Chapter,
        (_, true) => Granularity::Verse,
        (Difficulty::Easy, false) => Granularity::Book,
        (Difficulty::Medium, false) => Granularity::Chapter,
        (Difficulty::Hard, false) => Granularity::Verse,
    }
}

/// Distinct labels of `verses`, first occurrence order, minus `exclude`.
fn distinct_labels<'a>(
    verses: impl Iterator<Item = &'a VerseRecord>,
    granularity: Granularity,
    exclude: &str,
) -> Vec<String> {
    let mut seen = HashSet::new();
    verses
        .map(|v| granularity.label(v))
        .filter(|label| label != exclude && seen.insert(label.clone()))
        .collect()
}

/// Draw a verse from `source` and build four candidate locations for it.
///
/// The options are distinct. A corpus too small to supply four distinct
/// labels yields fewer options.
pub fn generate_reference_question<R: Rng + ?Sized>(
    corpus: &Corpus,
    language: &str,
    source: &QuestionSource,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<ReferenceQuizPayload, GenerationError> {
    let pool = source.pool(corpus, language);
    let verse = *pool.choose(rng).ok_or(GenerationError::EmptySource)?;

    let granularity = granularity(difficulty, source.is_single_book());
    let correct_answer = granularity.label(verse);
    let mut options = vec![correct_answer.clone()];

    let inside = distinct_labels(pool.iter().copied(), granularity, &correct_answer);
    if difficulty == Difficulty::Easy {
        options.extend(inside.choose_multiple(rng, 2).cloned());

        let scope: HashSet<String> = pool.iter().map(|v| book_key(&v.book_name)).collect();
        let outside = distinct_labels(
            corpus
                .verses(language)
                .iter()
                .filter(|v| !scope.contains(&book_key(&v.book_name))),
            granularity,
            &correct_answer,
        );
        options.extend(outside.choose(rng).cloned());
    } else {
        options.extend(inside.choose_multiple(rng, OPTION_COUNT - 1).cloned());
    }

    let everything = corpus.verses(language);
    for _ in 0..FILL_ATTEMPTS {
        if options.len() >= OPTION_COUNT {
            break;
        }
        let Some(candidate) = everything.choose(rng) else { break };
        let label = granularity.label(candidate);
        if !options.contains(&label) {
            options.push(label);
        }
    }

    options.shuffle(rng);

    Ok(ReferenceQuizPayload {
        question_text: verse.text.clone(),
        options,
        correct_answer,
        granularity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn corpus() -> Corpus {
        let mut verses = Vec::new();
        for (book, chapters) in [("Genèse", 3), ("Exode", 2), ("Jean", 4), ("Romains", 2), ("Apocalypse", 1)] {
            for chapter in 1..=chapters {
                for verse in 1..=3 {
                    verses.push(VerseRecord::new(
                        book,
                        chapter,
                        verse,
                        format!("{book} chapitre {chapter} verset {verse}"),
                    ));
                }
            }
        }
        Corpus::new().with_language("fr", verses)
    }

    fn assert_well_formed(q: &ReferenceQuizPayload) {
        assert_eq!(q.options.len(), OPTION_COUNT);
        assert_eq!(q.options.iter().collect::<HashSet<_>>().len(), OPTION_COUNT);
        assert!(q.options.contains(&q.correct_answer));
    }

    #[test]
    fn single_book_easy_asks_for_chapter() {
        let corpus = corpus();
        let mut rng = StdRng::seed_from_u64(42);
        let source = QuestionSource::Book("jean".into());
        for _ in 0..10 {
            let q = generate_reference_question(&corpus, "fr", &source, Difficulty::Easy, &mut rng).unwrap();
            assert_eq!(q.granularity, Granularity::Chapter);
            assert!(q.correct_answer.starts_with("Jean "));
            assert!(q.question_text.starts_with("Jean chapitre"));
            assert_well_formed(&q);
            // one option comes from another book
            assert_eq!(q.options.iter().filter(|o| !o.starts_with("Jean ")).count(), 1);
        }
    }

    #[test]
    fn single_book_hard_asks_for_verse() {
        let corpus = corpus();
        let mut rng = StdRng::seed_from_u64(7);
        let source = QuestionSource::Book("Genèse".into());
        let q = generate_reference_question(&corpus, "fr", &source, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(q.granularity, Granularity::Verse);
        assert_well_formed(&q);
        assert!(q.options.iter().all(|o| o.starts_with("Genèse ")));
    }

    #[test]
    fn group_granularity_follows_difficulty() {
        let corpus = corpus();
        let mut rng = StdRng::seed_from_u64(3);
        let source = QuestionSource::Group(BookGroup::OldTestament);

        let easy = generate_reference_question(&corpus, "fr", &source, Difficulty::Easy, &mut rng).unwrap();
        assert_eq!(easy.granularity, Granularity::Book);
        assert!(["Genèse", "Exode"].contains(&easy.correct_answer.as_str()));
        assert_well_formed(&easy);

        let medium = generate_reference_question(&corpus, "fr", &source, Difficulty::Medium, &mut rng).unwrap();
        assert_eq!(medium.granularity, Granularity::Chapter);
        assert_well_formed(&medium);

        let hard = generate_reference_question(&corpus, "fr", &source, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(hard.granularity, Granularity::Verse);
        assert_well_formed(&hard);
    }

    #[test]
    fn references_source_draws_from_resolved_verses() {
        let corpus = corpus();
        let mut rng = StdRng::seed_from_u64(5);
        let source = QuestionSource::References(vec!["Jean 2:1-2".into(), "Romains 1:3".into()]);
        for _ in 0..10 {
            let q = generate_reference_question(&corpus, "fr", &source, Difficulty::Hard, &mut rng).unwrap();
            assert!(["Jean 2:1", "Jean 2:2", "Romains 1:3"].contains(&q.correct_answer.as_str()));
            assert_well_formed(&q);
        }
    }

    #[test]
    fn small_corpus_gives_fewer_options() {
        let corpus = Corpus::new().with_language("fr", vec![VerseRecord::new("Jean", 1, 1, "Au commencement")]);
        let mut rng = StdRng::seed_from_u64(0);
        let q = generate_reference_question(&corpus, "fr", &QuestionSource::Corpus, Difficulty::Easy, &mut rng).unwrap();
        assert_eq!(q.options, vec!["Jean".to_string()]);
        assert_eq!(q.correct_answer, "Jean");
    }

    #[test]
    fn empty_source_is_an_error() {
        let corpus = corpus();
        let mut rng = StdRng::seed_from_u64(0);
        let source = QuestionSource::Book("Hénoch".into());
        assert_eq!(
            generate_reference_question(&corpus, "fr", &source, Difficulty::Easy, &mut rng),
            Err(GenerationError::EmptySource)
        );
        assert_eq!(
            generate_reference_question(&corpus, "en", &QuestionSource::Corpus, Difficulty::Easy, &mut rng),
            Err(GenerationError::EmptySource)
        );
    }
}
