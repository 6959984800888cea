//! Resolve parsed references against the corpus.

use crate::corpus::Corpus;
use crate::reference::parse_reference;
use crate::types::{PassageEntry, VerseRange, VerseRecord, VerseSelection};

/// Verses of `range` in `language`, in ascending verse order.
///
/// Books match after trimming and case folding; accents must match exactly.
/// Nothing found is an empty result.
pub fn resolve_verses<'a>(corpus: &'a Corpus, range: &VerseRange, language: &str) -> Vec<&'a VerseRecord> {
    let mut verses: Vec<&VerseRecord> = corpus
        .language(language)
        .chapter(&range.book, range.chapter)
        .into_iter()
        .filter(|v| range.verses.contains(v.verse))
        .collect();
    verses.sort_by_key(|v| v.verse);
    verses
}

/// Parse `reference` and resolve it. Malformed references resolve to nothing.
pub fn resolve_reference<'a>(corpus: &'a Corpus, reference: &str, language: &str) -> Vec<&'a VerseRecord> {
    parse_reference(reference)
        .map(|range| resolve_verses(corpus, &range, language))
        .unwrap_or_default()
}

/// Display entries for every verse of `range`.
pub fn passage(corpus: &Corpus, range: &VerseRange, language: &str) -> Vec<PassageEntry> {
    resolve_verses(corpus, range, language)
        .into_iter()
        .map(PassageEntry::from)
        .collect()
}

/// The single verse a `Book C:V` range points at.
pub fn find_verse<'a>(corpus: &'a Corpus, range: &VerseRange, language: &str) -> Option<&'a VerseRecord> {
    match range.verses {
        VerseSelection::Single { .. } => resolve_verses(corpus, range, language).into_iter().next(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::book_key;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn corpus() -> Corpus {
        let mut verses = Vec::new();
        // stored out of order on purpose
        for verse in [3, 1, 2, 5, 4] {
            verses.push(VerseRecord::new("Jean", 3, verse, format!("Jean trois verset {verse}")));
        }
        verses.push(VerseRecord::new("Jean", 4, 1, "Jean quatre"));
        verses.push(VerseRecord::new("1 Jean", 3, 1, "Première épître"));
        verses.push(VerseRecord::new("Ésaïe", 53, 5, "Mais il était blessé pour nos péchés"));
        Corpus::new().with_language("fr", verses)
    }

    fn numbers(verses: &[&VerseRecord]) -> Vec<u32> {
        verses.iter().map(|v| v.verse).collect()
    }

    #[test]
    fn resolves_span_in_verse_order() {
        let corpus = corpus();
        let range = parse_reference("Jean 3:2-4").unwrap();
        assert_eq!(numbers(&resolve_verses(&corpus, &range, "fr")), vec![2, 3, 4]);
    }

    #[test]
    fn resolves_whole_chapter() {
        let corpus = corpus();
        let verses = resolve_reference(&corpus, "jean 3", "fr");
        assert_eq!(numbers(&verses), vec![1, 2, 3, 4, 5]);
        assert!(verses.iter().all(|v| v.book_name == "Jean"));
    }

    #[test]
    fn book_with_digit_is_distinct() {
        let corpus = corpus();
        let verses = resolve_reference(&corpus, "1 Jean 3:1", "fr");
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].book_name, "1 Jean");
    }

    #[test]
    fn accents_must_match_for_books() {
        let corpus = corpus();
        assert_eq!(resolve_reference(&corpus, "ésaïe 53:5", "fr").len(), 1);
        assert!(resolve_reference(&corpus, "Esaie 53:5", "fr").is_empty());
    }

    #[test]
    fn nothing_found_is_empty() {
        let corpus = corpus();
        assert!(resolve_reference(&corpus, "Jean 9:1", "fr").is_empty());
        assert!(resolve_reference(&corpus, "Jean 3:1", "en").is_empty());
        assert!(resolve_reference(&corpus, "not a reference", "fr").is_empty());
    }

    #[test]
    fn passage_entries() {
        let corpus = corpus();
        let range = parse_reference("Jean 3:1-2").unwrap();
        let entries = passage(&corpus, &range, "fr");
        assert_eq!(
            entries,
            vec![
                PassageEntry {
                    reference: "Jean 3:1".to_string(),
                    text: "Jean trois verset 1".to_string(),
                },
                PassageEntry {
                    reference: "Jean 3:2".to_string(),
                    text: "Jean trois verset 2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn find_single_verse_only() {
        let corpus = corpus();
        let single = parse_reference("Jean 4:1").unwrap();
        assert_eq!(find_verse(&corpus, &single, "fr").map(|v| v.text.as_str()), Some("Jean quatre"));
        let chapter = parse_reference("Jean 4").unwrap();
        assert!(find_verse(&corpus, &chapter, "fr").is_none());
    }

    proptest! {
        #[test]
        fn resolved_verses_stay_inside_range(chapter in 1u32..6, start in 1u32..7, len in 0u32..4) {
            let corpus = corpus();
            let range = VerseRange {
                book: "JEAN".to_string(),
                chapter,
                verses: VerseSelection::Span { start, end: start + len },
            };
            for verse in resolve_verses(&corpus, &range, "fr") {
                prop_assert_eq!(book_key(&verse.book_name), book_key(&range.book));
                prop_assert_eq!(verse.chapter, range.chapter);
                prop_assert!(range.verses.contains(verse.verse));
            }
        }
    }
}
