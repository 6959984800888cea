//! Text folding shared by tokenization and answer matching.

use std::collections::BTreeSet;
use std::ops::Range;

/// Words at most this long (in chars) are never asked about.
pub const MIN_WORD_LEN: usize = 3;

/// Accented letters folded to their base form. Applied after lowercasing.
const ACCENTS: &[(char, &str)] = &[
    ('á', "a"),
    ('à', "a"),
    ('â', "a"),
    ('ä', "a"),
    ('ã', "a"),
    ('å', "a"),
    ('é', "e"),
    ('è', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('í', "i"),
    ('ì', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ó', "o"),
    ('ò', "o"),
    ('ô', "o"),
    ('ö', "o"),
    ('õ', "o"),
    ('ú', "u"),
    ('ù', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ÿ', "y"),
    ('ç', "c"),
    ('ñ', "n"),
    ('œ', "oe"),
    ('æ', "ae"),
];

/// Punctuation outside ASCII that shows up in French and English bibles.
const TYPOGRAPHIC_PUNCTUATION: &[char] = &[
    '«', '»', '‘', '’', '‚', '“', '”', '„', '…', '–', '—', '¡', '¿', '·', '‹', '›',
];

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || TYPOGRAPHIC_PUNCTUATION.contains(&c)
}

/// Lowercase, fold accents, drop punctuation and trim.
///
/// Total over any input and idempotent.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.to_lowercase().chars() {
        if is_punctuation(c) {
            continue;
        }
        match ACCENTS.iter().find(|(accented, _)| *accented == c) {
            Some((_, base)) => out.push_str(base),
            None => out.push(c),
        }
    }
    out.trim().to_string()
}

/// Drop everything but letters, digits, `_`, whitespace and `-`.
/// Case and diacritics are kept.
pub fn strip_punctuation(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect()
}

/// Whether a token is long enough to be blanked out or asked about.
pub fn is_long_token(token: &str) -> bool {
    token.chars().count() > MIN_WORD_LEN
}

/// Normalized words of `text` longer than [`MIN_WORD_LEN`], sorted and unique.
pub fn eligible_words(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(normalize)
        .filter(|word| is_long_token(word))
        .collect()
}

/// Byte ranges of the whitespace-separated words of `text`.
pub fn word_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push(s..text.len());
    }
    spans
}

/// Swap the words at `positions` for `replacements`, pairwise, leaving every
/// separator of `text` untouched. Unpaired positions keep their word.
pub fn replace_words<S: AsRef<str>>(text: &str, positions: &[usize], replacements: &[S]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (index, span) in word_spans(text).into_iter().enumerate() {
        let slot = positions.iter().position(|&p| p == index);
        if let Some(replacement) = slot.and_then(|k| replacements.get(k)) {
            out.push_str(&text[last..span.start]);
            out.push_str(replacement.as_ref());
            last = span.end;
        }
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn folds_case_accents_and_punctuation() {
        assert_eq!(normalize("  Aimé, "), "aime");
        assert_eq!(normalize("«Éternel!»"), "eternel");
        assert_eq!(normalize("Cœur"), "coeur");
        assert_eq!(normalize("l'Église"), "leglise");
        assert_eq!(normalize("FRANÇAIS"), "francais");
    }

    #[test]
    fn trims_after_dropping_punctuation() {
        assert_eq!(normalize("! a"), "a");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn strip_punctuation_keeps_diacritics() {
        assert_eq!(strip_punctuation("aimé,"), "aimé");
        assert_eq!(strip_punctuation("«Dieu»"), "Dieu");
        assert_eq!(strip_punctuation("celui-ci;"), "celui-ci");
    }

    #[test]
    fn long_tokens_count_chars() {
        assert!(is_long_token("aimé"));
        assert!(!is_long_token("été"));
        assert!(!is_long_token("Car"));
    }

    #[test]
    fn eligible_words_are_normalized_and_unique() {
        let words = eligible_words("Car Dieu a tant aimé le monde, le Monde.");
        let expected: Vec<&str> = vec!["aime", "dieu", "monde", "tant"];
        assert_eq!(words.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn eligible_words_skip_tokens_that_shrink() {
        // "--!--" is long raw but empty once normalized
        assert!(eligible_words("--!-- abc.").is_empty());
    }

    #[test]
    fn word_spans_skip_whitespace_runs() {
        let text = " Car Dieu  a\ttant\naimé ";
        let words: Vec<&str> = word_spans(text).into_iter().map(|r| &text[r]).collect();
        assert_eq!(words, vec!["Car", "Dieu", "a", "tant", "aimé"]);
        assert!(word_spans(" \n ").is_empty());
    }

    #[test]
    fn replace_words_keeps_separators() {
        let text = "Car Dieu  a tant\naimé";
        assert_eq!(replace_words(text, &[1, 4], &["_____", "_____"][..]), "Car _____  a tant\n_____");
        assert_eq!(replace_words(text, &[1, 4], &["X"][..]), "Car X  a tant\naimé");
        assert_eq!(replace_words(text, &[], &[] as &[&str]), text);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_has_no_ascii_uppercase_or_punctuation(s in "\\PC*") {
            let out = normalize(&s);
            prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase() || c.is_ascii_punctuation()));
        }
    }
}
