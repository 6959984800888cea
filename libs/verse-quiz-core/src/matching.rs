//! Fuzzy answer matching for typed answers.

use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// Minimum similarity for a typed answer to count as correct.
pub const DEFAULT_TOLERANCE: f64 = 0.85;

/// Outcome of one typed-answer comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_correct: bool,
    /// Between 0.0 and 1.0.
    pub similarity: f64,
    pub candidate_normalized: String,
    /// Expected answer after normalization.
    pub expected_normalized: String,
}

/// Compare a typed answer to the expected answer after normalization.
///
/// An empty side only matches another empty side.
pub fn compare_answer(candidate: &str, expected: &str, tolerance: f64) -> MatchResult {
    let candidate_normalized = normalize(candidate);
    let expected_normalized = normalize(expected);

    let similarity = if candidate_normalized.is_empty() || expected_normalized.is_empty() {
        if candidate_normalized == expected_normalized {
            1.0
        } else {
            0.0
        }
    } else {
        normalized_similarity(&candidate_normalized, &expected_normalized)
    };

    MatchResult {
        is_correct: similarity >= tolerance,
        similarity,
        candidate_normalized,
        expected_normalized,
    }
}

/// Whether `candidate` is close enough to `expected`.
pub fn is_match(candidate: &str, expected: &str, tolerance: f64) -> bool {
    compare_answer(candidate, expected, tolerance).is_correct
}

/// [`is_match`] with [`DEFAULT_TOLERANCE`].
pub fn verify_answer(candidate: &str, expected: &str) -> bool {
    is_match(candidate, expected, DEFAULT_TOLERANCE)
}

/// Grade answers pairwise. A missing candidate is wrong; extra candidates are ignored.
pub fn verify_answers<S: AsRef<str>, T: AsRef<str>>(
    candidates: &[S],
    expected: &[T],
    tolerance: f64,
) -> Vec<bool> {
    expected
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            candidates
                .get(i)
                .is_some_and(|candidate| is_match(candidate.as_ref(), answer.as_ref(), tolerance))
        })
        .collect()
}

/// Edit distance in chars. Keeps one row of the table, sized by the
/// shorter input.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let (long, short): (Vec<char>, Vec<char>) = if a.chars().count() >= b.chars().count() {
        (a.chars().collect(), b.chars().collect())
    } else {
        (b.chars().collect(), a.chars().collect())
    };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        // row[j] still holds the previous row until overwritten
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(lc != sc);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }
    row[short.len()]
}

/// `1 - distance / longest length`, in chars. Two empty strings are identical.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    match a.chars().count().max(b.chars().count()) {
        0 => 1.0,
        longest => 1.0 - levenshtein_distance(a, b) as f64 / longest as f64,
    }
}
