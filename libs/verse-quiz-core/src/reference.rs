//! Scripture reference parser.
//!
//! # Format
//! Shapes are tried from the most specific to the loosest:
//! ```text
//! Jean 3:16-18    book, chapter, inclusive verse range
//! Jean 3:16       book, chapter, single verse
//! Jean 3          book, whole chapter
//! ```
//! The book is everything before the chapter number, so book names holding
//! digits ("1 Samuel 3:1-4") split on the last run of digits before the
//! colon, never on the first digit.

use crate::error::{ParseError, Result};
use crate::types::{VerseRange, VerseRecord, VerseSelection};

/// Parse a free-text reference into a verse range.
pub fn parse_reference(reference: &str) -> Result<VerseRange> {
    let input = reference.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some((_, rest)) = input.split_once(':') {
        if rest.contains(':') {
            return Err(ParseError::InvalidNumber {
                reference: input.to_string(),
                value: rest.to_string(),
            });
        }
    }

    match Shape::classify(input) {
        Shape::Span { head, start, end } => {
            let (book, chapter) = split_book_and_chapter(head, input)?;
            let start = parse_number(start, input)?;
            let end = parse_number(end, input)?;
            if start > end {
                return Err(ParseError::ReversedRange {
                    reference: input.to_string(),
                    start,
                    end,
                });
            }
            Ok(VerseRange {
                book,
                chapter,
                verses: VerseSelection::Span { start, end },
            })
        }
        Shape::Verse { head, verse } => {
            let (book, chapter) = split_book_and_chapter(head, input)?;
            let verse = parse_number(verse, input)?;
            Ok(VerseRange {
                book,
                chapter,
                verses: VerseSelection::Single { verse },
            })
        }
        Shape::Chapter { head } => {
            let (book, chapter) = split_book_and_chapter(head, input)?;
            Ok(VerseRange {
                book,
                chapter,
                verses: VerseSelection::WholeChapter,
            })
        }
    }
}

enum Shape<'a> {
    Span {
        head: &'a str,
        start: &'a str,
        end: &'a str,
    },
    Verse {
        head: &'a str,
        verse: &'a str,
    },
    Chapter {
        head: &'a str,
    },
}

impl<'a> Shape<'a> {
    fn classify(input: &'a str) -> Self {
        match input.rsplit_once(':') {
            Some((head, tail)) => match tail.split_once('-') {
                Some((start, end)) => Self::Span { head, start, end },
                None => Self::Verse { head, verse: tail },
            },
            None => Self::Chapter { head: input },
        }
    }
}

/// Split `Jean 3` / `1 Samuel 3` into the trimmed book and the chapter number.
fn split_book_and_chapter(head: &str, reference: &str) -> Result<(String, u32)> {
    let book_len = head.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let (book, chapter) = head.split_at(book_len);

    if chapter.is_empty() {
        return Err(ParseError::MissingChapter {
            reference: reference.to_string(),
        });
    }

    let book = book.trim();
    if book.is_empty() {
        return Err(ParseError::MissingBook {
            reference: reference.to_string(),
        });
    }

    Ok((book.to_string(), parse_number(chapter, reference)?))
}

fn parse_number(token: &str, reference: &str) -> Result<u32> {
    let invalid = || ParseError::InvalidNumber {
        reference: reference.to_string(),
        value: token.to_string(),
    };

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match token.parse::<u32>().map_err(|_| invalid())? {
        0 => Err(ParseError::ZeroNumber {
            reference: reference.to_string(),
        }),
        n => Ok(n),
    }
}

/// `Book C:V` when `first == last`, `Book C:V1-V2` otherwise.
pub fn format_reference(book: &str, chapter: u32, first: u32, last: u32) -> String {
    if first == last {
        format!("{book} {chapter}:{first}")
    } else {
        format!("{book} {chapter}:{first}-{last}")
    }
}

/// Reference of a passage, from its first to its last verse. `None` for an
/// empty passage.
pub fn exact_reference(verses: &[&VerseRecord]) -> Option<String> {
    let first = verses.first()?;
    let last = verses.last()?;
    Some(format_reference(&first.book_name, first.chapter, first.verse, last.verse))
}
