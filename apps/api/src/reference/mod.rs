//! Bible reference parsing: "jn 3:16" → `John 3:16`, filenames for downloads.

mod books;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(\d+)(?::(.+))?$").expect("valid reference pattern"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("'{0}' is not of the form 'Book Chapter[:Verses]'")]
    Malformed(String),

    #[error("unknown book '{0}'")]
    UnknownBook(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibleReference {
    pub book: &'static str,
    pub chapter: u32,
    /// Verse spec as typed after the colon ("16", "16-17", "31-33,46").
    pub verses: Option<String>,
}

impl fmt::Display for BibleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verses {
            Some(verses) => write!(f, "{} {}:{}", self.book, self.chapter, verses),
            None => write!(f, "{} {}", self.book, self.chapter),
        }
    }
}

impl BibleReference {
    /// `john_3_16.jpg`, `1_corinthians_13_4_7.jpg`, `psalms_23.jpg`.
    pub fn filename(&self) -> String {
        let book = self.book.to_lowercase().replace(' ', "_");
        match &self.verses {
            Some(verses) => {
                let verses = verses.replace([':', '-', ','], "_");
                format!("{book}_{}_{verses}.jpg", self.chapter)
            }
            None => format!("{book}_{}.jpg", self.chapter),
        }
    }
}

/// Resolves a book name or abbreviation, ignoring case and surrounding space.
/// Falls back to the spelling with inner spaces removed ("1 Chr" → "1chr").
pub fn normalize_book_name(input: &str) -> Option<&'static str> {
    let clean = input.trim().to_lowercase();
    books::lookup(&clean).or_else(|| books::lookup(&clean.replace(' ', "")))
}

pub fn parse_reference(input: &str) -> Result<BibleReference, ReferenceError> {
    let trimmed = input.trim();
    let caps = REFERENCE_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ReferenceError::Malformed(trimmed.to_string()))?;

    let book_part = caps[1].trim();
    let book =
        normalize_book_name(book_part).ok_or_else(|| ReferenceError::UnknownBook(book_part.to_string()))?;
    let chapter = caps[2]
        .parse::<u32>()
        .map_err(|_| ReferenceError::Malformed(trimmed.to_string()))?;
    let verses = caps.get(3).map(|m| m.as_str().to_string());

    Ok(BibleReference {
        book,
        chapter,
        verses,
    })
}

/// Canonical "Book Chapter[:Verses]" form used as the upstream search query.
pub fn format_for_biblegateway(input: &str) -> Option<String> {
    parse_reference(input).ok().map(|r| r.to_string())
}

pub fn generate_filename(input: &str) -> Option<String> {
    parse_reference(input).ok().map(|r| r.filename())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_book_name_full_and_abbreviated() {
        assert_eq!(normalize_book_name("Genesis"), Some("Genesis"));
        assert_eq!(normalize_book_name("Matt"), Some("Matthew"));
        assert_eq!(normalize_book_name("Rev"), Some("Revelation"));
        assert_eq!(normalize_book_name("jn"), Some("John"));
    }

    #[test]
    fn test_normalize_book_name_ignores_case_and_padding() {
        assert_eq!(normalize_book_name("GeNeSiS"), Some("Genesis"));
        assert_eq!(normalize_book_name("  Gen  "), Some("Genesis"));
        assert_eq!(normalize_book_name(" 1 Kings "), Some("1 Kings"));
    }

    #[test]
    fn test_normalize_book_name_numbered_books() {
        assert_eq!(normalize_book_name("1 Kgs"), Some("1 Kings"));
        assert_eq!(normalize_book_name("2 Chr"), Some("2 Chronicles"));
        assert_eq!(normalize_book_name("1 Cor"), Some("1 Corinthians"));
        assert_eq!(normalize_book_name("1cor"), Some("1 Corinthians"));
    }

    #[test]
    fn test_normalize_book_name_alternative_names() {
        assert_eq!(normalize_book_name("Psalm"), Some("Psalms"));
        assert_eq!(normalize_book_name("Song of Solomon"), Some("Song of Songs"));
    }

    #[test]
    fn test_normalize_book_name_unknown() {
        assert_eq!(normalize_book_name("InvalidBook"), None);
        assert_eq!(normalize_book_name(""), None);
    }

    #[test]
    fn test_parse_reference_variants() {
        let r = parse_reference("John 3:16").unwrap();
        assert_eq!((r.book, r.chapter, r.verses.as_deref()), ("John", 3, Some("16")));

        let r = parse_reference("1 Cor 13:4-7").unwrap();
        assert_eq!((r.book, r.chapter, r.verses.as_deref()), ("1 Corinthians", 13, Some("4-7")));

        let r = parse_reference("  jn   3:16  ").unwrap();
        assert_eq!(r.to_string(), "John 3:16");

        let r = parse_reference("Psalm 23").unwrap();
        assert_eq!(r.verses, None);
    }

    #[test]
    fn test_parse_reference_errors() {
        assert!(matches!(parse_reference("John"), Err(ReferenceError::Malformed(_))));
        assert!(matches!(parse_reference(""), Err(ReferenceError::Malformed(_))));
        assert!(matches!(
            parse_reference("Hezekiah 3:16"),
            Err(ReferenceError::UnknownBook(_))
        ));
    }

    #[test]
    fn test_format_for_biblegateway() {
        assert_eq!(format_for_biblegateway("jn 3:16").as_deref(), Some("John 3:16"));
        assert_eq!(
            format_for_biblegateway("Matt 25:31-33,46").as_deref(),
            Some("Matthew 25:31-33,46")
        );
        assert_eq!(format_for_biblegateway("Psalm 23").as_deref(), Some("Psalms 23"));
        assert_eq!(format_for_biblegateway("not a reference"), None);
    }

    #[test]
    fn test_generate_filename() {
        assert_eq!(generate_filename("John 3:16").as_deref(), Some("john_3_16.jpg"));
        assert_eq!(
            generate_filename("Matt 25:31-33,46").as_deref(),
            Some("matthew_25_31_33_46.jpg")
        );
        assert_eq!(
            generate_filename("1 Cor 13:4-7").as_deref(),
            Some("1_corinthians_13_4_7.jpg")
        );
        assert_eq!(generate_filename("Psalm 23").as_deref(), Some("psalms_23.jpg"));
        assert_eq!(generate_filename("???"), None);
    }
}
