//! Static lookup tables used by the passage normalizer.
//!
//! Everything here is immutable data. Compiled regexes are built once on first
//! use through `LazyLock` and never mutated afterwards.

use std::sync::LazyLock;

use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Translation names and site chrome
// ────────────────────────────────────────────────────────────────────────────

/// Full translation names and literal BibleGateway UI strings.
/// Removed as plain case-sensitive substrings, in this order.
pub const ARTIFACT_STRINGS: &[&str] = &[
    "Revised Standard Version Catholic Edition",
    "New International Reader's Version",
    "New International Version",
    "English Standard Version",
    "New King James Version",
    "King James Version",
    "New American Standard Bible",
    "Christian Standard Bible",
    "New Living Translation",
    "The Message",
    "Amplified Bible",
    "New Century Version",
    "Good News Translation",
    "Contemporary English Version",
    "Worldwide English (New Testament)",
    "Read full chapter",
    "View more",
    "BibleGateway.com",
    "Bible Gateway",
    "Â©",
    "©",
];

/// Translation abbreviation codes. Longer codes come before the codes they
/// contain (`NKJV` before `KJV`, `NIRV` before `NIV`).
///
/// A code is only stripped when it is not glued to another capital letter or
/// digit, so small-caps words like `POWER` keep their letters.
pub const TRANSLATION_CODES: &[&str] = &[
    "RSVCE", "NKJV", "NASB", "NIRV", "KJV", "NIV", "ESV", "CSB", "NLT", "MSG", "AMP", "NCV",
    "GNT", "CEV", "WE",
];

// ────────────────────────────────────────────────────────────────────────────
// Pericope headings and psalm superscriptions
// ────────────────────────────────────────────────────────────────────────────

/// Heading patterns, applied in order. Every pattern stays inside one line
/// (`[ \t]` instead of `\s`) so removing a heading never joins two lines.
const PERICOPE_PATTERNS: &[&str] = &[
    // BOOK I, BOOK II ... (numerals must be capitals: "book in" is content)
    r"(?i)\bBOOK[ \t]+(?-i:[IVX]+)[ \t]*",
    r"(?i)TheTwoWays",
    r"(?i)The Two Ways",
    r"(?i)A Psalm of David\.?",
    r"(?i)A Song of Ascents\.?",
    r"(?i)To the choirmaster\.?",
    r"(?i)For the director of music\.?",
    r"(?i)\bA maskil\b",
    r"(?i)\bA miktam\b",
    r"(?i)\bSelah\b",
    // Attributions only count as headings at the start of a line; mid-line
    // they are verse content ("the son of David").
    r"(?im)^[ \t]*Of David\.?[ \t]*(?:A[ \t]*Psalm\.?)?",
    r"(?im)^[ \t]*Of Solomon\.?",
    r"(?im)^[ \t]*Of Asaph\.?",
    r"(?im)^[ \t]*Of the Sons of Korah\.?",
    r"(?im)^[ \t]*A Prayer of\b",
    r"(?im)^[ \t]*The Prayer of\b",
    r"(?i)\bPsalm[ \t]+[0-9]+",
    r"(?im)^[ \t]*\.[ \t]*A[ \t]*Psalm\.[ \t]*$",
    // punctuation stranded on its own line once a heading is gone
    r"(?m)^[ \t]*[.,;:]+[ \t]*$",
];

/// Whole-line CamelCase title left behind when markup glues a heading
/// together ("TheTwoWays", "HisMercy"). Case-sensitive on purpose.
const CAMEL_CASE_TITLE: &str = r"(?m)^[A-Z][a-z]+[A-Z][a-z]+[ \t]*$";

pub static PERICOPE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PERICOPE_PATTERNS
        .iter()
        .chain(std::iter::once(&CAMEL_CASE_TITLE))
        .map(|p| Regex::new(p).expect("valid pericope pattern"))
        .collect()
});

// ────────────────────────────────────────────────────────────────────────────
// Word splices
// ────────────────────────────────────────────────────────────────────────────

/// Glued word pairs that survive the generic case-boundary repair.
/// Keys are lowercase; matching is whole-word and case-insensitive.
pub const WORD_SPLICES: &[(&str, &str)] = &[
    ("manwho", "man who"),
    ("blessedis", "blessed is"),
    ("whowalks", "who walks"),
    ("whodoes", "who does"),
    ("whostands", "who stands"),
    ("whosits", "who sits"),
    ("thelaw", "the law"),
    ("ofthe", "of the"),
    ("inthe", "in the"),
    ("onhis", "on his"),
    ("andwho", "and who"),
    ("butwhose", "but whose"),
];

pub static WORD_SPLICE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = WORD_SPLICES
        .iter()
        .map(|(glued, _)| *glued)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid splice pattern")
});

/// Returns the repaired form for a glued word, matched case-insensitively.
pub fn splice_fix(glued: &str) -> Option<&'static str> {
    WORD_SPLICES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(glued))
        .map(|(_, fixed)| *fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pericope_regexes_compile() {
        assert_eq!(PERICOPE_REGEXES.len(), PERICOPE_PATTERNS.len() + 1);
    }

    #[test]
    fn test_splice_fix_is_case_insensitive() {
        assert_eq!(splice_fix("ManWho"), Some("man who"));
        assert_eq!(splice_fix("BLESSEDIS"), Some("blessed is"));
        assert_eq!(splice_fix("whose"), None);
    }

    #[test]
    fn test_longer_codes_precede_contained_codes() {
        for (i, code) in TRANSLATION_CODES.iter().enumerate() {
            for longer in &TRANSLATION_CODES[i + 1..] {
                assert!(
                    !longer.contains(code),
                    "{longer} contains {code} but comes after it"
                );
            }
        }
    }
}
