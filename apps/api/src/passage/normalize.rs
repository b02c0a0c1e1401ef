//! Passage text normalizer.
//!
//! Turns the raw text pulled out of a passage container into display text:
//! verse boundaries survive as line breaks, everything editorial goes away.
//!
//! # Pipeline
//! The cleanup is an ordered table of named steps ([`PIPELINE`]). Order is
//! load-bearing: later steps assume the whitespace already looks the way the
//! earlier ones left it.
//!
//! The output never contains `\r`, tabs, doubled spaces, or two blank lines in
//! a row. A single blank line is kept as a strophe separator.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::passage::tables::{
    splice_fix, ARTIFACT_STRINGS, PERICOPE_REGEXES, TRANSLATION_CODES, WORD_SPLICE_REGEX,
};

/// One named `&str -> String` transform in the normalizer pipeline.
pub struct NormalizeStep {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// The normalizer steps, in application order.
pub static PIPELINE: [NormalizeStep; 13] = [
    NormalizeStep {
        name: "line_endings",
        apply: normalize_line_endings,
    },
    NormalizeStep {
        name: "collapse_blank_runs_coarse",
        apply: collapse_blank_runs_coarse,
    },
    NormalizeStep {
        name: "clean_line_whitespace",
        apply: clean_line_whitespace,
    },
    NormalizeStep {
        name: "collapse_blank_runs_fine",
        apply: collapse_blank_runs_fine,
    },
    NormalizeStep {
        name: "strip_glued_verse_numbers",
        apply: strip_glued_verse_numbers,
    },
    NormalizeStep {
        name: "strip_verse_numbers",
        apply: strip_verse_numbers,
    },
    NormalizeStep {
        name: "remove_artifacts",
        apply: remove_artifacts,
    },
    NormalizeStep {
        name: "remove_pericope_headings",
        apply: remove_pericope_headings,
    },
    NormalizeStep {
        name: "split_case_boundaries",
        apply: split_case_boundaries,
    },
    NormalizeStep {
        name: "repair_word_splices",
        apply: repair_word_splices,
    },
    NormalizeStep {
        name: "renormalize_lines",
        apply: renormalize_lines,
    },
    NormalizeStep {
        name: "space_after_punctuation",
        apply: space_after_punctuation,
    },
    NormalizeStep {
        name: "collapse_spaces",
        apply: collapse_spaces,
    },
];

/// Normalizes raw passage text into cleaned verse text.
///
/// Total over all input: never panics, never fails. An empty result means the
/// input carried no verse text; callers decide what that means.
pub fn normalize(raw: &str) -> String {
    PIPELINE.iter().fold(raw.to_string(), |text, step| {
        let next = (step.apply)(&text);
        if next != text {
            trace!(
                step = step.name,
                before = text.len(),
                after = next.len(),
                "normalize step changed text"
            );
        }
        next
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Compiled patterns
// ────────────────────────────────────────────────────────────────────────────

static BLANK_RUN_COARSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("valid blank run regex"));
static BLANK_RUN_FINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank run regex"));
static INLINE_SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{00A0}]+").expect("valid inline space regex"));
static GLUED_VERSE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[0-9]+([A-Z][A-Za-z]*\b)").expect("valid verse number regex"));
static SPACED_VERSE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[0-9]+\s+").expect("valid verse number regex"));
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid case boundary regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid space run regex"));

// ────────────────────────────────────────────────────────────────────────────
// Steps
// ────────────────────────────────────────────────────────────────────────────

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// 3+ newlines, possibly with whitespace between them, become one blank line.
fn collapse_blank_runs_coarse(text: &str) -> String {
    BLANK_RUN_COARSE.replace_all(text, "\n\n").into_owned()
}

fn clean_line_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| INLINE_SPACE_RUN.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_blank_runs_fine(text: &str) -> String {
    BLANK_RUN_FINE.replace_all(text, "\n\n").trim().to_string()
}

/// `1Blessed` -> `Blessed`, `1LORD` -> `LORD`. Must run before [`strip_verse_numbers`], which only
/// handles numbers followed by whitespace.
fn strip_glued_verse_numbers(text: &str) -> String {
    GLUED_VERSE_NUMBER.replace_all(text, "$1").into_owned()
}

/// `2 but whose delight` -> `but whose delight`. Digits mid-line are content.
fn strip_verse_numbers(text: &str) -> String {
    SPACED_VERSE_NUMBER.replace_all(text, "").into_owned()
}

fn remove_artifacts(text: &str) -> String {
    let mut text = ARTIFACT_STRINGS
        .iter()
        .fold(text.to_string(), |acc, artifact| acc.replace(artifact, ""));
    for code in TRANSLATION_CODES {
        text = remove_translation_code(&text, code);
    }
    text
}

/// Removes every standalone occurrence of `code`, together with wrapping
/// parentheses (`(NIV)`). An occurrence glued to a neighbouring capital letter
/// or digit is part of a longer uppercase word and stays.
fn remove_translation_code(text: &str, code: &str) -> String {
    let glued = |c: Option<char>| c.is_some_and(|c| c.is_ascii_uppercase() || c.is_ascii_digit());

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, _) in text.match_indices(code) {
        let end = start + code.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if glued(before) || glued(after) {
            continue;
        }
        let (start, end) = if before == Some('(') && after == Some(')') {
            (start - 1, end + 1)
        } else {
            (start, end)
        };
        if start < cursor {
            continue;
        }
        out.push_str(&text[cursor..start]);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

fn remove_pericope_headings(text: &str) -> String {
    PERICOPE_REGEXES
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

/// `ShepherdA Psalm` -> `Shepherd A Psalm`.
fn split_case_boundaries(text: &str) -> String {
    CASE_BOUNDARY.replace_all(text, "$1 $2").into_owned()
}

fn repair_word_splices(text: &str) -> String {
    WORD_SPLICE_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let glued = &caps[0];
            let Some(fixed) = splice_fix(glued) else {
                return glued.to_string();
            };
            if glued.starts_with(|c: char| c.is_uppercase()) {
                capitalize(fixed)
            } else {
                fixed.to_string()
            }
        })
        .into_owned()
}

/// Trims every line and keeps at most one blank line between non-empty ones.
/// Removing an artifact or heading can leave a verse number at the start of a
/// line, so leading numbers are stripped again here.
fn renormalize_lines(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in text.split('\n') {
        let cleaned = WHITESPACE_RUN.replace_all(line, " ");
        let cleaned = strip_leading_verse_number(cleaned.trim());
        if !cleaned.is_empty() {
            lines.push(cleaned);
        } else if lines.last().is_some_and(|last| !last.is_empty()) {
            lines.push(String::new());
        }
    }
    lines.join("\n").trim().to_string()
}

fn strip_leading_verse_number(line: &str) -> String {
    let line = GLUED_VERSE_NUMBER.replace(line, "$1");
    SPACED_VERSE_NUMBER.replace(&line, "").into_owned()
}

/// `Lord,and` -> `Lord, and`. Only letters and opening quotes trigger the
/// space; digits are left alone so `3.14` and `1,000` survive. A straight `"`
/// counts as opening only when a letter follows it.
fn space_after_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for (i, c) in text.char_indices() {
        out.push(c);
        if !matches!(c, ',' | ';' | '.') {
            continue;
        }
        let mut ahead = text[i + c.len_utf8()..].chars();
        let opens = match (ahead.next(), ahead.next()) {
            (Some('"'), Some(after)) => after.is_alphabetic(),
            (Some(next), _) => next.is_alphabetic() || matches!(next, '“' | '‘' | '('),
            (None, _) => false,
        };
        if opens {
            out.push(' ');
        }
    }
    out
}

/// Collapses space runs. Newlines are verse breaks and are never touched.
fn collapse_spaces(text: &str) -> String {
    SPACE_RUN.replace_all(text, " ").trim().to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
