//! Pulls passage text and the display reference out of a BibleGateway page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::normalize::normalize;

/// Passage containers, most specific first.
const CONTAINER_SELECTORS: &[&str] = &[".passage-text", ".passage-content", ".version-text", ".text"];

/// Subtrees whose text never belongs to the verse.
const UNWANTED_SELECTORS: &[&str] = &[
    ".footnote",
    ".footnotes",
    ".crossref",
    ".crossrefs",
    ".verse-num",
    ".chapternum",
    ".text-muted",
    ".small",
    "sup",
    ".publisher-info-bottom",
    ".passage-other-trans",
    ".passage-resources",
    ".passage-col",
    ".bcv",
    ".dropdown-display-text",
];

const REFERENCE_SELECTORS: &[&str] = &[
    ".dropdown-display-text",
    ".bcv",
    "h1.passage-display-bcv",
    ".passage-display",
];

const MAX_REFERENCE_CHARS: usize = 100;

fn compile(selectors: &[&str]) -> Vec<Selector> {
    selectors
        .iter()
        .map(|s| Selector::parse(s).expect("valid CSS selector"))
        .collect()
}

static CONTAINERS: LazyLock<Vec<Selector>> = LazyLock::new(|| compile(CONTAINER_SELECTORS));
static UNWANTED: LazyLock<Vec<Selector>> = LazyLock::new(|| compile(UNWANTED_SELECTORS));
static REFERENCES: LazyLock<Vec<Selector>> = LazyLock::new(|| compile(REFERENCE_SELECTORS));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPassage {
    pub text: String,
    pub reference: String,
}

/// Extracts and normalizes the passage on a results page.
///
/// Returns `None` when the page has no passage container or the container
/// holds no verse text once chrome is stripped. The reference falls back to
/// `query` when the page doesn't carry a usable one.
pub fn extract_passage(html: &str, query: &str) -> Option<ExtractedPassage> {
    let document = Html::parse_document(html);

    let container = CONTAINERS
        .iter()
        .find_map(|selector| document.select(selector).next())?;

    let removed: Vec<ElementRef<'_>> = UNWANTED
        .iter()
        .flat_map(|selector| container.select(selector))
        .collect();

    let text = normalize(&visible_text(container, &removed));
    if text.trim().is_empty() {
        return None;
    }

    let reference = extract_reference(&document, &removed).unwrap_or_else(|| query.to_string());

    Some(ExtractedPassage { text, reference })
}

/// Concatenated text of every text node under `container` that doesn't sit
/// inside a removed subtree.
fn visible_text(container: ElementRef<'_>, removed: &[ElementRef<'_>]) -> String {
    let mut out = String::new();
    for node in container.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| removed.contains(&ancestor));
        if !hidden {
            out.push_str(text);
        }
    }
    out
}

/// Elements stripped from the passage container are gone by the time the
/// reference is looked up, so they are skipped here too.
fn extract_reference(document: &Html, removed: &[ElementRef<'_>]) -> Option<String> {
    REFERENCES.iter().find_map(|selector| {
        let element = document.select(selector).find(|element| {
            !removed.contains(element)
                && !element
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .any(|ancestor| removed.contains(&ancestor))
        })?;
        let text = element.text().collect::<String>();
        let text = text.trim();
        (!text.is_empty() && text.chars().count() < MAX_REFERENCE_CHARS).then(|| text.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(inner: &str) -> String {
        format!(
            r#"<html><body>
            <div class="passage-text">
            <div class="passage-content passage-class-0">
            <div class="version-ESV result-text-style-normal text-html">
            <div class="text">
            {inner}
            </div>
            </div>
            </div>
            </div>
            </body></html>"#
        )
    }

    #[test]
    fn test_extracts_single_verse_and_strips_chapter_number() {
        let html = wrap(
            r#"<p><span class="text John-3-16"><span class="text"><span class="chapternum">16 </span>For God so loved the world, that he gave his only Son, that whoever believes in him should not perish but have eternal life.</span></span></p>"#,
        );
        let passage = extract_passage(&html, "John 3:16").expect("passage");
        assert_eq!(
            passage.text,
            "For God so loved the world, that he gave his only Son, that whoever \
             believes in him should not perish but have eternal life."
        );
        assert_eq!(passage.reference, "John 3:16");
    }

    #[test]
    fn test_footnotes_crossrefs_and_verse_numbers_never_reach_text() {
        let html = wrap(
            r#"<p><span class="text"><sup class="versenum">2 </sup>In the beginning<sup class="footnote">[a]</sup> was the Word<sup class="crossref">(B)</sup>.</span></p>
            <div class="footnotes"><h4>Footnotes</h4><ol><li>John 1:1 Or Logos</li></ol></div>
            <div class="crossrefs"><ol><li>Gen 1:1</li></ol></div>"#,
        );
        let passage = extract_passage(&html, "John 1:1").expect("passage");
        assert_eq!(passage.text, "In the beginning was the Word.");
    }

    #[test]
    fn test_messy_whitespace_is_cleaned() {
        let html = wrap(
            r#"<p><span class="text John-3-16"><span class="text">   <span class="chapternum">16 </span>For God so loved the world,   that he gave his only Son.   </span></span></p>"#,
        );
        let passage = extract_passage(&html, "John 3:16").expect("passage");
        assert!(!passage.text.contains("   "));
        assert!(!passage.text.contains("16 "));
        assert!(passage.text.starts_with("For God so loved"));
    }

    #[test]
    fn test_no_container_is_none() {
        let html = r#"<html><body><div class="no-results">No results found</div></body></html>"#;
        assert_eq!(extract_passage(html, "John 3:16"), None);
    }

    #[test]
    fn test_empty_container_is_none() {
        assert_eq!(extract_passage(&wrap(""), "John 3:16"), None);
    }

    #[test]
    fn test_reference_taken_from_page_heading() {
        let html = r#"<html><body>
            <h1 class="passage-display-bcv">Psalm 23:1</h1>
            <div class="passage-text"><p>The Lord is my shepherd; I shall not want.</p></div>
            </body></html>"#;
        let passage = extract_passage(html, "ps 23:1").expect("passage");
        assert_eq!(passage.reference, "Psalm 23:1");
    }

    #[test]
    fn test_reference_inside_stripped_chrome_is_ignored() {
        let html = r#"<html><body>
            <div class="passage-text">
              <div class="bcv">Should not be used</div>
              <p>The Lord is my shepherd; I shall not want.</p>
            </div>
            </body></html>"#;
        let passage = extract_passage(html, "Psalm 23:1").expect("passage");
        assert_eq!(passage.reference, "Psalm 23:1");
        assert!(!passage.text.contains("Should not"));
    }

    #[test]
    fn test_overlong_reference_falls_back_to_query() {
        let heading = "x".repeat(120);
        let html = format!(
            r#"<html><body><h1 class="passage-display-bcv">{heading}</h1>
            <div class="passage-text"><p>Jesus wept.</p></div></body></html>"#
        );
        let passage = extract_passage(&html, "John 11:35").expect("passage");
        assert_eq!(passage.reference, "John 11:35");
    }
}
