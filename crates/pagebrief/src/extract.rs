//! Title and visible-text extraction from parsed HTML
//!
//! The walk skips entire subtrees of non-content elements before reading
//! text nodes, so script bodies, inline styles, and form input markup never
//! reach the prompt.

use scraper::{ElementRef, Html, Selector};

use crate::error::FetchError;

/// Title placeholder for documents without a `<title>` element
pub const DEFAULT_TITLE: &str = "No title found";

/// Elements whose subtrees are removed before text extraction
const STRIPPED_TAGS: &[&str] = &["script", "style", "img", "input"];

/// Title and visible text pulled out of one document
pub(crate) struct Extracted {
    pub title: String,
    pub text: String,
}

/// Extract the title and visible body text from an HTML document
///
/// Text nodes are trimmed individually, empty ones dropped, and the
/// survivors joined with newlines. A document without a `<body>` element
/// (e.g. a frameset page) is an explicit error.
pub(crate) fn extract(html: &str) -> Result<Extracted, FetchError> {
    let doc = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let body_selector = Selector::parse("body").unwrap();
    let body = doc
        .select(&body_selector)
        .next()
        .ok_or(FetchError::MissingBody)?;

    let mut parts = Vec::new();
    collect_visible_text(body, &mut parts);

    Ok(Extracted {
        title,
        text: parts.join("\n"),
    })
}

/// Walk an element's children, collecting trimmed text nodes
///
/// Subtrees rooted at a stripped tag are not descended into at all.
fn collect_visible_text(element: ElementRef<'_>, out: &mut Vec<String>) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            if STRIPPED_TAGS.contains(&el.value().name()) {
                continue;
            }
            collect_visible_text(el, out);
        } else if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
    }
}
