//! Core page type

use serde::{Deserialize, Serialize};

/// Structured result of fetching and parsing a URL's HTML
///
/// Immutable after construction; one instance per fetch call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// The fetched URL
    pub url: String,

    /// Page title, or the placeholder when no `<title>` element exists
    pub title: String,

    /// Newline-joined visible body text
    pub text: String,
}

impl Page {
    /// Create a page from its parts
    pub fn new(url: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}
