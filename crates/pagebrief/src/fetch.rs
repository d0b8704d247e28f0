//! Page fetching
//!
//! This module provides the entry points for turning a URL into a [`Page`].
//! One HTTP GET per call; no retries, no redirects beyond the HTTP library
//! default, no caching.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use url::Url;

use crate::error::FetchError;
use crate::extract;
use crate::page::Page;
use crate::DEFAULT_USER_AGENT;

/// Fetch options
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
}

/// Fetch a URL and parse it into a [`Page`]
///
/// Uses the default browser User-Agent. For a custom one, use
/// [`fetch_with_options`].
pub async fn fetch(url: &str) -> Result<Page, FetchError> {
    fetch_with_options(url, FetchOptions::default()).await
}

/// Fetch a URL with custom options
pub async fn fetch_with_options(url: &str, options: FetchOptions) -> Result<Page, FetchError> {
    // Validate URL early
    if url.is_empty() {
        return Err(FetchError::MissingUrl);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FetchError::InvalidUrlScheme);
    }
    Url::parse(url).map_err(|_| FetchError::InvalidUrlScheme)?;

    // Build headers
    let mut headers = HeaderMap::new();
    let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html, application/xhtml+xml, */*;q=0.8"),
    );

    // Build client
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(FetchError::ClientBuildError)?;

    tracing::debug!(url, "Fetching page");

    // Send request
    let response = client.get(url).send().await.map_err(FetchError::from_reqwest)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::RequestError(e.to_string()))?;

    if !is_html(&content_type, &body) {
        return Err(FetchError::NotHtml);
    }

    let extracted = extract::extract(&body)?;
    tracing::debug!(url, title = %extracted.title, bytes = body.len(), "Extracted page text");

    Ok(Page::new(url, extracted.title, extracted.text))
}

/// Check if content is HTML based on content type and body
fn is_html(content_type: &Option<String>, body: &str) -> bool {
    // Check Content-Type
    if let Some(ct) = content_type {
        let ct_lower = ct.to_lowercase();
        if ct_lower.contains("text/html") || ct_lower.contains("application/xhtml") {
            return true;
        }
    }

    // Check body start
    let trimmed = body.trim_start();
    trimmed.starts_with("<!DOCTYPE") || trimmed.starts_with("<html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_empty_url() {
        let result = fetch("").await;
        assert!(matches!(result, Err(FetchError::MissingUrl)));
    }

    #[tokio::test]
    async fn test_fetch_invalid_scheme() {
        let result = fetch("ftp://example.com").await;
        assert!(matches!(result, Err(FetchError::InvalidUrlScheme)));
    }

    #[tokio::test]
    async fn test_fetch_unparseable_url() {
        let result = fetch("http://").await;
        assert!(matches!(result, Err(FetchError::InvalidUrlScheme)));
    }

    #[test]
    fn test_fetch_options_default() {
        let options = FetchOptions::default();
        assert!(options.user_agent.is_none());
    }

    #[test]
    fn test_is_html_by_content_type() {
        assert!(is_html(&Some("text/html".to_string()), ""));
        assert!(is_html(&Some("text/html; charset=utf-8".to_string()), ""));
        assert!(is_html(&Some("application/xhtml+xml".to_string()), ""));
        assert!(!is_html(&Some("text/plain".to_string()), ""));
        assert!(!is_html(&Some("application/json".to_string()), ""));
    }

    #[test]
    fn test_is_html_by_body() {
        assert!(is_html(&None, "<!DOCTYPE html><html>"));
        assert!(is_html(&None, "  <!DOCTYPE html>"));
        assert!(is_html(&None, "<html><body>"));
        assert!(!is_html(&None, "Hello world"));
        assert!(!is_html(&None, "{\"json\": true}"));
    }
}
