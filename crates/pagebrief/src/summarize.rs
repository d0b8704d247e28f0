//! Summarization entry points

use crate::completion::{ApiConfig, CompletionClient};
use crate::error::{CompletionError, SummarizeError};
use crate::fetch;
use crate::page::Page;
use crate::prompt::messages_for;

/// Summarizes pages through one configured completion client
///
/// Construct once and reuse; each call is an independent request/response
/// exchange with no shared mutable state.
pub struct Summarizer {
    client: CompletionClient,
}

impl Summarizer {
    /// Create a summarizer for the given config
    pub fn new(config: ApiConfig) -> Result<Self, CompletionError> {
        Ok(Self {
            client: CompletionClient::new(config)?,
        })
    }

    /// Model identifier summaries are requested from
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Summarize an already-fetched page
    pub async fn summarize(&self, page: &Page) -> Result<String, CompletionError> {
        tracing::debug!(url = %page.url, title = %page.title, "Requesting summary");
        self.client.complete(&messages_for(page)).await
    }

    /// Fetch a URL and summarize it in one call
    pub async fn summarize_url(&self, url: &str) -> Result<String, SummarizeError> {
        let page = fetch::fetch(url).await?;
        Ok(self.summarize(&page).await?)
    }
}
