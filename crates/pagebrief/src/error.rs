//! Error types for PageBrief

use thiserror::Error;

/// Errors that can occur while fetching and parsing a page
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL is missing
    #[error("Missing required parameter: url")]
    MissingUrl,

    /// URL has invalid scheme
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrlScheme,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    ConnectError(#[source] reqwest::Error),

    /// Other request error
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {0}")]
    HttpStatus(u16),

    /// Response body is not HTML
    #[error("Response is not HTML")]
    NotHtml,

    /// Parsed document has no body element
    #[error("Document has no <body> element")]
    MissingBody,
}

impl FetchError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_connect() {
            FetchError::ConnectError(err)
        } else {
            FetchError::RequestError(err.to_string())
        }
    }
}

/// Errors that can occur while requesting a completion
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// Request never completed
    #[error("Completion request failed: {0}")]
    RequestError(String),

    /// Endpoint answered with a non-success status
    #[error("Completion endpoint returned HTTP {status}: {detail}")]
    ApiStatus {
        /// HTTP status code
        status: u16,
        /// Excerpt of the response body
        detail: String,
    },

    /// Response body did not decode as a chat completion
    #[error("Failed to decode completion response: {0}")]
    InvalidResponse(String),

    /// Response decoded but carried no choices
    #[error("Completion response contained no choices")]
    NoChoices,
}

/// Errors raised while assembling configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The credential environment variable is unset or blank
    #[error("{0} is not set; export it with your API key")]
    MissingApiKey(&'static str),
}

/// Umbrella error for the end-to-end fetch-then-summarize operation
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Page fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Completion call failed
    #[error(transparent)]
    Completion(#[from] CompletionError),
}
