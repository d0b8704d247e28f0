//! PageBrief - webpage summarization library
//!
//! This crate fetches a webpage, extracts its visible text, and asks an
//! OpenAI-compatible chat-completion endpoint for a short markdown summary.
//!
//! ## Pipeline
//!
//! 1. [`fetch`] performs one HTTP GET and parses the result into a [`Page`]
//!    (title plus visible body text, with scripts, styles, images, and form
//!    inputs removed).
//! 2. [`messages_for`] turns the page into the two-message prompt.
//! 3. [`Summarizer`] sends the prompt to the configured endpoint and returns
//!    the first completion's content unmodified.

pub mod completion;
mod error;
mod extract;
pub mod fetch;
mod page;
pub mod prompt;
mod summarize;

pub use completion::{ApiConfig, CompletionClient, API_KEY_ENV, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use error::{CompletionError, ConfigError, FetchError, SummarizeError};
pub use extract::DEFAULT_TITLE;
pub use fetch::{fetch, fetch_with_options, FetchOptions};
pub use page::Page;
pub use prompt::{messages_for, user_prompt_for, ChatMessage, SYSTEM_PROMPT};
pub use summarize::Summarizer;

/// Default User-Agent string
///
/// Some sites refuse requests without a browser-looking User-Agent, so the
/// default mimics a desktop Chrome.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";
