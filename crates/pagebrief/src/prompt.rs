//! Prompt assembly
//!
//! Every summary request is exactly two messages: the constant system
//! instruction and a user instruction embedding the page title and text.

use serde::{Deserialize, Serialize};

use crate::page::Page;

/// System instruction sent with every summary request
pub const SYSTEM_PROMPT: &str = "You are an assistant that analyzes the contents of a website \
and provides a short summary, ignoring text that might be navigation related. \
Respond in markdown.";

/// One role-tagged message in a chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role: "system", "user", or "assistant"
    pub role: String,
    /// Message body
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Build the user instruction for a page: title first, then the full text
pub fn user_prompt_for(page: &Page) -> String {
    format!(
        "You are looking at a website titled {}\n\
         The contents of this website is as follows; \
         please provide a short summary of this website in markdown. \
         If it includes news or announcements, then summarize these too.\n\n\
         {}",
        page.title, page.text
    )
}

/// Build the two-message prompt for a page
pub fn messages_for(page: &Page) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt_for(page)),
    ]
}
