//! Chat with the remote eco assistant.
//!
//! - [`ChatLog`]: append-only, ordered message history
//! - [`InferenceClient`]: one JSON POST per prompt to a text-generation endpoint
//! - [`ChatSession`]: ties both together and owns the loading flag

mod client;
mod session;

pub use client::InferenceClient;
pub use session::ChatSession;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Greeting appended when the chat surface opens.
pub const GREETING: &str = "Hey superhero, ready to make a positive change in the world? Let's take action together and tackle challenges that make a real impact on our planet!";

/// The only thing a user sees when a remote call fails, whatever the cause.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process your request. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
}

/// A single chat entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    id: Uuid,
    content: String,
    author: Author,
    timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, author: Author) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            author,
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Author::User)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, Author::Assistant)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Append-only message history. Insertion order is display order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_preserves_insertion_order() {
        let mut log = ChatLog::new();
        log.append(ChatMessage::user("one"));
        log.append(ChatMessage::assistant("two"));
        log.append(ChatMessage::user("three"));

        let contents: Vec<_> = log.messages().iter().map(ChatMessage::content).collect();
        assert_eq!(contents, ["one", "two", "three"]);
        assert_eq!(log.last().unwrap().author(), Author::User);
    }

    #[test]
    fn messages_get_distinct_ids() {
        let a = ChatMessage::user("hi");
        let b = ChatMessage::user("hi");
        assert_ne!(a.id(), b.id());
        assert!(a.is_user());
        assert!(!ChatMessage::assistant("hey").is_user());
    }

    #[test]
    fn log_serializes_as_array() {
        let mut log = ChatLog::new();
        log.append(ChatMessage::assistant(GREETING));
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json[0]["author"], "assistant");
        assert_eq!(json[0]["content"], GREETING);
    }
}
