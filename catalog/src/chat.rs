//! Shopping-assistant transcript.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

/// Greeting the assistant opens every conversation with.
pub const ASSISTANT_GREETING: &str = "Hi there! I'm your personal shopping assistant. Tell me what you're looking for, and I'll find the best options for you.";

/// Who authored a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

/// Ordered, append-only list of chat turns.
///
/// Entries are never removed or reordered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// A transcript opened by the assistant greeting.
    #[must_use]
    pub fn with_greeting() -> Self {
        let mut transcript = Self::default();
        transcript.push_assistant(ASSISTANT_GREETING);
        transcript
    }

    /// Append a user turn, stored without surrounding whitespace, and return it.
    pub fn push_user(&mut self, content: impl Into<String>) -> &ChatMessage {
        let content = content.into();
        self.push(ChatMessage::new(ChatRole::User, content.trim()))
    }

    /// Append an assistant turn and return it.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::new(ChatRole::Assistant, content))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        let last = self.messages.len() - 1;
        &self.messages[last]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ChatMessage] {
        &self.messages
    }
}
