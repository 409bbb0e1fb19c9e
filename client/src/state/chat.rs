//! Shopping-assistant chat state.
//!
//! Sending appends the user's turn immediately. No assistant reply is
//! generated here; `receive_reply` is where a reply source plugs in.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use catalog::Transcript;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub transcript: Transcript,
    pub input: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { transcript: Transcript::with_greeting(), input: String::new() }
    }
}

impl ChatState {
    /// Append the current input as a user turn and clear the input.
    ///
    /// Blank input is ignored. Returns the id of the appended message.
    pub fn send(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let content = std::mem::take(&mut self.input);
        Some(self.transcript.push_user(content.trim()).id.clone())
    }

    /// Append an assistant turn.
    pub fn receive_reply(&mut self, content: impl Into<String>) {
        self.transcript.push_assistant(content);
    }
}
