//! Assistant chat bubble state.
//!
//! There is no model behind it: every visitor message gets the same canned
//! reply after `REPLY_DELAY`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

pub const GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";
pub const CANNED_REPLY: &str = "Thank you for your message! I'm a simple AI assistant. \
For real inquiries, please contact me through the contact form.";
pub const REPLY_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Visitor,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub draft: String,
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            open: false,
            draft: String::new(),
            messages: vec![ChatMessage { sender: Sender::Assistant, text: GREETING.to_owned() }],
        }
    }
}

impl ChatState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Move the draft into the transcript. Returns `false` for a blank draft,
    /// which is left untouched.
    pub fn send(&mut self) -> bool {
        let text = self.draft.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage { sender: Sender::Visitor, text: text.to_owned() });
        self.draft.clear();
        true
    }

    pub fn push_reply(&mut self) {
        self.messages.push(ChatMessage { sender: Sender::Assistant, text: CANNED_REPLY.to_owned() });
    }
}
