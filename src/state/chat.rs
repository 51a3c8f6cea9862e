//! Breed-scoped chat conversation.

use crate::models::ChatMessage;

/// Shown in place of an answer when the chat request fails.
pub const CHAT_FALLBACK_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Sample questions for the empty conversation hint.
pub const SAMPLE_QUESTIONS: [&str; 2] = [
    "What foods help with joint health?",
    "What portion sizes are recommended?",
];

/// A question ready to be sent to the chatbot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub session: u64,
    pub breed: String,
    pub question: String,
}

/// Conversation about one breed.
///
/// Messages are append-only and live as long as the panel. A new breed result
/// gets a new panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPanel {
    session: u64,
    breed: String,
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl ChatPanel {
    pub fn new(session: u64, breed: impl Into<String>) -> Self {
        Self {
            session,
            breed: breed.into(),
            messages: Vec::new(),
            pending: false,
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a reply is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Append the user's question and hand back the request to dispatch.
    ///
    /// Blank input and submits while a reply is pending return `None`.
    pub fn submit_question(&mut self, text: &str) -> Option<ChatRequest> {
        if self.pending || text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.pending = true;
        Some(ChatRequest {
            session: self.session,
            breed: self.breed.clone(),
            question: text.to_string(),
        })
    }

    /// Append the assistant's answer. Returns false if no reply was expected.
    pub fn apply_answer(&mut self, answer: impl Into<String>) -> bool {
        self.finish(ChatMessage::assistant(answer))
    }

    /// Append the fixed fallback message. Returns false if no reply was expected.
    pub fn apply_failure(&mut self) -> bool {
        self.finish(ChatMessage::assistant(CHAT_FALLBACK_MESSAGE))
    }

    fn finish(&mut self, message: ChatMessage) -> bool {
        if !self.pending {
            return false;
        }
        self.messages.push(message);
        self.pending = false;
        true
    }
}
