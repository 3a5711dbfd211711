//! Conversation session.
//!
//! Append-only transcript owned by the screen driving the dispatcher.
//! Display and audit only: classification never reads the session, and
//! messages are never mutated or reordered once appended.

use serde::{Deserialize, Serialize};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry, immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    /// Strictly increasing within the owning session
    pub sequence: u64,
}

/// Ordered log of exchanged messages, grows only by append
#[derive(Debug, Clone, Default)]
pub struct ConversationSession {
    messages: Vec<Message>,
    next_sequence: u64,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a reference to the stored entry
    pub fn push(&mut self, role: Role, text: impl Into<String>) -> &Message {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.messages.push(Message {
            role,
            text: text.into(),
            sequence,
        });
        self.messages.last().expect("just pushed")
    }

    /// Transcript in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
