//! Conversation log shared by the manual responder and the demo script.
//!
//! The store is the single source of truth for chat rendering: append-only in
//! normal operation, with one atomic [`ConversationStore::reset`] used when
//! the demo script runs out. Message ids come from a counter that never goes
//! backwards, so ordering stays stable across a reset.

use serde::Serialize;

/// Greeting shown before anyone has said anything.
pub const GREETING: &str =
    "Xin chào! Tôi là GreenAI. Bạn muốn kiểm tra trạng thái cây hay xem phân tích kiến trúc hệ thống?";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One immutable chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Strictly increasing within a session.
    pub id: u64,
    pub sender: Sender,
    pub body: String,
}

/// Ordered, append-only log of chat messages.
pub struct ConversationStore {
    next_id: u64,
    messages: Vec<ChatMessage>,
}

impl ConversationStore {
    /// A store seeded with the assistant greeting.
    pub fn new() -> Self {
        let mut store = Self {
            next_id: 1,
            messages: Vec::new(),
        };
        store.append(Sender::Assistant, GREETING);
        store
    }

    /// Append a message and return its id.
    pub fn append(&mut self, sender: Sender, body: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            body: body.into(),
        });
        id
    }

    /// Discard the whole history and start over with a single message.
    ///
    /// The id counter keeps running, so the reset message's id is still
    /// larger than anything discarded.
    pub fn reset(&mut self, sender: Sender, body: impl Into<String>) -> u64 {
        self.messages.clear();
        self.append(sender, body)
    }

    /// All messages, oldest first.
    pub fn all(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
