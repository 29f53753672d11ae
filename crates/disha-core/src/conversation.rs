//! Append-only conversation log.
//!
//! Owned exclusively by the app context and mutated only in response to
//! discrete user events; messages order by submission, never by completion
//! of the cosmetic typing delay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assistant::replies;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Delivery status of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Error,
}

/// One entry in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub status: DeliveryStatus,
}

impl ConversationMessage {
    fn new(sender: Sender, text: impl Into<String>, status: DeliveryStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            status,
        }
    }
}

/// Ordered, insertion-ordered message log.
///
/// Starts with (and resets to) a single assistant greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationLog {
    messages: Vec<ConversationMessage>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self {
            messages: vec![ConversationMessage::new(
                Sender::Assistant,
                replies::OPENING,
                DeliveryStatus::Sent,
            )],
        }
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user message in the `Sending` state; returns its id.
    pub fn push_user(&mut self, text: impl Into<String>) -> Uuid {
        let msg = ConversationMessage::new(Sender::User, text, DeliveryStatus::Sending);
        let id = msg.id;
        self.messages.push(msg);
        id
    }

    /// Append an assistant message, already delivered.
    pub fn push_assistant(&mut self, text: impl Into<String>) -> Uuid {
        let msg = ConversationMessage::new(Sender::Assistant, text, DeliveryStatus::Sent);
        let id = msg.id;
        self.messages.push(msg);
        id
    }

    /// Update the delivery status of an existing message. No-op when the id
    /// is unknown.
    pub fn set_status(&mut self, id: Uuid, status: DeliveryStatus) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) {
            msg.status = status;
        }
    }

    /// Discard all history and reset to the single greeting message.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}
