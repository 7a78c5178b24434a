use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Success,
    Error,
    Info,
}

// One user-visible notification. Every player action produces exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub message_type: MessageType,
}

impl Message {
    pub fn new(content: impl Into<String>, message_type: MessageType) -> Self {
        Self {
            content: content.into(),
            message_type,
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(content, MessageType::Success)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(content, MessageType::Error)
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(content, MessageType::Info)
    }
}

// Fire-and-forget notifications: the latest one is shown as a toast for
// TOAST_DURATION, older ones are kept in a bounded history.
#[derive(Debug, Default)]
pub struct MessageLog {
    history: VecDeque<Message>,
    shown_at: Option<Instant>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.push_at(message, Instant::now());
    }

    pub fn push_at(&mut self, message: Message, now: Instant) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(message);
        self.shown_at = Some(now);
    }

    pub fn latest(&self) -> Option<&Message> {
        self.history.back()
    }

    /// The latest message while its toast is still visible.
    pub fn toast(&self, now: Instant) -> Option<&Message> {
        let shown_at = self.shown_at?;
        if now.saturating_duration_since(shown_at) < TOAST_DURATION {
            self.latest()
        } else {
            None
        }
    }

    /// Oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &Message> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
