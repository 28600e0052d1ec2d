//! The per-conversation record.

use std::num::NonZeroUsize;

use crate::history::{HistoryResult, RingBuffer};

use super::anchor::AnchorId;

/// One known chat conversation: its display name, the anchor used to
/// re-recognize it, its own bounded message history, and the last announced
/// typing status.
#[derive(Clone, Debug)]
pub struct Conversation {
    name: String,
    anchor: AnchorId,
    messages: RingBuffer<String>,
    typing_status: String,
}

impl Conversation {
    /// Create a conversation whose history retains `recall_depth` messages,
    /// seeded with empty strings so recall by rank is defined immediately.
    #[must_use]
    pub fn new(name: impl Into<String>, anchor: AnchorId, recall_depth: NonZeroUsize) -> Self {
        Self {
            name: name.into(),
            anchor,
            messages: RingBuffer::with_capacity(recall_depth, String::new()),
            typing_status: String::new(),
        }
    }

    /// The chat room / buddy display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The opaque identity token for this conversation's widget.
    #[must_use]
    pub const fn anchor(&self) -> AnchorId {
        self.anchor
    }

    /// Append a message to this conversation's history.
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Look up a retained message by recency rank (rank 0 is the newest).
    ///
    /// # Errors
    /// Returns [`crate::history::HistoryError::IndexOutOfRange`] if `rank`
    /// is not below the number of retained messages.
    pub fn nth_message(&self, rank: usize) -> HistoryResult<&str> {
        self.messages.recall(rank).map(String::as_str)
    }

    /// The retained message history, oldest first.
    #[must_use]
    pub const fn messages(&self) -> &RingBuffer<String> {
        &self.messages
    }

    /// The last typing status that was announced for this conversation.
    #[must_use]
    pub fn typing_status(&self) -> &str {
        &self.typing_status
    }

    /// Store a new typing status, reporting whether it differed from the
    /// stored one. Some platforms re-emit an unchanged status repeatedly;
    /// callers use the return value to announce only real changes.
    pub fn set_typing_status(&mut self, status: impl Into<String>) -> bool {
        let status = status.into();
        if status == self.typing_status {
            return false;
        }
        self.typing_status = status;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_history_seeded_with_empty_messages() {
        let conversation = Conversation::new("Room A", AnchorId::new(1), depth(9));
        assert_eq!(conversation.messages().len(), 9);
        assert_eq!(conversation.nth_message(0).unwrap(), "");
    }

    #[test]
    fn test_nth_message_by_recency() {
        let mut conversation = Conversation::new("Room A", AnchorId::new(1), depth(3));
        conversation.push_message("first");
        conversation.push_message("second");
        assert_eq!(conversation.nth_message(0).unwrap(), "second");
        assert_eq!(conversation.nth_message(1).unwrap(), "first");
    }

    #[test]
    fn test_typing_status_change_detection() {
        let mut conversation = Conversation::new("Room A", AnchorId::new(1), depth(3));
        assert!(conversation.set_typing_status("typing"));
        assert!(!conversation.set_typing_status("typing"));
        assert!(conversation.set_typing_status("stopped"));
        assert_eq!(conversation.typing_status(), "stopped");
    }
}
