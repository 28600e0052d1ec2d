//! Shared message history spanning all conversations.

use super::error::HistoryResult;
use super::ring::RingBuffer;

/// One recorded message together with the room it came from.
///
/// An empty `room_name` marks a message whose conversation could not be
/// identified when it was recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrossEntry {
    /// The recorded message text.
    pub message: String,
    /// Display name of the originating chat room.
    pub room_name: String,
}

/// The capacity-bounded log of recent messages across every known
/// conversation, kept in lock-step insertion order with the per-conversation
/// histories.
///
/// Unlike the per-conversation buffers this history pairs each message with
/// its room name, so a recalled entry can still be attributed after the
/// originating conversation scrolled out of focus.
#[derive(Clone, Debug)]
pub struct CrossHistory {
    entries: RingBuffer<CrossEntry>,
}

impl CrossHistory {
    /// Create a history retaining `capacity` entries, seeded with empty
    /// entries so recall by rank is always defined.
    ///
    /// # Errors
    /// Returns [`super::HistoryError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> HistoryResult<Self> {
        Ok(Self {
            entries: RingBuffer::new(capacity, CrossEntry::default())?,
        })
    }

    /// Record a message attributed to `room_name`. Pass an empty room name
    /// for messages from an unidentified conversation.
    pub fn record(&mut self, message: impl Into<String>, room_name: impl Into<String>) {
        let entry = CrossEntry {
            message: message.into(),
            room_name: room_name.into(),
        };
        tracing::trace!(room = %entry.room_name, "recording cross-conversation message");
        self.entries.push(entry);
    }

    /// Look up an entry by recency rank (rank 0 is the newest).
    ///
    /// # Errors
    /// Returns [`super::HistoryError::IndexOutOfRange`] if `rank` is not
    /// below the number of retained entries.
    pub fn recall(&self, rank: usize) -> HistoryResult<&CrossEntry> {
        self.entries.recall(rank)
    }

    /// Iterate over the retained entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &CrossEntry> {
        self.entries.iter()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
