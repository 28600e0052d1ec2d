//! Registry of known conversations.

use std::num::NonZeroUsize;

use crate::history::{HistoryError, HistoryResult};

use super::anchor::AnchorId;
use super::types::Conversation;

/// Owns one [`Conversation`] record per known chat, in discovery order.
///
/// Identity is the anchor token: no two entries ever share one. Lookup by
/// name exists only for text-input-area events, which carry no anchor of
/// their own; it matches on exact name equality.
#[derive(Clone, Debug)]
pub struct ConversationRegistry {
    conversations: Vec<Conversation>,
    recall_depth: NonZeroUsize,
}

impl ConversationRegistry {
    /// Create a registry whose conversations each retain `recall_depth`
    /// messages.
    ///
    /// # Errors
    /// Returns [`HistoryError::InvalidCapacity`] if `recall_depth` is zero.
    pub fn new(recall_depth: usize) -> HistoryResult<Self> {
        let recall_depth =
            NonZeroUsize::new(recall_depth).ok_or(HistoryError::InvalidCapacity)?;
        Ok(Self {
            conversations: Vec::new(),
            recall_depth,
        })
    }

    /// Find a conversation by its anchor token.
    #[must_use]
    pub fn resolve_anchor(&self, anchor: AnchorId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.anchor() == anchor)
    }

    /// Find a conversation by its anchor token, mutably.
    pub fn resolve_anchor_mut(&mut self, anchor: AnchorId) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.anchor() == anchor)
    }

    /// Find a conversation by exact display name. Only used when resolving
    /// from a text-entry context, where no anchor is available.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<&Conversation> {
        if name.is_empty() {
            return None;
        }
        self.conversations.iter().find(|c| c.name() == name)
    }

    /// Return the conversation for `anchor`, creating and registering it
    /// under `name` if the anchor is not yet known. Idempotent: a known
    /// anchor returns the existing record and `name` is ignored.
    pub fn register_if_absent(&mut self, name: &str, anchor: AnchorId) -> &mut Conversation {
        if let Some(index) = self.conversations.iter().position(|c| c.anchor() == anchor) {
            return &mut self.conversations[index];
        }
        tracing::debug!(%anchor, name, "registering new conversation");
        self.conversations
            .push(Conversation::new(name, anchor, self.recall_depth));
        let last = self.conversations.len() - 1;
        &mut self.conversations[last]
    }

    /// Remove the conversation registered under `anchor`, reporting whether
    /// a removal occurred. Unused by the default event flow; hosts that
    /// track window closure call this.
    pub fn remove(&mut self, anchor: AnchorId) -> bool {
        let before = self.conversations.len();
        self.conversations.retain(|c| c.anchor() != anchor);
        self.conversations.len() != before
    }

    /// Iterate over the known conversations in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }

    /// Number of known conversations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Whether no conversation has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Message retention depth applied to each conversation.
    #[must_use]
    pub const fn recall_depth(&self) -> NonZeroUsize {
        self.recall_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(
            ConversationRegistry::new(0).unwrap_err(),
            HistoryError::InvalidCapacity
        );
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = ConversationRegistry::new(9).unwrap();
        let anchor = AnchorId::new(10);
        registry.register_if_absent("Room A", anchor);
        // Second registration keeps the original record, ignoring the name.
        let again = registry.register_if_absent("Renamed", anchor);
        assert_eq!(again.name(), "Room A");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.recall_depth().get(), 9);
    }

    #[test]
    fn test_resolve_by_anchor_and_name() {
        let mut registry = ConversationRegistry::new(3).unwrap();
        registry.register_if_absent("Room A", AnchorId::new(1));
        registry.register_if_absent("Room B", AnchorId::new(2));

        assert_eq!(
            registry.resolve_anchor(AnchorId::new(2)).unwrap().name(),
            "Room B"
        );
        assert_eq!(
            registry.resolve_name("Room A").unwrap().anchor(),
            AnchorId::new(1)
        );
        assert!(registry.resolve_anchor(AnchorId::new(3)).is_none());
        assert!(registry.resolve_name("Room C").is_none());
        assert!(registry.resolve_name("").is_none());
    }

    #[test]
    fn test_remove_by_anchor() {
        let mut registry = ConversationRegistry::new(3).unwrap();
        registry.register_if_absent("Room A", AnchorId::new(1));
        assert!(registry.remove(AnchorId::new(1)));
        assert!(!registry.remove(AnchorId::new(1)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_discovery_order_preserved() {
        let mut registry = ConversationRegistry::new(3).unwrap();
        registry.register_if_absent("B", AnchorId::new(2));
        registry.register_if_absent("A", AnchorId::new(1));
        let names: Vec<&str> = registry.iter().map(Conversation::name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
