//! The chat support orchestrator.

use tracing::{debug, trace};

use crate::conversation::{AnchorId, ConversationRegistry};
use crate::history::{CrossHistory, HistoryResult};
use crate::policy::{
    PresentationConfig, format_announcement, recall_rank_for_key, should_announce,
};

use super::events::{
    AnnouncementRequest, FocusState, IdentityHint, MessageEvent, RecallResult,
};

/// Ties the conversation registry, the cross-conversation history, and the
/// presentation policy together behind the host's event loop.
///
/// All operations are synchronous and perform no I/O. The orchestrator has
/// no internal locking: the host either delivers events from a single
/// thread, or wraps the whole value in one mutex so that resolving a
/// conversation and appending to its history stay one transaction.
#[derive(Clone, Debug)]
pub struct ChatSupport {
    registry: ConversationRegistry,
    cross_history: CrossHistory,
}

impl ChatSupport {
    /// Create an orchestrator sized by `config.recall_depth`.
    ///
    /// The depth is fixed here for the lifetime of the histories; a host
    /// that rebinds its recall keys builds a fresh orchestrator.
    ///
    /// # Errors
    /// Returns [`crate::history::HistoryError::InvalidCapacity`] if the
    /// config's recall depth is zero.
    pub fn new(config: &PresentationConfig) -> HistoryResult<Self> {
        config.validate()?;
        Ok(Self {
            registry: ConversationRegistry::new(config.recall_depth)?,
            cross_history: CrossHistory::new(config.recall_depth)?,
        })
    }

    /// Consume one observed text event, recording it and deciding whether
    /// it should be announced.
    ///
    /// Chat messages are stripped of trailing newlines, appended to the
    /// originating conversation's history and the cross-conversation
    /// history in lock-step, and then arbitrated against `config` and
    /// `focus`. Empty messages are neither recorded nor announced. Typing
    /// events are routed to [`Self::handle_typing`].
    pub fn handle_message(
        &mut self,
        event: &MessageEvent,
        hint: &IdentityHint,
        focus: FocusState,
        config: &PresentationConfig,
    ) -> Option<AnnouncementRequest> {
        if event.typing_status_change {
            return self.handle_typing(event.anchor, &event.text, config);
        }

        let message = event.text.trim_end_matches('\n');
        if message.is_empty() {
            return None;
        }

        let conversation = self
            .registry
            .register_if_absent(&hint.candidate_name, event.anchor);
        conversation.push_message(message);
        let room_name = conversation.name().to_string();
        self.cross_history.record(message, room_name.as_str());
        trace!(room = %room_name, "message recorded");

        if !should_announce(config.verbosity, focus.host_focused, focus.conversation_focused) {
            debug!(room = %room_name, mode = ?config.verbosity, "announcement suppressed");
            return None;
        }

        format_announcement(
            &room_name,
            message,
            config.announce_room_name,
            focus.conversation_focused,
        )
        .map(AnnouncementRequest::new)
    }

    /// Consume a typing-status change for the conversation at `anchor`.
    ///
    /// Announces only when the user asked for typing announcements and the
    /// status actually differs from the last announced one. An unknown
    /// anchor is a no-op: late or malformed events never interrupt the
    /// host's loop.
    pub fn handle_typing(
        &mut self,
        anchor: AnchorId,
        status: &str,
        config: &PresentationConfig,
    ) -> Option<AnnouncementRequest> {
        if !config.announce_typing {
            return None;
        }
        let conversation = self.registry.resolve_anchor_mut(anchor)?;
        if !conversation.set_typing_status(status) {
            trace!(%anchor, "typing status unchanged");
            return None;
        }
        if status.trim().is_empty() {
            return None;
        }
        Some(AnnouncementRequest::new(status))
    }

    /// Recall a prior message by recall-key position: key 0 reads the
    /// newest retained message, key 1 the one before it, and so on.
    ///
    /// With per-room histories enabled and a resolvable focused
    /// conversation, the read comes from that conversation's own history;
    /// otherwise it comes from the shared cross-conversation history.
    /// Ranks beyond the retained history and slots still holding their
    /// seed value yield `None`.
    #[must_use]
    pub fn recall(
        &self,
        key_index: usize,
        focused_anchor: Option<AnchorId>,
        config: &PresentationConfig,
    ) -> Option<RecallResult> {
        let rank = recall_rank_for_key(key_index);

        if config.per_room_history {
            if let Some(conversation) =
                focused_anchor.and_then(|anchor| self.registry.resolve_anchor(anchor))
            {
                let message = conversation.nth_message(rank).ok()?;
                if message.is_empty() {
                    return None;
                }
                return Some(RecallResult {
                    message: message.to_string(),
                    room_name: conversation.name().to_string(),
                });
            }
        }

        let entry = self.cross_history.recall(rank).ok()?;
        if entry.message.is_empty() {
            return None;
        }
        Some(RecallResult {
            message: entry.message.clone(),
            room_name: entry.room_name.clone(),
        })
    }

    /// The known conversations.
    #[must_use]
    pub const fn registry(&self) -> &ConversationRegistry {
        &self.registry
    }

    /// The shared history spanning all conversations.
    #[must_use]
    pub const fn cross_history(&self) -> &CrossHistory {
        &self.cross_history
    }
}
