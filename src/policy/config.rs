//! User-facing presentation settings.
//!
//! The host owns persistence of these settings; the core receives the
//! current value as an argument on every policy decision, never reading
//! ambient state. That keeps the decision functions pure and testable.

use serde::{Deserialize, Serialize};

use crate::history::{HistoryError, HistoryResult};

/// Which conversations' messages are announced, based on focus.
///
/// Closed three-way policy; arbitration matches exhaustively over it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbosityMode {
    /// Announce every message regardless of focus.
    #[default]
    All,
    /// Announce messages from every conversation, but only while the chat
    /// application itself has input focus.
    AllIfAppFocused,
    /// Announce only messages from the focused conversation.
    FocusedConversationOnly,
}

/// Presentation settings consumed by the policy decisions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Which conversations' messages are announced.
    pub verbosity: VerbosityMode,
    /// Prefix unfocused messages with the chat room name.
    pub announce_room_name: bool,
    /// Announce when a buddy starts or stops typing.
    pub announce_typing: bool,
    /// Recall from the focused conversation's own history instead of the
    /// shared cross-conversation history.
    pub per_room_history: bool,
    /// How many messages each history retains. Derived from the number of
    /// recall keys the host has bound.
    pub recall_depth: usize,
}

impl PresentationConfig {
    /// Retention depth matching the original nine recall key bindings.
    pub const DEFAULT_RECALL_DEPTH: usize = 9;

    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verbosity mode.
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: VerbosityMode) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set whether unfocused messages are prefixed with the room name.
    #[must_use]
    pub const fn with_room_name(mut self, announce: bool) -> Self {
        self.announce_room_name = announce;
        self
    }

    /// Set whether typing-status changes are announced.
    #[must_use]
    pub const fn with_typing(mut self, announce: bool) -> Self {
        self.announce_typing = announce;
        self
    }

    /// Set whether recall reads per-room histories.
    #[must_use]
    pub const fn with_per_room_history(mut self, per_room: bool) -> Self {
        self.per_room_history = per_room;
        self
    }

    /// Set the history retention depth.
    #[must_use]
    pub const fn with_recall_depth(mut self, depth: usize) -> Self {
        self.recall_depth = depth;
        self
    }

    /// Check the config for values the core cannot operate with.
    ///
    /// # Errors
    /// Returns [`HistoryError::InvalidCapacity`] if `recall_depth` is zero.
    pub const fn validate(&self) -> HistoryResult<()> {
        if self.recall_depth == 0 {
            return Err(HistoryError::InvalidCapacity);
        }
        Ok(())
    }

    /// Flip the room-name prefix setting, returning the confirmation line
    /// the host should present.
    pub const fn toggle_room_name(&mut self) -> &'static str {
        self.announce_room_name = !self.announce_room_name;
        if self.announce_room_name {
            "speak chat room name."
        } else {
            "Do not speak chat room name."
        }
    }

    /// Flip the typing-announcement setting, returning the confirmation
    /// line the host should present.
    pub const fn toggle_typing(&mut self) -> &'static str {
        self.announce_typing = !self.announce_typing;
        if self.announce_typing {
            "announce when your buddies are typing."
        } else {
            "Do not announce when your buddies are typing."
        }
    }

    /// Flip the per-room-history setting, returning the confirmation line
    /// the host should present.
    pub const fn toggle_per_room_history(&mut self) -> &'static str {
        self.per_room_history = !self.per_room_history;
        if self.per_room_history {
            "Provide chat room specific message histories."
        } else {
            "Do not provide chat room specific message histories."
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            verbosity: VerbosityMode::All,
            announce_room_name: false,
            announce_typing: false,
            per_room_history: false,
            recall_depth: Self::DEFAULT_RECALL_DEPTH,
        }
    }
}
