//! Boundary types exchanged with the host.
//!
//! Inputs arrive from the host's accessibility event loop; outputs are
//! handed to its speech/braille layer. The core never formats output with
//! markup and owns no persistent state for these values.

use serde::{Deserialize, Serialize};

use crate::conversation::AnchorId;

/// A text event observed in a conversation widget.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Identity token of the widget the event came from.
    pub anchor: AnchorId,
    /// The raw inserted text.
    pub text: String,
    /// Whether the event reflects a buddy's typing status rather than a
    /// chat message.
    pub typing_status_change: bool,
}

impl MessageEvent {
    /// Create a chat-message event.
    #[must_use]
    pub fn message(anchor: AnchorId, text: impl Into<String>) -> Self {
        Self {
            anchor,
            text: text.into(),
            typing_status_change: false,
        }
    }

    /// Create a typing-status event.
    #[must_use]
    pub fn typing(anchor: AnchorId, status: impl Into<String>) -> Self {
        Self {
            anchor,
            text: status.into(),
            typing_status_change: true,
        }
    }
}

/// The host's best guess at a conversation's display name, used when the
/// anchor is not yet registered.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentityHint {
    /// Identity token the name belongs to.
    pub anchor: AnchorId,
    /// Candidate display name extracted from the accessibility tree.
    pub candidate_name: String,
}

impl IdentityHint {
    /// Create a hint pairing `anchor` with a candidate name.
    #[must_use]
    pub fn new(anchor: AnchorId, candidate_name: impl Into<String>) -> Self {
        Self {
            anchor,
            candidate_name: candidate_name.into(),
        }
    }
}

/// Focus snapshot supplied by the host alongside each event.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct FocusState {
    /// Whether the chat application has input focus.
    pub host_focused: bool,
    /// Whether the event's conversation is the focused one.
    pub conversation_focused: bool,
}

impl FocusState {
    /// Create a focus snapshot.
    #[must_use]
    pub const fn new(host_focused: bool, conversation_focused: bool) -> Self {
        Self {
            host_focused,
            conversation_focused,
        }
    }
}

/// Text the host should forward to speech/braille output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementRequest {
    /// The text to present, plain and markup-free.
    pub text: String,
    /// Whether the host should interrupt in-progress output.
    pub urgent: bool,
}

impl AnnouncementRequest {
    /// Create a non-urgent announcement.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            urgent: false,
        }
    }

    /// Mark the announcement as urgent.
    #[must_use]
    pub const fn urgent(mut self) -> Self {
        self.urgent = true;
        self
    }
}

/// A recalled message together with the room it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallResult {
    /// The recalled message text.
    pub message: String,
    /// Display name of the room the message came from.
    pub room_name: String,
}
