//! Pure arbitration functions over messages, focus, and settings.
//!
//! Every function here is total over its arguments and free of ambient
//! state; the caller supplies the current [`VerbosityMode`] and flags on
//! each call.

use super::config::VerbosityMode;

/// Lead-in spoken before an unfocused room's message when the user asked
/// for room names.
const ROOM_LEAD_IN: &str = "Message from chat room";

/// Decide whether a newly observed message should be announced at all.
///
/// `host_focused` is whether the chat application itself has input focus;
/// `conversation_focused` is whether the message's own conversation does.
#[must_use]
pub const fn should_announce(
    mode: VerbosityMode,
    host_focused: bool,
    conversation_focused: bool,
) -> bool {
    match mode {
        VerbosityMode::All => true,
        VerbosityMode::AllIfAppFocused => host_focused,
        VerbosityMode::FocusedConversationOnly => conversation_focused,
    }
}

/// Build the text to forward to the output boundary, or `None` when there
/// is nothing worth presenting.
///
/// A focused conversation's identity is already evident to the user, so the
/// room name is never prefixed when `focused` is set, regardless of
/// `announce_room_name`. Whitespace-only results are never forwarded.
#[must_use]
pub fn format_announcement(
    room_name: &str,
    message: &str,
    announce_room_name: bool,
    focused: bool,
) -> Option<String> {
    let text = if !focused && announce_room_name && !room_name.trim().is_empty() {
        let mut text = format!("{ROOM_LEAD_IN} {room_name}");
        if !message.is_empty() {
            text.push(' ');
            text.push_str(message);
        }
        text
    } else {
        message.to_string()
    };

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Map a recall key's position among the configured recall keys to a
/// recency rank: the first key reads the newest retained message, the
/// second the one before it, and so on.
#[must_use]
pub const fn recall_rank_for_key(key_index: usize) -> usize {
    key_index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_arbitration_table() {
        use VerbosityMode::{All, AllIfAppFocused, FocusedConversationOnly};

        // (mode, host_focused, conversation_focused, expect_announce)
        let table = [
            (All, false, false, true),
            (AllIfAppFocused, false, true, false),
            (AllIfAppFocused, true, false, true),
            (FocusedConversationOnly, true, false, false),
            (FocusedConversationOnly, true, true, true),
        ];
        for (mode, host, conv, expected) in table {
            assert_eq!(
                should_announce(mode, host, conv),
                expected,
                "mode {mode:?}, host_focused {host}, conversation_focused {conv}"
            );
        }
    }

    #[test]
    fn test_focused_message_never_prefixed() {
        let text = format_announcement("Room A", "hello", true, true).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_unfocused_message_prefixed_when_asked() {
        let text = format_announcement("Room A", "hello", true, false).unwrap();
        assert_eq!(text, "Message from chat room Room A hello");
    }

    #[test]
    fn test_unfocused_message_bare_without_flag() {
        let text = format_announcement("Room A", "hello", false, false).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_empty_room_name_skips_prefix() {
        let text = format_announcement("", "hello", true, false).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_whitespace_only_result_suppressed() {
        assert!(format_announcement("Room A", "   ", false, false).is_none());
        assert!(format_announcement("", "", true, false).is_none());
    }

    #[test]
    fn test_first_recall_key_reads_newest() {
        assert_eq!(recall_rank_for_key(0), 0);
        assert_eq!(recall_rank_for_key(8), 8);
    }
}
