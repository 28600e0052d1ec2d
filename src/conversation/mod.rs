//! Conversation records and identity resolution.

pub mod anchor;
pub mod registry;
pub mod types;

pub use anchor::AnchorId;
pub use registry::ConversationRegistry;
pub use types::Conversation;
