//! Event-facing orchestration over histories and policy.

pub mod core;
pub mod events;

pub use core::ChatSupport;
pub use events::{
    AnnouncementRequest, FocusState, IdentityHint, MessageEvent, RecallResult,
};
