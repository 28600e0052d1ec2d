//! Conversation tracking and announcement policy for assistive chat support.
//!
//! This crate is the memory-resident core behind a screen reader's chat
//! module: it keeps a bounded history of recent messages per conversation
//! and across all conversations, resolves which conversation an observed
//! event belongs to, and decides whether a message should be announced
//! given the user's verbosity settings and the current focus state.
//!
//! Sensing (accessibility-tree traversal) and rendering (speech, braille)
//! live in the host; this crate only consumes boundary events and produces
//! announcement and recall values.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Conversation records and identity resolution.
pub mod conversation;
/// Bounded, eviction-ordered message histories.
pub mod history;
/// Presentation settings and announcement arbitration.
pub mod policy;
/// Event-facing orchestration over histories and policy.
pub mod support;
