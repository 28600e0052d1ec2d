//! Presentation settings and announcement arbitration.

pub mod config;
pub mod decision;

pub use config::{PresentationConfig, VerbosityMode};
pub use decision::{format_announcement, recall_rank_for_key, should_announce};
