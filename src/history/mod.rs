//! Bounded, eviction-ordered message histories.

pub mod cross;
pub mod error;
pub mod ring;

pub use cross::{CrossEntry, CrossHistory};
pub use error::{HistoryError, HistoryResult};
pub use ring::RingBuffer;
