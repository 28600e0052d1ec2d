//! Error types for the history buffers.

use thiserror::Error;

/// Errors raised by the bounded history buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A buffer was constructed with a capacity of zero.
    #[error("history capacity must be greater than zero")]
    InvalidCapacity,

    /// A recall rank points beyond the retained entries.
    #[error("recall rank {rank} is beyond the {len} retained entries")]
    IndexOutOfRange {
        /// The requested recency rank.
        rank: usize,
        /// Number of entries currently retained.
        len: usize,
    },
}

/// Convenience result alias for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;
