//! Fixed-capacity buffer with FIFO eviction.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::error::{HistoryError, HistoryResult};

/// A fixed-capacity, insertion-ordered buffer that drops its oldest entry
/// once full.
///
/// The buffer is seeded with `capacity` clones of a fill value at
/// construction, so recall by recency rank is defined from the first call
/// onward. Capacity never changes after construction, and `len()` stays
/// pinned at `capacity` once the buffer has filled.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> RingBuffer<T> {
    /// Create a buffer holding `capacity` entries, every slot seeded with
    /// `fill`.
    ///
    /// # Errors
    /// Returns [`HistoryError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize, fill: T) -> HistoryResult<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(HistoryError::InvalidCapacity)?;
        Ok(Self::with_capacity(capacity, fill))
    }

    /// Create a buffer from an already-validated capacity.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize, fill: T) -> Self {
        let capacity = capacity.get();
        let mut items = VecDeque::with_capacity(capacity);
        items.resize(capacity, fill);
        Self { items, capacity }
    }
}

impl<T> RingBuffer<T> {
    /// Append a value as the newest entry, evicting the oldest when full.
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(value);
    }

    /// Iterate over the retained entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the buffer holds no entries.
    ///
    /// Seeded buffers are never empty; this exists for completeness of the
    /// container API.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The fixed capacity chosen at construction.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the next push will evict the oldest entry.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Look up an entry by recency rank: rank 0 is the newest entry,
    /// rank 1 the one before it, and so on.
    ///
    /// # Errors
    /// Returns [`HistoryError::IndexOutOfRange`] if `rank` is not below the
    /// number of retained entries.
    pub fn recall(&self, rank: usize) -> HistoryResult<&T> {
        let miss = HistoryError::IndexOutOfRange {
            rank,
            len: self.items.len(),
        };
        let index = self.items.len().checked_sub(rank + 1).ok_or(miss.clone())?;
        self.items.get(index).ok_or(miss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        let result = RingBuffer::new(0, String::new());
        assert_eq!(result.unwrap_err(), HistoryError::InvalidCapacity);
    }

    #[test]
    fn test_seeded_to_capacity() {
        let buffer = RingBuffer::new(4, 0u32).unwrap();
        assert_eq!(buffer.len(), 4);
        assert!(buffer.is_full());
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut buffer = RingBuffer::new(3, 0u32).unwrap();
        for value in 1..=20 {
            buffer.push(value);
            assert!(buffer.len() <= buffer.capacity());
            assert_eq!(buffer.len(), 3);
        }
    }

    #[test]
    fn test_fifo_keeps_last_capacity_values() {
        let mut buffer = RingBuffer::new(3, 0u32).unwrap();
        for value in 1..=7 {
            buffer.push(value);
        }
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7]);
    }

    #[test]
    fn test_recall_counts_back_from_newest() {
        let mut buffer = RingBuffer::new(3, String::new()).unwrap();
        for text in ["one", "two", "three"] {
            buffer.push(text.to_string());
        }
        assert_eq!(buffer.recall(0).unwrap(), "three");
        assert_eq!(buffer.recall(1).unwrap(), "two");
        assert_eq!(buffer.recall(2).unwrap(), "one");
    }

    #[test]
    fn test_recall_out_of_range() {
        let buffer = RingBuffer::new(3, 0u32).unwrap();
        assert_eq!(
            buffer.recall(3).unwrap_err(),
            HistoryError::IndexOutOfRange { rank: 3, len: 3 }
        );
    }
}
