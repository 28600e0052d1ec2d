//! Opaque conversation identity tokens.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle identifying a conversation's backing widget in the host's
/// accessibility tree.
///
/// The host issues these tokens and guarantees they are stable for the
/// lifetime of the widget they stand for. This crate never dereferences an
/// anchor; it only stores and compares it, so the core stays decoupled from
/// the external tree's own mutation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct AnchorId(u64);

impl AnchorId {
    /// Wrap a raw handle value issued by the boundary.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Extract the raw handle value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "anchor#{}", self.0)
    }
}

impl From<u64> for AnchorId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<AnchorId> for u64 {
    #[inline]
    fn from(anchor: AnchorId) -> Self {
        anchor.0
    }
}
