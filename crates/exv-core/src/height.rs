//! # Ledger Height
//!
//! `BlockHeight` replaces wall-clock time in the registry. The hosting
//! ledger supplies a monotonically non-decreasing height with every call,
//! and the registry stamps it onto records and events. No wall clock is
//! consulted anywhere, so replaying the same calls yields the same state.

use serde::{Deserialize, Serialize};

/// A ledger height, used as the registry's only notion of time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    /// The genesis height.
    pub const GENESIS: Self = Self(0);

    /// The raw height value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// The following height, saturating at `u64::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for BlockHeight {
    fn from(h: u64) -> Self {
        Self(h)
    }
}

impl std::fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
