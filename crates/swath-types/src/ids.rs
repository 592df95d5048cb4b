//! Strongly-typed identifiers for simulation entities.
//!
//! Springs and spatial-hash buckets refer to point masses through
//! `PointIndex` rather than raw references, so the point-mass storage
//! can be a single pre-allocated vec that never reallocates under them.

use serde::{Deserialize, Serialize};

/// Index into the point-mass array of a cloth grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointIndex(pub u32);

impl PointIndex {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PointIndex {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<usize> for PointIndex {
    fn from(val: usize) -> Self {
        Self(val as u32)
    }
}
