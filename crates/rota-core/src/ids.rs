//! Strongly typed worker identifier.
//!
//! A `WorkerId` is the worker's position in the roster's registration order.
//! Iterating ids in ascending order therefore walks workers in the order
//! they were registered, which the placement and conflict phases rely on
//! for their first-come tie-break.

use std::fmt;

/// Index of a worker in roster storage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerId(pub u32);

impl WorkerId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WorkerId({})", self.0)
    }
}

impl From<WorkerId> for usize {
    #[inline(always)]
    fn from(id: WorkerId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for WorkerId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<WorkerId, Self::Error> {
        u32::try_from(n).map(WorkerId)
    }
}
