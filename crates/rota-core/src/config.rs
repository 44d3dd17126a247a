//! Staffing limits shared by the grid and the scheduler engine.

use crate::{CoreError, CoreResult};

/// Floor and ceiling per shift cell, and the weekly workload cap per worker.
///
/// The defaults are the rota's standing rules: at least 2 and at most 3
/// workers per shift, and no worker on more than 5 days a week.  The ceiling
/// and the weekly cap are hard limits; the floor is best effort (an unmet
/// floor produces a warning, not an error).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaffingLimits {
    /// Target minimum workers per (day, shift) cell.  Default: 2.
    pub min_per_shift: usize,

    /// Hard maximum workers per (day, shift) cell.  Default: 3.
    pub max_per_shift: usize,

    /// Hard maximum number of days any worker is assigned per week.  Default: 5.
    pub max_days_per_week: usize,
}

impl StaffingLimits {
    pub const DEFAULT_MIN_PER_SHIFT: usize = 2;
    pub const DEFAULT_MAX_PER_SHIFT: usize = 3;
    pub const DEFAULT_MAX_DAYS_PER_WEEK: usize = 5;

    /// Reject limits no schedule could satisfy.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_per_shift == 0 {
            return Err(CoreError::Config("max_per_shift must be at least 1".into()));
        }
        if self.min_per_shift > self.max_per_shift {
            return Err(CoreError::Config(format!(
                "min_per_shift ({}) exceeds max_per_shift ({})",
                self.min_per_shift, self.max_per_shift
            )));
        }
        if self.max_days_per_week == 0 || self.max_days_per_week > crate::Day::COUNT {
            return Err(CoreError::Config(format!(
                "max_days_per_week must be between 1 and {}, got {}",
                crate::Day::COUNT,
                self.max_days_per_week
            )));
        }
        Ok(())
    }
}

impl Default for StaffingLimits {
    fn default() -> Self {
        Self {
            min_per_shift:     Self::DEFAULT_MIN_PER_SHIFT,
            max_per_shift:     Self::DEFAULT_MAX_PER_SHIFT,
            max_days_per_week: Self::DEFAULT_MAX_DAYS_PER_WEEK,
        }
    }
}
