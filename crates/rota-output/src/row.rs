//! Plain data row types written by output backends.

use rota_core::{Day, Shift};
use rota_engine::StaffingWarning;

/// One worker in one cell of the final grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    pub day:    Day,
    pub shift:  Shift,
    /// Position within the cell, in assignment order, starting at 0.
    pub slot:   usize,
    pub worker: String,
}

/// A cell left below the staffing floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningRow {
    pub day:     Day,
    pub shift:   Shift,
    pub staffed: usize,
    pub minimum: usize,
}

impl From<&StaffingWarning> for WarningRow {
    fn from(w: &StaffingWarning) -> Self {
        Self { day: w.day, shift: w.shift, staffed: w.staffed, minimum: w.minimum }
    }
}
