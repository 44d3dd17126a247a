//! Values produced by a scheduling run.

use std::fmt;

use rota_core::{Day, Shift, WorkerId};
use rota_grid::Schedule;
use rota_roster::Roster;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// The three phases of a run, in execution order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    Placement,
    Backfill,
    Resolution,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Placement  => "placement",
            Phase::Backfill   => "backfill",
            Phase::Resolution => "resolution",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StaffingWarning ───────────────────────────────────────────────────────────

/// A cell the backfill could not bring up to the staffing floor.
///
/// Informational: the schedule is still accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaffingWarning {
    pub day:     Day,
    pub shift:   Shift,
    /// Workers in the cell once the backfill gave up.
    pub staffed: usize,
    pub minimum: usize,
}

impl fmt::Display for StaffingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not assign minimum staff to {} on {}", self.shift, self.day)
    }
}

// ── Reassignment ──────────────────────────────────────────────────────────────

/// Which remedy the resolution phase applied.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveKind {
    /// Moved to a better-ranked shift on the same day.
    SameDayUpgrade,
    /// Moved to the top-ranked shift of the following day.
    NextDayMove,
}

/// One move made by the resolution phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reassignment {
    pub worker: WorkerId,
    pub from:   (Day, Shift),
    pub to:     (Day, Shift),
    pub kind:   MoveKind,
}

// ── ScheduleOutcome ───────────────────────────────────────────────────────────

/// The finished schedule and everything reported while building it.
#[derive(Clone, Debug)]
pub struct ScheduleOutcome {
    /// The roster the schedule was built for, for resolving names.
    pub roster:        Roster,
    pub schedule:      Schedule,
    pub warnings:      Vec<StaffingWarning>,
    pub reassignments: Vec<Reassignment>,
}

impl ScheduleOutcome {
    /// Names of the workers on `(day, shift)`, in assignment order.
    pub fn names_in(&self, day: Day, shift: Shift) -> Vec<&str> {
        self.schedule
            .workers_in(day, shift)
            .iter()
            .filter_map(|&w| self.roster.name(w))
            .collect()
    }

    /// `true` when every cell met the staffing floor.
    pub fn is_fully_staffed(&self) -> bool {
        self.warnings.is_empty()
    }
}
