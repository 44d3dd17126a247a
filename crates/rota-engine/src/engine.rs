//! The `Scheduler` struct and its phase sequence.

use tracing::info;

use rota_core::Shuffler;
use rota_grid::Schedule;
use rota_roster::Roster;

use crate::{EngineResult, Phase, ScheduleOutcome, SchedulerObserver};

/// The main scheduling runner.
///
/// `Scheduler<S>` owns the roster, the grid, and the shuffle source, and
/// drives the three phases:
///
/// 1. **Placement** ([`place_preferences`](Self::place_preferences)):
///    greedy, preference-ranked, first-come by registration order.
/// 2. **Backfill** ([`backfill_minimum_staff`](Self::backfill_minimum_staff)):
///    shuffled top-up of cells below the floor.
/// 3. **Resolution** ([`resolve_conflicts`](Self::resolve_conflicts)):
///    single-pass upgrade toward each worker's top choice.
///
/// Phases can be run one at a time (each runs exactly once over its units of
/// work), or all together with [`run`](Self::run).
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct Scheduler<S: Shuffler> {
    /// Immutable for the lifetime of the scheduler.
    pub(crate) roster: Roster,

    /// Grid + worker state.  Only mutated through its paired operations.
    pub(crate) schedule: Schedule,

    /// Candidate ordering for the backfill phase.
    pub(crate) shuffler: S,
}

impl<S: Shuffler> Scheduler<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Clear any previous assignments, then run all three phases in order.
    ///
    /// The returned outcome carries a copy of the final grid together with
    /// every warning and move reported along the way.
    pub fn run<O: SchedulerObserver>(&mut self, observer: &mut O) -> EngineResult<ScheduleOutcome> {
        self.reset();

        observer.on_phase_start(Phase::Placement);
        let placed = self.place_preferences()?;
        observer.on_phase_end(Phase::Placement, placed);

        observer.on_phase_start(Phase::Backfill);
        let before = self.schedule.total_assignments();
        let warnings = self.backfill_minimum_staff(observer)?;
        observer.on_phase_end(Phase::Backfill, self.schedule.total_assignments() - before);

        observer.on_phase_start(Phase::Resolution);
        let reassignments = self.resolve_conflicts(observer)?;
        observer.on_phase_end(Phase::Resolution, reassignments.len());

        info!(
            workers       = self.roster.len(),
            assignments   = self.schedule.total_assignments(),
            understaffed  = warnings.len(),
            reassignments = reassignments.len(),
            "schedule complete"
        );

        Ok(ScheduleOutcome {
            roster: self.roster.clone(),
            schedule: self.schedule.clone(),
            warnings,
            reassignments,
        })
    }

    /// Drop every assignment so the phases can be run again from scratch.
    pub fn reset(&mut self) {
        self.schedule.clear();
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read-only view of the grid and worker state.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Guarded mutable access, e.g. to seed a grid before running a single
    /// phase.  Only the paired `assign`/`unassign`/`reassign` operations are
    /// reachable through it.
    pub fn schedule_mut(&mut self) -> &mut Schedule {
        &mut self.schedule
    }

    /// Turn a scheduler whose phases were run one at a time into an outcome
    /// (roster plus grid).  Warnings and moves returned by the individual
    /// phases are not tracked here, so both lists start empty.
    pub fn into_outcome(self) -> ScheduleOutcome {
        ScheduleOutcome {
            roster:        self.roster,
            schedule:      self.schedule,
            warnings:      Vec::new(),
            reassignments: Vec::new(),
        }
    }
}
